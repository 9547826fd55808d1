//! Threshold rules turning ranked draft candidates into suggestions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::RankedAugment;

/// Deployment-configured thresholds for the suggestion rules.
///
/// Percentage thresholds are fractions of the tier size (`0.0..=1.0`): with a
/// tier of 40 augments, `0.1` means "rank 4 or better".
///
/// Unknown keys are rejected. The `precentage` spelling used by older
/// deployments is accepted for the percentage thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectThresholds {
    pub immediate_select_weighted_sum_threshold: f64,
    #[serde(alias = "immediate_select_precentage_threshold")]
    pub immediate_select_percentage_threshold: f64,
    pub consider_select_weighted_sum_threshold: f64,
    #[serde(alias = "consider_select_precentage_threshold")]
    pub consider_select_percentage_threshold: f64,
}

impl Default for SelectThresholds {
    fn default() -> Self {
        Self {
            immediate_select_weighted_sum_threshold: 0.85,
            immediate_select_percentage_threshold: 0.1,
            consider_select_weighted_sum_threshold: 0.6,
            consider_select_percentage_threshold: 0.3,
        }
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("{name} must be within 0.0..=1.0 (got {value})")]
pub struct InvalidThresholdError {
    pub name: &'static str,
    pub value: f64,
}

impl SelectThresholds {
    /// Checks that both percentage thresholds are fractions.
    pub fn validate(&self) -> Result<(), InvalidThresholdError> {
        for (name, value) in [
            (
                "immediate_select_percentage_threshold",
                self.immediate_select_percentage_threshold,
            ),
            (
                "consider_select_percentage_threshold",
                self.consider_select_percentage_threshold,
            ),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(InvalidThresholdError { name, value });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    /// Take it, nothing else in the draft matters.
    PickNow,
    /// Worth keeping, and the best of the offered augments.
    ConsiderKeeping,
    /// Decent, but something better is on offer.
    ConsiderDiscardable,
    /// Too weak to pick.
    Skip,
}

/// Classifies one candidate. The immediate rule wins over the consider rule.
///
/// `sorted_index` is the candidate's position in the batch after sorting by
/// weighted sum; only the first candidate gets the "keep" variant.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn classify(
    rank: usize,
    weighted_sum: f64,
    tier_size: usize,
    sorted_index: usize,
    thresholds: &SelectThresholds,
) -> Verdict {
    let rank = rank as f64;
    let tier_size = tier_size as f64;
    let immediate_rank = tier_size * thresholds.immediate_select_percentage_threshold;
    let consider_rank = tier_size * thresholds.consider_select_percentage_threshold;

    if rank <= immediate_rank || weighted_sum >= thresholds.immediate_select_weighted_sum_threshold
    {
        Verdict::PickNow
    } else if rank <= consider_rank
        || weighted_sum >= thresholds.consider_select_weighted_sum_threshold
    {
        if sorted_index == 0 {
            Verdict::ConsiderKeeping
        } else {
            Verdict::ConsiderDiscardable
        }
    } else {
        Verdict::Skip
    }
}

/// A suggestion for one offered augment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub name: String,
    pub rank: usize,
    /// Tier size the batch was judged against.
    pub tier_size: usize,
    pub weighted_sum: f64,
    pub verdict: Verdict,
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            name,
            rank,
            tier_size,
            ..
        } = self;
        match self.verdict {
            Verdict::PickNow => {
                write!(f, "pick now: {name}, nothing else matters, {rank}/{tier_size}")
            }
            Verdict::ConsiderKeeping => {
                write!(f, "consider keeping: {name}, don't swap yet, {rank}/{tier_size}")
            }
            Verdict::ConsiderDiscardable => {
                write!(f, "consider: {name}, safe to discard, {rank}/{tier_size}")
            }
            Verdict::Skip => {
                write!(f, "weak augment: {name}, don't pick, too weak, {rank}/{tier_size}")
            }
        }
    }
}

/// Suggests an action for each candidate, best weighted sum first.
///
/// `candidates` must be in observed order: the tier size of the first one is
/// used for the whole batch, since a draft offers augments of a single tier.
#[must_use]
pub fn suggest(candidates: &[RankedAugment<'_>], thresholds: &SelectThresholds) -> Vec<Suggestion> {
    let Some(first) = candidates.first() else {
        return vec![];
    };
    let tier_size = first.tier_size();
    if candidates.iter().any(|c| c.tier() != first.tier()) {
        tracing::warn!(
            tier = %first.tier(),
            tier_size,
            "draft candidates span several tiers; judging all against the first one"
        );
    }

    let mut sorted = candidates.to_vec();
    sorted.sort_by(|a, b| {
        b.weighted_sum()
            .total_cmp(&a.weighted_sum())
            .then_with(|| a.rank().cmp(&b.rank()))
            .then_with(|| a.id().cmp(&b.id()))
    });

    sorted
        .iter()
        .enumerate()
        .map(|(index, candidate)| Suggestion {
            name: candidate.name().to_string(),
            rank: candidate.rank(),
            tier_size,
            weighted_sum: candidate.weighted_sum(),
            verdict: classify(
                candidate.rank(),
                candidate.weighted_sum(),
                tier_size,
                index,
                thresholds,
            ),
        })
        .collect()
}
