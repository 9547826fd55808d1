//! Grouping a champion's augment statistics by tier and ranking each group.
//!
//! Building a [`TierGroups`] runs the whole scoring pipeline:
//!
//! 1. drop records without data (no-data performance sentinel, zero popularity)
//! 2. resolve each record's tier through the reference table, skipping ids
//!    the table does not know
//! 3. per tier, normalize performance and popularity
//! 4. per tier, combine them into a weighted sum
//! 5. per tier, sort by weighted sum and assign ranks `1..=tier_size`
//!
//! Any validation error in steps 3-4 aborts the build.

use std::{
    cmp::Ordering,
    collections::{BTreeMap, HashMap, HashSet},
};

use serde::{Deserialize, Serialize};

use crate::{
    AdvisorError,
    normalize::{self, NormalizeStrategy},
    record::{Attribute, AugmentId, AugmentScore, AugmentStat, AugmentTier},
    reference::AugmentReference,
    score::{self, NormalizedColumn, Weights},
};

/// Performance value scrapers emit for augments without data.
pub const NO_DATA_PERFORMANCE: f64 = 170.0;

/// How a tier group is normalized and scored.
///
/// Serialized as a flat table; unknown keys are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "PolicyTable", into = "PolicyTable")]
pub struct ScoringPolicy {
    pub weights: Weights,
    pub no_data_performance: f64,
    pub performance_strategy: NormalizeStrategy,
    pub popularity_strategy: NormalizeStrategy,
}

/// On-disk layout of [`ScoringPolicy`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PolicyTable {
    performance_weight: f64,
    popularity_weight: f64,
    no_data_performance: f64,
    performance_strategy: NormalizeStrategy,
    popularity_strategy: NormalizeStrategy,
}

impl Default for PolicyTable {
    fn default() -> Self {
        ScoringPolicy::default().into()
    }
}

impl From<PolicyTable> for ScoringPolicy {
    fn from(table: PolicyTable) -> Self {
        Self {
            weights: Weights {
                performance: table.performance_weight,
                popularity: table.popularity_weight,
            },
            no_data_performance: table.no_data_performance,
            performance_strategy: table.performance_strategy,
            popularity_strategy: table.popularity_strategy,
        }
    }
}

impl From<ScoringPolicy> for PolicyTable {
    fn from(policy: ScoringPolicy) -> Self {
        Self {
            performance_weight: policy.weights.performance,
            popularity_weight: policy.weights.popularity,
            no_data_performance: policy.no_data_performance,
            performance_strategy: policy.performance_strategy,
            popularity_strategy: policy.popularity_strategy,
        }
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            no_data_performance: NO_DATA_PERFORMANCE,
            performance_strategy: NormalizeStrategy::RobustMinMax,
            popularity_strategy: NormalizeStrategy::MinMax,
        }
    }
}

/// Ranked tier groups for one champion.
#[derive(Debug, Clone, Default)]
pub struct TierGroups {
    groups: BTreeMap<AugmentTier, Vec<AugmentId>>,
    scores: HashMap<AugmentId, AugmentScore>,
    excluded: Vec<AugmentId>,
    skipped: Vec<AugmentId>,
}

impl TierGroups {
    /// Groups, scores and ranks `stats`.
    ///
    /// Records whose id is missing from `reference` are skipped with a warning;
    /// every other failure aborts the build.
    pub fn build<R>(
        stats: &[AugmentStat],
        reference: &R,
        policy: &ScoringPolicy,
    ) -> Result<Self, AdvisorError>
    where
        R: AugmentReference + ?Sized,
    {
        if stats.is_empty() {
            return Err(AdvisorError::EmptyPopulation {
                what: "no augment statistics supplied",
            });
        }
        check_unique_ids(stats)?;

        let mut this = Self::default();
        let mut members: BTreeMap<AugmentTier, Vec<&AugmentStat>> = BTreeMap::new();
        for stat in stats {
            if !stat.has_data(policy.no_data_performance) {
                this.excluded.push(stat.id);
                continue;
            }
            let Some(info) = reference.info(stat.id) else {
                let error = AdvisorError::UnknownAugmentId { id: stat.id };
                tracing::warn!(%error, "skipping augment");
                this.skipped.push(stat.id);
                continue;
            };
            members.entry(info.tier).or_default().push(stat);
        }

        for (tier, group) in members {
            let ranked = rank_group(&group, policy)?;
            tracing::debug!(%tier, size = ranked.len(), "ranked tier group");
            let ids = ranked.iter().map(|(id, _)| *id).collect();
            this.scores.extend(ranked);
            this.groups.insert(tier, ids);
        }

        Ok(this)
    }

    /// Ids of `tier`, best rank first.
    #[must_use]
    pub fn group(&self, tier: AugmentTier) -> &[AugmentId] {
        self.groups.get(&tier).map_or(&[], Vec::as_slice)
    }

    /// Non-empty groups in tier order.
    pub fn iter(&self) -> impl Iterator<Item = (AugmentTier, &[AugmentId])> + '_ {
        self.groups.iter().map(|(tier, ids)| (*tier, ids.as_slice()))
    }

    #[must_use]
    pub fn score(&self, id: AugmentId) -> Option<&AugmentScore> {
        self.scores.get(&id)
    }

    /// Number of ranked augments across all tiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Ids dropped for carrying no data.
    #[must_use]
    pub fn excluded(&self) -> &[AugmentId] {
        &self.excluded
    }

    /// Ids skipped because the reference table has no entry for them.
    #[must_use]
    pub fn skipped(&self) -> &[AugmentId] {
        &self.skipped
    }
}

fn check_unique_ids(stats: &[AugmentStat]) -> Result<(), AdvisorError> {
    let mut seen = HashSet::with_capacity(stats.len());
    for stat in stats {
        if !seen.insert(stat.id) {
            return Err(AdvisorError::DuplicateAugmentId { id: stat.id });
        }
    }
    Ok(())
}

/// Scores one tier group and returns `(id, score)` pairs ordered by rank.
fn rank_group(
    group: &[&AugmentStat],
    policy: &ScoringPolicy,
) -> Result<Vec<(AugmentId, AugmentScore)>, AdvisorError> {
    let performance =
        normalize::normalize_attribute(group, Attribute::Performance, policy.performance_strategy)?;
    let popularity =
        normalize::normalize_attribute(group, Attribute::Popularity, policy.popularity_strategy)?;

    let column = |values: &[f64]| -> NormalizedColumn {
        group.iter().map(|stat| stat.id).zip(values.iter().copied()).collect()
    };
    let weighted = score::score_population(
        group,
        &column(&performance),
        &column(&popularity),
        policy.weights,
    )?;

    let mut order = (0..group.len()).collect::<Vec<_>>();
    order.sort_by(|&a, &b| {
        by_score_then_id((weighted[a], group[a].id), (weighted[b], group[b].id))
    });

    let tier_size = group.len();
    Ok(order
        .into_iter()
        .enumerate()
        .map(|(position, i)| {
            let score = AugmentScore {
                performance_norm: performance[i],
                popularity_norm: popularity[i],
                weighted_sum: weighted[i],
                rank: position + 1,
                tier_size,
            };
            (group[i].id, score)
        })
        .collect())
}

/// Descending weighted sum; equal sums fall back to ascending id.
fn by_score_then_id(a: (f64, AugmentId), b: (f64, AugmentId)) -> Ordering {
    b.0.total_cmp(&a.0).then_with(|| a.1.cmp(&b.1))
}
