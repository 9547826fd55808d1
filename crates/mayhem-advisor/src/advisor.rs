use std::collections::HashMap;

use crate::{
    AdvisorError,
    record::{AugmentId, AugmentStat, AugmentTier, ChampionId, RankedAugment},
    recommend::{self, SelectThresholds, Suggestion},
    reference::AugmentReference,
    source::AugmentStatSource,
    tier_group::{ScoringPolicy, TierGroups},
};

/// Ranked augment statistics for one champion.
///
/// Everything is computed at construction; afterwards the advisor is read-only.
/// Building for another champion means building another advisor.
#[derive(Debug, Clone)]
pub struct AugmentAdvisor<R> {
    reference: R,
    stats: Vec<AugmentStat>,
    index: HashMap<AugmentId, usize>,
    groups: TierGroups,
}

impl<R> AugmentAdvisor<R>
where
    R: AugmentReference,
{
    /// Groups, scores and ranks `stats` against `reference`.
    pub fn build(
        reference: R,
        stats: Vec<AugmentStat>,
        policy: &ScoringPolicy,
    ) -> Result<Self, AdvisorError> {
        let groups = TierGroups::build(&stats, &reference, policy)?;
        let index = stats
            .iter()
            .enumerate()
            .map(|(i, stat)| (stat.id, i))
            .collect();
        tracing::info!(
            ranked = groups.len(),
            excluded = groups.excluded().len(),
            skipped = groups.skipped().len(),
            "built augment advisor"
        );
        Ok(Self {
            reference,
            stats,
            index,
            groups,
        })
    }

    /// Loads `champion`'s statistics from `source` and builds an advisor.
    pub fn from_source<S>(
        reference: R,
        source: &S,
        champion: ChampionId,
        policy: &ScoringPolicy,
    ) -> Result<Self, AdvisorError>
    where
        S: AugmentStatSource + ?Sized,
    {
        let stats = source
            .load_stats(champion)
            .map_err(|source| AdvisorError::Source { champion, source })?;
        tracing::debug!(%champion, records = stats.len(), "loaded augment statistics");
        Self::build(reference, stats, policy)
    }

    #[must_use]
    pub fn reference(&self) -> &R {
        &self.reference
    }

    /// Looks up a ranked augment. Excluded or skipped records are not found.
    #[must_use]
    pub fn record_by_id(&self, id: AugmentId) -> Option<RankedAugment<'_>> {
        let score = self.groups.score(id)?;
        let stat = &self.stats[*self.index.get(&id)?];
        let info = self.reference.info(id)?;
        Some(RankedAugment { stat, info, score })
    }

    /// Resolves an observed augment name to its ranked record.
    pub fn resolve_name(&self, name: &str) -> Result<RankedAugment<'_>, AdvisorError> {
        let id = self
            .reference
            .id_by_name(name)
            .ok_or_else(|| AdvisorError::UnknownAugmentName {
                name: name.to_string(),
            })?;
        self.record_by_id(id)
            .ok_or_else(|| AdvisorError::UnrankedAugment {
                name: name.trim().to_string(),
                id,
            })
    }

    /// Suggestions for the augments offered in a draft, best first.
    ///
    /// Every name must resolve; a single unknown name fails the whole batch.
    pub fn suggest<S>(
        &self,
        names: &[S],
        thresholds: &SelectThresholds,
    ) -> Result<Vec<Suggestion>, AdvisorError>
    where
        S: AsRef<str>,
    {
        let candidates = names
            .iter()
            .map(|name| self.resolve_name(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(recommend::suggest(&candidates, thresholds))
    }

    /// Recommendation lines for the augments offered in a draft, best first.
    pub fn recommend<S>(
        &self,
        names: &[S],
        thresholds: &SelectThresholds,
    ) -> Result<Vec<String>, AdvisorError>
    where
        S: AsRef<str>,
    {
        Ok(self
            .suggest(names, thresholds)?
            .iter()
            .map(ToString::to_string)
            .collect())
    }

    /// Ranked augments of `tier`, best first.
    pub fn tier(&self, tier: AugmentTier) -> impl Iterator<Item = RankedAugment<'_>> + '_ {
        self.groups
            .group(tier)
            .iter()
            .filter_map(|id| self.record_by_id(*id))
    }

    /// Tiers that have at least one ranked augment.
    pub fn tiers(&self) -> impl Iterator<Item = AugmentTier> + '_ {
        self.groups.iter().map(|(tier, _)| tier)
    }

    /// Number of ranked augments across all tiers.
    #[must_use]
    pub fn ranked_len(&self) -> usize {
        self.groups.len()
    }

    /// Ids dropped for carrying no data.
    #[must_use]
    pub fn excluded(&self) -> &[AugmentId] {
        self.groups.excluded()
    }

    /// Ids skipped because the reference table does not know them.
    #[must_use]
    pub fn skipped(&self) -> &[AugmentId] {
        self.groups.skipped()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        record::AugmentInfo,
        reference::AugmentCatalog,
        source::InMemoryStatSource,
        tier_group::NO_DATA_PERFORMANCE,
    };

    fn catalog() -> AugmentCatalog {
        AugmentCatalog::new([
            AugmentInfo::new(1, "Red Envelopes", AugmentTier::Silver),
            AugmentInfo::new(2, "Soul Eater", AugmentTier::Silver),
            AugmentInfo::new(3, "Veteran Sharpshooter", AugmentTier::Silver),
            AugmentInfo::new(4, "Ice Cold", AugmentTier::Silver),
            AugmentInfo::new(5, "Goliath", AugmentTier::Silver),
            AugmentInfo::new(11, "Tank Engine", AugmentTier::Gold),
            AugmentInfo::new(12, "Dashing", AugmentTier::Gold),
            AugmentInfo::new(21, "Transmute: Chaos", AugmentTier::Prismatic),
        ])
    }

    fn stats() -> Vec<AugmentStat> {
        vec![
            AugmentStat::new(1, 52.0, 800.0),
            AugmentStat::new(2, 55.0, 400.0),
            AugmentStat::new(3, 49.0, 100.0),
            AugmentStat::new(4, NO_DATA_PERFORMANCE, 20.0),
            AugmentStat::new(5, 47.0, 300.0),
            AugmentStat::new(11, 53.0, 90.0),
            AugmentStat::new(12, 51.0, 60.0),
            AugmentStat::new(99, 60.0, 900.0),
        ]
    }

    fn advisor(catalog: &AugmentCatalog) -> AugmentAdvisor<&AugmentCatalog> {
        AugmentAdvisor::build(catalog, stats(), &ScoringPolicy::default()).unwrap()
    }

    #[test]
    fn test_build_ranks_each_tier() {
        let catalog = catalog();
        let advisor = advisor(&catalog);

        assert_eq!(advisor.ranked_len(), 6);
        assert_eq!(advisor.excluded(), &[AugmentId(4)]);
        assert_eq!(advisor.skipped(), &[AugmentId(99)]);
        assert_eq!(
            advisor.tiers().collect::<Vec<_>>(),
            vec![AugmentTier::Silver, AugmentTier::Gold]
        );

        let silver = advisor
            .tier(AugmentTier::Silver)
            .map(|a| (a.name().to_string(), a.rank(), a.tier_size()))
            .collect::<Vec<_>>();
        assert_eq!(
            silver,
            vec![
                ("Soul Eater".to_string(), 1, 4),
                ("Red Envelopes".to_string(), 2, 4),
                ("Veteran Sharpshooter".to_string(), 3, 4),
                ("Goliath".to_string(), 4, 4),
            ]
        );
    }

    #[test]
    fn test_record_by_id() {
        let catalog = catalog();
        let advisor = advisor(&catalog);

        let record = advisor.record_by_id(AugmentId(11)).unwrap();
        assert_eq!(record.name(), "Tank Engine");
        assert_eq!(record.tier(), AugmentTier::Gold);
        assert_eq!((record.rank(), record.tier_size()), (1, 2));
        assert_eq!(record.weighted_sum(), 1.0);

        assert!(advisor.record_by_id(AugmentId(4)).is_none());
        assert!(advisor.record_by_id(AugmentId(99)).is_none());
        assert!(advisor.record_by_id(AugmentId(1000)).is_none());
    }

    #[test]
    fn test_recommend_orders_by_weighted_sum() {
        let catalog = catalog();
        let advisor = advisor(&catalog);
        let thresholds = SelectThresholds {
            immediate_select_weighted_sum_threshold: 2.0,
            immediate_select_percentage_threshold: 0.25,
            consider_select_weighted_sum_threshold: 2.0,
            consider_select_percentage_threshold: 0.5,
        };

        let lines = advisor
            .recommend(
                &["Veteran Sharpshooter", "Red Envelopes", "Soul Eater"],
                &thresholds,
            )
            .unwrap();
        assert_eq!(
            lines,
            vec![
                "pick now: Soul Eater, nothing else matters, 1/4",
                "consider: Red Envelopes, safe to discard, 2/4",
                "weak augment: Veteran Sharpshooter, don't pick, too weak, 3/4",
            ]
        );
    }

    #[test]
    fn test_recommend_keeps_top_consider_candidate() {
        let catalog = catalog();
        let advisor = advisor(&catalog);
        let thresholds = SelectThresholds {
            immediate_select_weighted_sum_threshold: 2.0,
            immediate_select_percentage_threshold: 0.0,
            consider_select_weighted_sum_threshold: 2.0,
            consider_select_percentage_threshold: 0.5,
        };

        let lines = advisor
            .recommend(&["Goliath", "Red Envelopes"], &thresholds)
            .unwrap();
        assert_eq!(
            lines,
            vec![
                "consider keeping: Red Envelopes, don't swap yet, 2/4",
                "weak augment: Goliath, don't pick, too weak, 4/4",
            ]
        );
    }

    #[test]
    fn test_unknown_name_fails_whole_batch() {
        let catalog = catalog();
        let advisor = advisor(&catalog);
        let err = advisor
            .recommend(
                &["Soul Eater", "Soul Eatre", "Goliath"],
                &SelectThresholds::default(),
            )
            .unwrap_err();
        assert!(matches!(err, AdvisorError::UnknownAugmentName { name } if name == "Soul Eatre"));
    }

    #[test]
    fn test_unranked_name_fails_whole_batch() {
        let catalog = catalog();
        let advisor = advisor(&catalog);
        let err = advisor
            .recommend(&["Ice Cold", "Goliath"], &SelectThresholds::default())
            .unwrap_err();
        assert!(matches!(
            err,
            AdvisorError::UnrankedAugment { id: AugmentId(4), .. }
        ));

        let err = advisor
            .recommend(&["Transmute: Chaos"], &SelectThresholds::default())
            .unwrap_err();
        assert!(matches!(err, AdvisorError::UnrankedAugment { .. }));
    }

    #[test]
    fn test_from_source() {
        let catalog = catalog();
        let source = InMemoryStatSource::new().with_champion(ChampionId(99), stats());

        let advisor = AugmentAdvisor::from_source(
            &catalog,
            &source,
            ChampionId(99),
            &ScoringPolicy::default(),
        )
        .unwrap();
        assert_eq!(advisor.ranked_len(), 6);

        let err = AugmentAdvisor::from_source(
            &catalog,
            &source,
            ChampionId(1),
            &ScoringPolicy::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AdvisorError::Source {
                champion: ChampionId(1),
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "failed to load augment statistics for champion 1"
        );
    }
}
