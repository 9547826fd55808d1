use std::collections::HashMap;

use crate::{
    error::SourceError,
    record::{AugmentStat, ChampionId},
};

/// Supplies a champion's raw augment statistics.
pub trait AugmentStatSource {
    fn load_stats(&self, champion: ChampionId) -> Result<Vec<AugmentStat>, SourceError>;
}

impl<S> AugmentStatSource for &S
where
    S: AugmentStatSource + ?Sized,
{
    fn load_stats(&self, champion: ChampionId) -> Result<Vec<AugmentStat>, SourceError> {
        (**self).load_stats(champion)
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("no augment statistics for champion {champion}")]
pub struct MissingChampionError {
    pub champion: ChampionId,
}

/// Statistics held in memory, keyed by champion.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStatSource {
    stats: HashMap<ChampionId, Vec<AugmentStat>>,
}

impl InMemoryStatSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_champion(mut self, champion: ChampionId, stats: Vec<AugmentStat>) -> Self {
        self.insert(champion, stats);
        self
    }

    pub fn insert(&mut self, champion: ChampionId, stats: Vec<AugmentStat>) {
        self.stats.insert(champion, stats);
    }
}

impl AugmentStatSource for InMemoryStatSource {
    fn load_stats(&self, champion: ChampionId) -> Result<Vec<AugmentStat>, SourceError> {
        self.stats
            .get(&champion)
            .cloned()
            .ok_or_else(|| SourceError::new(MissingChampionError { champion }))
    }
}
