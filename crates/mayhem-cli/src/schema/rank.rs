use mayhem_advisor::record::{AugmentId, AugmentTier, ChampionId, RankedAugment, StatValue};
use serde::Serialize;

/// Ranking report for one champion, written by `mayhem rank --output`.
#[derive(Debug, Clone, Serialize)]
pub struct RankReport {
    pub champion: ChampionId,
    pub tiers: Vec<TierReport>,
    /// Ids dropped for carrying no data
    pub excluded: Vec<AugmentId>,
    /// Ids missing from the reference table
    pub skipped: Vec<AugmentId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TierReport {
    pub tier: AugmentTier,
    pub size: usize,
    pub weighted_sum: Option<WeightedSumSummary>,
    pub augments: Vec<RankedEntry>,
}

/// Spread of weighted sums within a tier.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WeightedSumSummary {
    pub min: f64,
    pub p25: f64,
    pub median: f64,
    pub p75: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedEntry {
    pub id: AugmentId,
    pub name: String,
    pub rank: usize,
    pub performance: Option<f64>,
    pub popularity: Option<f64>,
    pub performance_norm: f64,
    pub popularity_norm: f64,
    pub weighted_sum: f64,
}

impl From<RankedAugment<'_>> for RankedEntry {
    fn from(augment: RankedAugment<'_>) -> Self {
        Self {
            id: augment.id(),
            name: augment.name().to_string(),
            rank: augment.rank(),
            performance: augment.stat.performance.as_ref().and_then(StatValue::as_number),
            popularity: augment.stat.popularity.as_ref().and_then(StatValue::as_number),
            performance_norm: augment.score.performance_norm,
            popularity_norm: augment.score.popularity_norm,
            weighted_sum: augment.weighted_sum(),
        }
    }
}
