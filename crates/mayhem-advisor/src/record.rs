//! Augment records: raw statistics, reference entries and derived scores.
//!
//! Raw statistics ([`AugmentStat`]) are never modified after loading. Everything
//! computed from them lives in a separate [`AugmentScore`] keyed by
//! [`AugmentId`], and [`RankedAugment`] joins the three by reference.

use serde::{Deserialize, Serialize};

/// Stable augment identifier, unique within one champion's statistics.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
    derive_more::FromStr,
)]
#[serde(transparent)]
pub struct AugmentId(pub u32);

/// Champion (character) identifier used to key statistics.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
    derive_more::FromStr,
)]
#[serde(transparent)]
pub struct ChampionId(pub u32);

/// Rarity tier of an augment.
///
/// A draft only ever offers augments of one tier, so ranking happens per tier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
#[serde(rename_all = "lowercase")]
pub enum AugmentTier {
    #[display("silver")]
    Silver,
    #[display("gold")]
    Gold,
    #[display("prismatic")]
    Prismatic,
}

impl AugmentTier {
    pub const ALL: [Self; 3] = [Self::Silver, Self::Gold, Self::Prismatic];
}

/// Named attribute of an augment, used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Attribute {
    #[display("performance")]
    Performance,
    #[display("popularity")]
    Popularity,
    #[display("performance_norm")]
    PerformanceNorm,
    #[display("popularity_norm")]
    PopularityNorm,
}

/// A raw statistic value as it appears in scraped data.
///
/// Scraped sources are loosely typed; keeping non-numeric values around lets the
/// normalizer report them instead of failing at deserialization time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Text(String),
    Flag(bool),
}

impl StatValue {
    /// Returns the value if it is a finite number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) if v.is_finite() => Some(*v),
            _ => None,
        }
    }
}

impl From<f64> for StatValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl std::fmt::Display for StatValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Flag(b) => write!(f, "{b}"),
        }
    }
}

/// One scraped statistic for one augment on one champion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AugmentStat {
    pub id: AugmentId,
    #[serde(default)]
    pub performance: Option<StatValue>,
    #[serde(default, alias = "popular")]
    pub popularity: Option<StatValue>,
}

impl AugmentStat {
    #[must_use]
    pub fn new(id: u32, performance: f64, popularity: f64) -> Self {
        Self {
            id: AugmentId(id),
            performance: Some(StatValue::Number(performance)),
            popularity: Some(StatValue::Number(popularity)),
        }
    }

    #[must_use]
    pub fn attribute(&self, attribute: Attribute) -> Option<&StatValue> {
        match attribute {
            Attribute::Performance => self.performance.as_ref(),
            Attribute::Popularity => self.popularity.as_ref(),
            Attribute::PerformanceNorm | Attribute::PopularityNorm => None,
        }
    }

    /// Whether this record belongs in the ranking population.
    ///
    /// Records whose performance equals the no-data sentinel, or whose
    /// popularity is zero, carry no usable signal. Missing or non-numeric values
    /// are kept so the normalizer can reject them.
    #[expect(clippy::float_cmp)]
    #[must_use]
    pub fn has_data(&self, no_data_performance: f64) -> bool {
        let no_performance = self
            .performance
            .as_ref()
            .and_then(StatValue::as_number)
            .is_some_and(|v| v == no_data_performance);
        let no_popularity = self
            .popularity
            .as_ref()
            .and_then(StatValue::as_number)
            .is_some_and(|v| v == 0.0);
        !(no_performance || no_popularity)
    }
}

/// Reference-table entry for an augment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AugmentInfo {
    pub id: AugmentId,
    pub name: String,
    pub tier: AugmentTier,
}

impl AugmentInfo {
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>, tier: AugmentTier) -> Self {
        Self {
            id: AugmentId(id),
            name: name.into(),
            tier,
        }
    }
}

/// Values derived for a ranked augment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AugmentScore {
    /// Normalized performance, rounded to 4 decimals.
    pub performance_norm: f64,
    /// Normalized popularity, rounded to 4 decimals.
    pub popularity_norm: f64,
    /// Weighted combination of the normalized values, rounded to 2 decimals.
    pub weighted_sum: f64,
    /// 1-based position within the tier, best first.
    pub rank: usize,
    /// Number of ranked augments sharing this tier.
    pub tier_size: usize,
}

/// A ranked augment: raw stat, reference entry and derived score joined together.
#[derive(Debug, Clone, Copy)]
pub struct RankedAugment<'a> {
    pub stat: &'a AugmentStat,
    pub info: &'a AugmentInfo,
    pub score: &'a AugmentScore,
}

impl RankedAugment<'_> {
    #[must_use]
    pub fn id(&self) -> AugmentId {
        self.stat.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.info.name
    }

    #[must_use]
    pub fn tier(&self) -> AugmentTier {
        self.info.tier
    }

    #[must_use]
    pub fn rank(&self) -> usize {
        self.score.rank
    }

    #[must_use]
    pub fn tier_size(&self) -> usize {
        self.score.tier_size
    }

    #[must_use]
    pub fn weighted_sum(&self) -> f64 {
        self.score.weighted_sum
    }
}
