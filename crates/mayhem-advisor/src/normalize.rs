//! Rescaling of a numeric attribute across a population.
//!
//! Three strategies are supported:
//!
//! - `min-max`: `(x - min) / (max - min)` with bounds from the whole population
//! - `robust-min-max`: as `min-max`, but bounds come only from values inside the
//!   interquartile-range fences, so a few extreme values cannot squash everyone
//!   else into a narrow band
//! - `z-score`: `(x - mean) / std_dev`
//!
//! A population without spread (`min == max`, or `std_dev == 0`) maps every
//! input to `0.0`. Min-max results are not clamped: outliers excluded from the
//! robust bounds land outside `[0, 1]`.

use std::str::FromStr;

use mayhem_stats::{descriptive::DescriptiveStats, fences::TukeyFences};
use serde::{Deserialize, Serialize};

use crate::{
    AdvisorError,
    record::{Attribute, AugmentStat},
};

/// Decimal places kept on normalized attributes.
pub const NORMALIZED_DECIMALS: i32 = 4;

/// Rounds `value` to `decimals` decimal places (half away from zero).
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Normalization strategy, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NormalizeStrategy {
    MinMax,
    RobustMinMax,
    ZScore,
}

impl NormalizeStrategy {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::MinMax => "min-max",
            Self::RobustMinMax => "robust-min-max",
            Self::ZScore => "z-score",
        }
    }
}

impl std::fmt::Display for NormalizeStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NormalizeStrategy {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min-max" => Ok(Self::MinMax),
            "robust-min-max" => Ok(Self::RobustMinMax),
            "z-score" => Ok(Self::ZScore),
            _ => Err(AdvisorError::UnsupportedStrategy {
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for NormalizeStrategy {
    type Error = AdvisorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NormalizeStrategy> for String {
    fn from(value: NormalizeStrategy) -> Self {
        value.name().to_string()
    }
}

/// A fitted normalization: the parameters computed from a population, and the
/// mapping they define.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalization {
    MinMax { min: f64, max: f64 },
    ZScore { mean: f64, std_dev: f64 },
}

impl Normalization {
    /// Fits `strategy` to `values`.
    ///
    /// Fails with [`AdvisorError::EmptyPopulation`] if `values` is empty.
    pub fn fit(values: &[f64], strategy: NormalizeStrategy) -> Result<Self, AdvisorError> {
        match strategy {
            NormalizeStrategy::MinMax => normalize(values, false),
            NormalizeStrategy::RobustMinMax => normalize(values, true),
            NormalizeStrategy::ZScore => {
                let stats = DescriptiveStats::new(values.iter().copied()).ok_or(
                    AdvisorError::EmptyPopulation {
                        what: "no values to normalize",
                    },
                )?;
                Ok(Self::ZScore {
                    mean: stats.mean,
                    std_dev: stats.std_dev,
                })
            }
        }
    }

    /// Maps a raw value with the fitted parameters.
    #[must_use]
    pub fn apply(&self, value: f64) -> f64 {
        match *self {
            Self::MinMax { min, max } => {
                let range = max - min;
                if range == 0.0 {
                    0.0
                } else {
                    (value - min) / range
                }
            }
            Self::ZScore { mean, std_dev } => {
                if std_dev == 0.0 {
                    0.0
                } else {
                    (value - mean) / std_dev
                }
            }
        }
    }

    /// The `(min, max)` bounds of a min-max normalization.
    #[must_use]
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match *self {
            Self::MinMax { min, max } => Some((min, max)),
            Self::ZScore { .. } => None,
        }
    }
}

/// Min-max normalization, optionally with outlier-robust bounds.
///
/// With `robust`, bounds are taken from the values inside the Tukey fences
/// (`Q1 - 1.5 * IQR`, `Q3 + 1.5 * IQR`); if no value lies inside, the full
/// population is used instead.
pub fn normalize(values: &[f64], robust: bool) -> Result<Normalization, AdvisorError> {
    let empty = || AdvisorError::EmptyPopulation {
        what: "no values to normalize",
    };
    let all = DescriptiveStats::new(values.iter().copied()).ok_or_else(empty)?;
    if !robust {
        return Ok(Normalization::MinMax {
            min: all.min,
            max: all.max,
        });
    }

    let fences = TukeyFences::new(values).ok_or_else(empty)?;
    let (inliers, _outliers) = fences.partition(values);
    let (min, max) = match DescriptiveStats::new(inliers) {
        Some(normal) => (normal.min, normal.max),
        None => (all.min, all.max),
    };
    Ok(Normalization::MinMax { min, max })
}

/// Collects the numeric values of `attribute` across `population`.
///
/// Every record is checked before anything is returned: the first record
/// lacking the attribute or holding a non-numeric value fails the whole scan.
pub fn attribute_values(
    population: &[&AugmentStat],
    attribute: Attribute,
) -> Result<Vec<f64>, AdvisorError> {
    population
        .iter()
        .map(|stat| {
            let value =
                stat.attribute(attribute)
                    .ok_or(AdvisorError::MissingAttribute {
                        id: stat.id,
                        attribute,
                    })?;
            value
                .as_number()
                .ok_or_else(|| AdvisorError::NonNumericAttribute {
                    id: stat.id,
                    attribute,
                    value: value.to_string(),
                })
        })
        .collect()
}

/// Normalizes `attribute` across `population`, rounding each result to
/// [`NORMALIZED_DECIMALS`] places.
///
/// Results are in the same order as `population`.
pub fn normalize_attribute(
    population: &[&AugmentStat],
    attribute: Attribute,
    strategy: NormalizeStrategy,
) -> Result<Vec<f64>, AdvisorError> {
    let values = attribute_values(population, attribute)?;
    let normalization = Normalization::fit(&values, strategy)?;
    tracing::debug!(%attribute, %strategy, ?normalization, "fitted normalization");
    Ok(values
        .iter()
        .map(|&v| round_to(normalization.apply(v), NORMALIZED_DECIMALS))
        .collect())
}
