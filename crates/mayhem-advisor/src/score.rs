use std::collections::HashMap;

use crate::{
    AdvisorError,
    normalize::round_to,
    record::{Attribute, AugmentId, AugmentStat},
};

/// Decimal places kept on weighted sums.
pub const WEIGHTED_SUM_DECIMALS: i32 = 2;

/// Weights applied to the normalized attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub performance: f64,
    pub popularity: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            performance: 0.7,
            popularity: 0.3,
        }
    }
}

/// `a * weight_a + b * weight_b`, rounded to two decimals.
#[must_use]
pub fn weighted_sum(a: f64, b: f64, weight_a: f64, weight_b: f64) -> f64 {
    round_to(a * weight_a + b * weight_b, WEIGHTED_SUM_DECIMALS)
}

/// Normalized values of one attribute, keyed by augment.
pub type NormalizedColumn = HashMap<AugmentId, f64>;

/// Scores every member of `population` from its normalized columns.
///
/// Each member must have a finite value in both columns. The whole population
/// is validated before any score is computed; results are in input order.
pub fn score_population(
    population: &[&AugmentStat],
    performance_norm: &NormalizedColumn,
    popularity_norm: &NormalizedColumn,
    weights: Weights,
) -> Result<Vec<f64>, AdvisorError> {
    let checked = population
        .iter()
        .map(|stat| {
            let id = stat.id;
            Ok((
                checked_value(id, Attribute::PerformanceNorm, performance_norm.get(&id))?,
                checked_value(id, Attribute::PopularityNorm, popularity_norm.get(&id))?,
            ))
        })
        .collect::<Result<Vec<_>, AdvisorError>>()?;

    Ok(checked
        .into_iter()
        .map(|(perf, pop)| weighted_sum(perf, pop, weights.performance, weights.popularity))
        .collect())
}

fn checked_value(
    id: AugmentId,
    attribute: Attribute,
    value: Option<&f64>,
) -> Result<f64, AdvisorError> {
    let value = *value.ok_or(AdvisorError::MissingAttribute { id, attribute })?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AdvisorError::NonNumericAttribute {
            id,
            attribute,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_sum_rounds_to_two_places() {
        assert_eq!(weighted_sum(0.8123, 0.4567, 0.7, 0.3), 0.71);
        assert_eq!(weighted_sum(1.0, 1.0, 0.7, 0.3), 1.0);
        assert_eq!(weighted_sum(0.0, 0.0, 0.7, 0.3), 0.0);
    }

    #[test]
    fn test_weighted_sum_is_commutative_in_pairing() {
        let cases = [
            (0.8123, 0.4567, 0.7, 0.3),
            (0.1, 0.9, 0.25, 0.75),
            (1.2, -0.3, 0.5, 0.5),
        ];
        for (a, b, wa, wb) in cases {
            assert_eq!(weighted_sum(a, b, wa, wb), weighted_sum(b, a, wb, wa));
        }
    }

    fn column(values: &[(u32, f64)]) -> NormalizedColumn {
        values.iter().map(|&(id, v)| (AugmentId(id), v)).collect()
    }

    #[test]
    fn test_score_population() {
        let stats = [AugmentStat::new(1, 55.0, 10.0), AugmentStat::new(2, 52.0, 80.0)];
        let population = stats.iter().collect::<Vec<_>>();
        let scores = score_population(
            &population,
            &column(&[(1, 1.0), (2, 0.5)]),
            &column(&[(1, 0.0), (2, 1.0)]),
            Weights::default(),
        )
        .unwrap();
        assert_eq!(scores, vec![0.7, 0.65]);
    }

    #[test]
    fn test_score_population_rejects_missing_value() {
        let stats = [AugmentStat::new(1, 55.0, 10.0), AugmentStat::new(2, 52.0, 80.0)];
        let population = stats.iter().collect::<Vec<_>>();
        let err = score_population(
            &population,
            &column(&[(1, 1.0)]),
            &column(&[(1, 0.0), (2, 1.0)]),
            Weights::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AdvisorError::MissingAttribute {
                id: AugmentId(2),
                attribute: Attribute::PerformanceNorm
            }
        ));
    }

    #[test]
    fn test_score_population_rejects_non_finite_value() {
        let stats = [AugmentStat::new(5, 50.0, 10.0)];
        let population = stats.iter().collect::<Vec<_>>();
        let err = score_population(
            &population,
            &column(&[(5, 0.2)]),
            &column(&[(5, f64::INFINITY)]),
            Weights::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AdvisorError::NonNumericAttribute {
                id: AugmentId(5),
                attribute: Attribute::PopularityNorm,
                ..
            }
        ));
    }
}
