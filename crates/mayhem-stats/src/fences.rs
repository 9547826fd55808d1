use std::ops::RangeInclusive;

use crate::percentiles;

/// Conventional multiplier for Tukey's outlier fences.
pub const TUKEY_K: f64 = 1.5;

/// Interquartile-range outlier fences.
///
/// Values inside `[lower, upper]` are considered normal; anything outside is an outlier.
/// Quartiles are computed with linear interpolation (see
/// [`compute_percentile`](crate::percentiles::compute_percentile)).
///
/// # Examples
///
/// ```
/// use mayhem_stats::fences::TukeyFences;
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
/// let fences = TukeyFences::new(&values).unwrap();
///
/// assert!(fences.contains(5.0));
/// assert!(!fences.contains(100.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TukeyFences {
    /// First quartile (P25).
    pub q1: f64,
    /// Third quartile (P75).
    pub q3: f64,
    /// `q1 - k * iqr`
    pub lower: f64,
    /// `q3 + k * iqr`
    pub upper: f64,
}

impl TukeyFences {
    /// Computes fences with the conventional `k = 1.5` from unsorted values.
    ///
    /// Returns `None` if `values` is empty.
    #[must_use]
    pub fn new(values: &[f64]) -> Option<Self> {
        Self::with_k(values, TUKEY_K)
    }

    /// Computes fences with a custom multiplier from unsorted values.
    #[must_use]
    pub fn with_k(values: &[f64], k: f64) -> Option<Self> {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted, k)
    }

    /// Computes fences from values sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], k: f64) -> Option<Self> {
        if sorted_values.is_empty() {
            return None;
        }
        let q1 = percentiles::compute_percentile(sorted_values, 25.0);
        let q3 = percentiles::compute_percentile(sorted_values, 75.0);
        let iqr = q3 - q1;
        Some(Self {
            q1,
            q3,
            lower: q1 - k * iqr,
            upper: q3 + k * iqr,
        })
    }

    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.range().contains(&value)
    }

    #[must_use]
    pub fn range(&self) -> RangeInclusive<f64> {
        self.lower..=self.upper
    }

    /// Splits `values` into (inliers, outliers), preserving input order.
    #[must_use]
    pub fn partition(&self, values: &[f64]) -> (Vec<f64>, Vec<f64>) {
        values.iter().partition(|v| self.contains(**v))
    }
}
