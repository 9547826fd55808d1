//! Statistical utilities for the augment advisor.
//!
//! This crate provides the small set of population statistics the advisor
//! normalizes with:
//!
//! - **Descriptive statistics**: mean, median, population variance and standard deviation
//! - **Percentiles**: linearly interpolated percentile values
//! - **Outlier fences**: interquartile-range (Tukey) fences for robust bounds
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`percentiles`]: Percentile computation and storage
//! - [`fences`]: IQR-based outlier detection
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use mayhem_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! ```
//!
//! ## Excluding outliers
//!
//! ```
//! use mayhem_stats::fences::TukeyFences;
//!
//! let values = [48.0, 50.0, 51.0, 52.0, 49.5, 95.0];
//! let fences = TukeyFences::new(&values).unwrap();
//! let (inliers, outliers) = fences.partition(&values);
//! assert_eq!(outliers, vec![95.0]);
//! assert_eq!(inliers.len(), 5);
//! ```

pub mod descriptive;
pub mod fences;
pub mod percentiles;
