#![warn(missing_docs)]
//! Bootdiff Statistical Engine
//!
//! Resampling statistics for the difference between two sample means:
//! - Bias-corrected bootstrap confidence intervals (Efron's percentile
//!   method with a bias term derived from the bootstrap distribution)
//! - Shuffle-based permutation significance test
//! - Normal-table conversions between standard-deviation offsets and
//!   areas under the curve
//!
//! The random generator is always passed in explicitly, so every driver
//! is fully deterministic under a seeded `StdRng`.

mod error;
mod interval;
mod normal;
mod permutation;
mod resample;
mod statistic;
mod table;

pub use error::{StatsError, validate_groups};
pub use interval::{CiConfig, ConfidenceInterval, DiffCiResult, compute_diff_ci};
pub use normal::{NormalTable, STANDARD_NORMAL};
pub use permutation::{PermutationResult, compute_permutation};
pub use resample::{bootstrap, shuffle};
pub use statistic::{mean, meandiff};
pub use table::STANDARD_NORMAL_AREAS;

/// Default number of resampling iterations.
pub const DEFAULT_NUM_RESAMPLES: usize = 10_000;

/// Default confidence level (90%).
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.9;
