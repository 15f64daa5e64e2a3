//! Input Validation
//!
//! All validation errors surface before any resampling begins; no partial
//! output is ever produced on invalid input.

use thiserror::Error;

/// Errors from the resampling drivers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// Fewer than two sample groups were supplied.
    #[error("need at least 2 sample groups, got {got}")]
    TooFewGroups {
        /// Number of groups supplied.
        got: usize,
    },

    /// A sample group contained no observations.
    #[error("sample group {index} is empty")]
    EmptyGroup {
        /// Zero-based group index.
        index: usize,
    },

    /// A sample group contained a NaN or infinite observation.
    #[error("sample group {group} contains a non-finite value: {value}")]
    NonFiniteValue {
        /// Zero-based group index.
        group: usize,
        /// The offending value.
        value: f64,
    },

    /// Confidence level outside the open interval (0, 1).
    #[error("invalid confidence level: {0} (must be between 0 and 1)")]
    InvalidConfidenceLevel(f64),

    /// The resample count was zero.
    #[error("number of resamples must be at least 1")]
    ZeroResamples,
}

/// Check that at least two groups are present, every group is non-empty,
/// and every observation is finite.
pub fn validate_groups(groups: &[&[f64]]) -> Result<(), StatsError> {
    if groups.len() < 2 {
        return Err(StatsError::TooFewGroups { got: groups.len() });
    }
    for (index, group) in groups.iter().enumerate() {
        if group.is_empty() {
            return Err(StatsError::EmptyGroup { index });
        }
        if let Some(&value) = group.iter().find(|v| !v.is_finite()) {
            return Err(StatsError::NonFiniteValue {
                group: index,
                value,
            });
        }
    }
    Ok(())
}
