//! Statistic of Interest
//!
//! The scalar statistic the resampling drivers estimate: the difference
//! between two group means. Emptiness and finiteness are enforced at the
//! driver/loader boundary, not here.

/// Arithmetic mean, summed left to right.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Difference of group means: `mean(b) - mean(a)`. Note the direction.
pub fn meandiff(a: &[f64], b: &[f64]) -> f64 {
    mean(b) - mean(a)
}
