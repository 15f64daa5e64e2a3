//! Normal-Distribution Conversions
//!
//! Converts between a standard-deviation offset and the area under the
//! standard normal curve, in both directions, via table lookup with
//! half-step interpolation. The interpolation is deliberately coarse
//! (midpoint of the two neighboring entries, not true fractional
//! interpolation): the bootstrap bound arithmetic downstream is calibrated
//! to exactly this approximation, so do not replace it with a more
//! accurate method.

use crate::table::STANDARD_NORMAL_AREAS;

/// Stateless conversion component over a fixed area table.
///
/// The table maps index `i` to the area between the mean and `i/100`
/// standard deviations and must be non-decreasing. Use [`STANDARD_NORMAL`]
/// unless a test needs a custom table.
#[derive(Debug, Clone, Copy)]
pub struct NormalTable {
    areas: &'static [f64],
}

/// The standard normal table at 0.01-standard-deviation resolution.
pub const STANDARD_NORMAL: NormalTable = NormalTable {
    areas: &STANDARD_NORMAL_AREAS,
};

impl NormalTable {
    /// Create a conversion component over a custom area table.
    ///
    /// The table must be non-empty and non-decreasing.
    pub fn new(areas: &'static [f64]) -> Self {
        debug_assert!(!areas.is_empty());
        debug_assert!(areas.windows(2).all(|w| w[0] <= w[1]));
        Self { areas }
    }

    /// Area between the mean and `sd` standard deviations.
    ///
    /// Sign is handled separately from magnitude, so the function is odd.
    /// Magnitudes beyond the table's range saturate to the last entry.
    /// Total over all finite inputs; output is in roughly (-0.5, 0.5).
    pub fn sd_to_area(&self, sd: f64) -> f64 {
        let sign = if sd < 0.0 { -1.0 } else { 1.0 };
        let scaled = sd.abs() * 100.0;
        let index = scaled as usize;
        let last = self.areas.len() - 1;
        if index >= last {
            return sign * self.areas[last];
        }
        if index as f64 == scaled {
            return sign * self.areas[index];
        }
        sign * (self.areas[index] + self.areas[index + 1]) / 2.0
    }

    /// Standard-deviation offset whose area under the curve is `area`.
    ///
    /// Inverse of [`sd_to_area`](Self::sd_to_area) under the same coarse
    /// policy: an exact table hit returns `index/100`, a magnitude strictly
    /// between two entries returns the half-step midpoint, and anything
    /// past the table's last entry saturates to the largest tabulated
    /// offset. Odd and total over all finite inputs.
    pub fn area_to_sd(&self, area: f64) -> f64 {
        let sign = if area < 0.0 { -1.0 } else { 1.0 };
        let area = area.abs();
        for (i, &entry) in self.areas.iter().enumerate() {
            if area == entry {
                return sign * i as f64 / 100.0;
            }
            if i > 0 && self.areas[i - 1] < area && area < entry {
                return sign * (i as f64 - 0.5) / 100.0;
            }
        }
        sign * (self.areas.len() as f64 - 1.0) / 100.0
    }
}
