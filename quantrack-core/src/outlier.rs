//! MAD-band outlier rejection.

use serde::{Deserialize, Serialize};

use crate::robust::{median, median_absolute_deviation};

/// Half-width of the acceptance band, in (unscaled) MADs.
pub const OUTLIER_MAD_MULTIPLIER: f64 = 3.0;

/// Closed acceptance band `[median - 3·MAD, median + 3·MAD]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutlierBounds {
    pub median: f64,
    pub mad: f64,
    pub lower: f64,
    pub upper: f64,
}

impl OutlierBounds {
    /// True when `value` lies inside the closed band. NaN is never inside.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Compute the acceptance band for `values`.
pub fn outlier_bounds(values: &[f64]) -> OutlierBounds {
    let med = median(values);
    let mad = median_absolute_deviation(values);
    OutlierBounds {
        median: med,
        mad,
        lower: med - OUTLIER_MAD_MULTIPLIER * mad,
        upper: med + OUTLIER_MAD_MULTIPLIER * mad,
    }
}

/// Keep the values inside the MAD band, in their original order.
///
/// When MAD is zero the band collapses to the median and only exact matches
/// survive.
pub fn remove_outliers(values: &[f64]) -> Vec<f64> {
    let bounds = outlier_bounds(values);
    values
        .iter()
        .copied()
        .filter(|&v| bounds.contains(v))
        .collect()
}
