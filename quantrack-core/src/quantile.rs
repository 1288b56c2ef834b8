//! Empirical quantile of a sample.

use crate::error::{check_probability, StatsError};

/// Element at rank `floor(quantile * n)` of the NaN-filtered, ascending sample.
///
/// The rank is clamped to `n - 1`, so `quantile = 1.0` returns the maximum
/// instead of reading past the end. `quantile = 0.0` returns the minimum.
///
/// # Errors
/// - [`StatsError::InvalidQuantile`] when `quantile` is outside `[0, 1]`.
/// - [`StatsError::EmptySample`] when no non-NaN values remain.
pub fn compute_quantile(values: &[f64], quantile: f64) -> Result<f64, StatsError> {
    check_probability(quantile)?;

    let mut clean: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if clean.is_empty() {
        return Err(StatsError::EmptySample);
    }
    clean.sort_by(|a, b| a.total_cmp(b));

    let rank = (quantile * clean.len() as f64).floor() as usize;
    let idx = rank.min(clean.len() - 1);
    Ok(clean[idx])
}
