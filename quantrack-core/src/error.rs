//! Precondition violations raised by the core functions.

use thiserror::Error;

/// Errors from the statistics and tracking functions.
///
/// All of these signal caller misuse. None are transient, so nothing in the
/// crate retries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    #[error("{name} window must be >= 1, got {value}")]
    InvalidWindow { name: &'static str, value: usize },
    #[error("no non-NaN values to take a quantile of")]
    EmptySample,
    #[error("quantile must lie in [0, 1], got {0}")]
    InvalidQuantile(f64),
    #[error("controller speed must be finite and > 0, got {0}")]
    InvalidSpeed(f64),
    #[error("invalid quantile rails: min={min}, max={max}")]
    InvalidBounds { min: f64, max: f64 },
    #[error("price at index {index} must be finite and > 0, got {price}")]
    NonPositivePrice { index: usize, price: f64 },
}

/// Reject a zero-sized window.
pub(crate) fn check_window(name: &'static str, value: usize) -> Result<(), StatsError> {
    if value == 0 {
        return Err(StatsError::InvalidWindow { name, value });
    }
    Ok(())
}

/// Reject a probability outside `[0, 1]` (NaN included).
pub(crate) fn check_probability(q: f64) -> Result<(), StatsError> {
    if !(0.0..=1.0).contains(&q) {
        return Err(StatsError::InvalidQuantile(q));
    }
    Ok(())
}
