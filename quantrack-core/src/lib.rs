//! Quantrack Core — robust statistics and adaptive quantile tracking.
//!
//! This crate contains the algorithmic heart of the tracker:
//! - Domain types (observations, enriched rows, controller state)
//! - Median and median absolute deviation
//! - MAD-band outlier rejection
//! - Lookback windows of prior log-prices
//! - Empirical quantiles
//! - Rolling exceedance rates over a backtest window
//! - The proportional quantile controller
//!
//! Every batch function is pure and works on a copy of its input. The
//! controller is the only stateful piece, and its state is threaded explicitly.

pub mod controller;
pub mod domain;
pub mod error;
pub mod exceedance;
pub mod lookback;
pub mod outlier;
pub mod quantile;
pub mod robust;

pub use controller::{compute_new_quantile, AdaptiveQuantileController, ControllerParams};
pub use domain::{log_transform, EnrichedObservation, LogObservation, Observation, QuantileState};
pub use error::StatsError;
pub use exceedance::{compute_quantile_obs, is_empty_window, ExceedanceWindow, EMPTY_WINDOW};
pub use lookback::{create_lookback, NO_HISTORY_SENTINEL};
pub use outlier::{outlier_bounds, remove_outliers, OutlierBounds, OUTLIER_MAD_MULTIPLIER};
pub use quantile::compute_quantile;
pub use robust::{median, median_absolute_deviation};
