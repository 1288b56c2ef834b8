//! Serializable tracker configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use quantrack_core::{AdaptiveQuantileController, ControllerParams, StatsError};

/// Errors from loading or validating a [`TrackerConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse tracker config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid tracker config: {0}")]
    Invalid(#[from] StatsError),
}

/// Every parameter the tracking pipeline needs for one run.
///
/// The numeric parameters have no defaults; a TOML document missing any of
/// them is rejected.
///
/// ```toml
/// lookback = 50
/// backtest = 100
/// speed = 0.05
/// q_target = 0.1
/// pct_target_min = 0.01
/// pct_target_max = 0.5
/// reject_outliers = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackerConfig {
    /// Number of prior log-prices in each row's lookback window.
    pub lookback: usize,

    /// Number of prior indicators averaged into the exceedance rate.
    pub backtest: usize,

    /// Controller loop gain.
    pub speed: f64,

    /// Target fraction of observations below the tracked quantile.
    pub q_target: f64,

    /// Lower rail for the tracked quantile level.
    pub pct_target_min: f64,

    /// Upper rail for the tracked quantile level.
    pub pct_target_max: f64,

    /// Starting quantile level. `None` starts at `q_target`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_quantile: Option<f64>,

    /// Drop MAD-band price outliers before enrichment.
    #[serde(default)]
    pub reject_outliers: bool,
}

impl TrackerConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn controller_params(&self) -> ControllerParams {
        ControllerParams {
            q_target: self.q_target,
            speed: self.speed,
            pct_target_min: self.pct_target_min,
            pct_target_max: self.pct_target_max,
        }
    }

    /// Check every parameter against the core's preconditions.
    pub fn validate(&self) -> Result<(), StatsError> {
        if self.lookback == 0 {
            return Err(StatsError::InvalidWindow {
                name: "lookback",
                value: self.lookback,
            });
        }
        if self.backtest == 0 {
            return Err(StatsError::InvalidWindow {
                name: "backtest",
                value: self.backtest,
            });
        }
        self.controller_params().validate()?;
        if let Some(q) = self.initial_quantile {
            if !(0.0..=1.0).contains(&q) {
                return Err(StatsError::InvalidQuantile(q));
            }
        }
        Ok(())
    }

    /// Validated controller for this configuration.
    pub fn controller(&self) -> Result<AdaptiveQuantileController, StatsError> {
        AdaptiveQuantileController::new(self.controller_params())
    }

    /// Starting level before any rail clamping.
    pub fn initial_level(&self) -> f64 {
        self.initial_quantile.unwrap_or(self.q_target)
    }

    /// Deterministic content hash of this configuration.
    ///
    /// Two runs with identical settings share a fingerprint.
    pub fn fingerprint(&self) -> String {
        let json = serde_json::to_string(self).expect("TrackerConfig serialization failed");
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }
}
