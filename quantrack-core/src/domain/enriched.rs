//! EnrichedObservation — an observation plus everything derived from it.

use serde::{Deserialize, Serialize};

use super::Observation;

/// Observation with log-price, rank, lookback window and exceedance fields.
///
/// `price_smaller` is supplied from outside the core (it depends on a
/// contemporaneous threshold). `quantile_obs` is filled in by
/// [`compute_quantile_obs`](crate::exceedance::compute_quantile_obs) and is the
/// [`EMPTY_WINDOW`](crate::exceedance::EMPTY_WINDOW) sentinel until then.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedObservation {
    pub observation: Observation,
    pub log_price: f64,
    /// Dense 0-based rank in ingestion order.
    pub trade_id: usize,
    /// Prior log-prices, oldest first. Never contains this row's own value.
    pub log_prices_lookback: Vec<f64>,
    pub price_smaller: bool,
    pub quantile_obs: f64,
}

impl EnrichedObservation {
    /// Set the externally derived below-threshold indicator.
    pub fn with_price_smaller(mut self, price_smaller: bool) -> Self {
        self.price_smaller = price_smaller;
        self
    }

    /// Indicator as the 0/1 value averaged by the exceedance tracker.
    pub fn indicator(&self) -> f64 {
        if self.price_smaller {
            1.0
        } else {
            0.0
        }
    }
}
