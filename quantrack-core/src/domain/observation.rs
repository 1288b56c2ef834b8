//! Observation — one raw price point in a series.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::StatsError;

/// A single trade observation as delivered by the ingestion side.
///
/// Immutable once ingested. `block_number` is the ordering key; the optional
/// timestamp is carried through for reporting only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub block_number: u64,
    pub price: f64,
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
}

impl Observation {
    pub fn new(block_number: u64, price: f64) -> Self {
        Self {
            block_number,
            price,
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Finite and strictly positive, i.e. has a defined natural log.
    pub fn has_valid_price(&self) -> bool {
        self.price.is_finite() && self.price > 0.0
    }
}

/// An observation paired with the natural log of its price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogObservation {
    pub observation: Observation,
    pub log_price: f64,
}

/// Attach `ln(price)` to every observation, preserving order.
///
/// Fails on the first price that has no real logarithm.
pub fn log_transform(observations: &[Observation]) -> Result<Vec<LogObservation>, StatsError> {
    observations
        .iter()
        .enumerate()
        .map(|(index, obs)| {
            if !obs.has_valid_price() {
                return Err(StatsError::NonPositivePrice {
                    index,
                    price: obs.price,
                });
            }
            Ok(LogObservation {
                observation: obs.clone(),
                log_price: obs.price.ln(),
            })
        })
        .collect()
}
