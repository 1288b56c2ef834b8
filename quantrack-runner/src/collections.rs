//! Parallel tracking over independent series.
//!
//! Each series (one collection's trade history) owns its own controller state,
//! so series run concurrently with rayon while the steps inside a series stay
//! strictly sequential.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use quantrack_core::Observation;

use crate::config::TrackerConfig;
use crate::tracker::{run_tracker, RunError, TrackerRun};

/// One named, ingestion-ordered series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesInput {
    pub name: String,
    pub observations: Vec<Observation>,
}

impl SeriesInput {
    pub fn new(name: impl Into<String>, observations: Vec<Observation>) -> Self {
        Self {
            name: name.into(),
            observations,
        }
    }
}

/// Outcome for one series. A failing series does not abort the batch.
#[derive(Debug)]
pub struct CollectionResult {
    pub name: String,
    pub outcome: Result<TrackerRun, RunError>,
}

impl CollectionResult {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Track every series with the same configuration, in parallel.
///
/// Results come back in input order.
pub fn run_collections(series: &[SeriesInput], config: &TrackerConfig) -> Vec<CollectionResult> {
    debug!(series = series.len(), "starting collection batch");
    series
        .par_iter()
        .map(|s| CollectionResult {
            name: s.name.clone(),
            outcome: run_tracker(&s.observations, config),
        })
        .collect()
}
