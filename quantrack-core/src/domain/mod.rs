//! Domain types for the quantile tracker.

pub mod enriched;
pub mod observation;
pub mod state;

pub use enriched::EnrichedObservation;
pub use observation::{log_transform, LogObservation, Observation};
pub use state::QuantileState;
