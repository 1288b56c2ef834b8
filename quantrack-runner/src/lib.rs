//! Quantrack Runner — orchestration around `quantrack-core`.
//!
//! This crate provides:
//! - TOML tracker configuration with validation and fingerprinting
//! - The end-to-end tracking pipeline (outliers, lookback, online controller,
//!   exceedance rates)
//! - Parallel runs over independent series
//! - Logging initialisation

pub mod collections;
pub mod config;
pub mod logging;
pub mod tracker;

pub use collections::{run_collections, CollectionResult, SeriesInput};
pub use config::{ConfigError, TrackerConfig};
pub use tracker::{
    run_tracker, run_tracker_with_state, ControlStep, RunError, TrackerRun, TrackerSummary,
};
