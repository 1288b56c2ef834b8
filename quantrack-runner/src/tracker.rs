//! Tracking pipeline — wires the core components into the online loop.
//!
//! For an ingestion-ordered series:
//! 1. optional MAD-band rejection of whole observations by price
//! 2. log transform and lookback windows
//! 3. per row, in order: read the exceedance rate of the prior rows, step the
//!    controller, take the tracked quantile of the row's lookback as its
//!    threshold, and flag whether the row's log-price falls below it
//! 4. batch exceedance rates over the annotated rows

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use quantrack_core::{
    compute_quantile, compute_quantile_obs, create_lookback, is_empty_window, log_transform,
    outlier_bounds, EnrichedObservation, ExceedanceWindow, Observation, QuantileState, StatsError,
};

use crate::config::{ConfigError, TrackerConfig};

/// Errors from a tracker run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("stats error: {0}")]
    Stats(#[from] StatsError),
    #[error("no observations left to track")]
    EmptySeries,
}

/// One controller step, recorded per row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlStep {
    pub trade_id: usize,
    /// Exceedance rate fed to the controller (NaN on the empty window).
    pub q_obs: f64,
    /// Level before the step.
    pub before: f64,
    /// Level after the step, used for this row's threshold.
    pub after: f64,
    /// Log-price threshold derived from the lookback window.
    pub threshold: f64,
    /// True when the step was skipped on an empty window.
    pub skipped: bool,
}

/// Aggregate view of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerSummary {
    /// Rows tracked after outlier rejection.
    pub observations: usize,
    pub outliers_removed: usize,
    pub skipped_updates: usize,
    /// Fraction of all tracked rows flagged below their threshold.
    pub realized_exceedance: f64,
    pub final_quantile: f64,
}

/// Complete result of a tracker run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerRun {
    pub rows: Vec<EnrichedObservation>,
    pub steps: Vec<ControlStep>,
    pub final_state: QuantileState,
    pub summary: TrackerSummary,
    pub config_fingerprint: String,
}

/// Run the tracker from the configured initial level.
pub fn run_tracker(
    observations: &[Observation],
    config: &TrackerConfig,
) -> Result<TrackerRun, RunError> {
    let state = config.controller()?.initial_state(config.initial_level())?;
    run_tracker_with_state(observations, config, state)
}

/// Run the tracker starting from a caller-supplied state.
///
/// Lets a caller resume from a checkpointed [`QuantileState`] or reset to a
/// chosen level. The state is clamped into the configured rails first.
pub fn run_tracker_with_state(
    observations: &[Observation],
    config: &TrackerConfig,
    state: QuantileState,
) -> Result<TrackerRun, RunError> {
    config.validate().map_err(ConfigError::Invalid)?;
    let controller = config.controller()?;
    let mut state = controller.initial_state(state.current)?;

    let (kept, outliers_removed) = if config.reject_outliers {
        reject_outliers(observations)
    } else {
        (observations.to_vec(), 0)
    };
    if kept.is_empty() {
        return Err(RunError::EmptySeries);
    }

    let logged = log_transform(&kept)?;
    let rows = create_lookback(&logged, config.lookback)?;
    debug!(
        rows = rows.len(),
        outliers_removed,
        lookback = config.lookback,
        "lookback windows built"
    );

    let mut window = ExceedanceWindow::new(config.backtest)?;
    let mut steps = Vec::with_capacity(rows.len());
    let mut annotated = Vec::with_capacity(rows.len());

    for row in rows {
        let q_obs = window.rate();
        let before = state.current;
        state = controller.apply(state, q_obs);

        let threshold = compute_quantile(&row.log_prices_lookback, state.current)?;
        let smaller = row.log_price < threshold;
        window.push(smaller);

        steps.push(ControlStep {
            trade_id: row.trade_id,
            q_obs,
            before,
            after: state.current,
            threshold,
            skipped: is_empty_window(q_obs),
        });
        annotated.push(row.with_price_smaller(smaller));
    }

    let rows = compute_quantile_obs(&annotated, config.backtest)?;

    let skipped_updates = steps.iter().filter(|s| s.skipped).count();
    let flagged = rows.iter().filter(|r| r.price_smaller).count();
    let summary = TrackerSummary {
        observations: rows.len(),
        outliers_removed,
        skipped_updates,
        realized_exceedance: flagged as f64 / rows.len() as f64,
        final_quantile: state.current,
    };

    if skipped_updates == steps.len() {
        warn!(
            rows = rows.len(),
            "every controller step skipped; quantile level never updated"
        );
    }
    info!(
        observations = summary.observations,
        outliers_removed = summary.outliers_removed,
        skipped_updates = summary.skipped_updates,
        realized_exceedance = %format!("{:.4}", summary.realized_exceedance),
        final_quantile = %format!("{:.4}", summary.final_quantile),
        "tracker run complete"
    );

    Ok(TrackerRun {
        rows,
        steps,
        final_state: state,
        summary,
        config_fingerprint: config.fingerprint(),
    })
}

/// Keep observations whose price lies inside the MAD band of all prices.
fn reject_outliers(observations: &[Observation]) -> (Vec<Observation>, usize) {
    let prices: Vec<f64> = observations.iter().map(|o| o.price).collect();
    let bounds = outlier_bounds(&prices);
    let kept: Vec<Observation> = observations
        .iter()
        .filter(|o| bounds.contains(o.price))
        .cloned()
        .collect();
    let removed = observations.len() - kept.len();
    debug!(
        median = bounds.median,
        mad = bounds.mad,
        removed,
        "outlier band applied"
    );
    (kept, removed)
}
