//! Adaptive quantile controller.
//!
//! A proportional feedback step that moves the tracked quantile level toward
//! the target exceedance rate:
//!
//! ```text
//! q_next = clamp(q_curr + speed * (q_target - q_obs), pct_target_min, pct_target_max)
//! ```
//!
//! With `speed > 0`, too many observations below the tracked level
//! (`q_obs > q_target`) lowers the level, and too few raises it. The rails are
//! hard limits against runaway drift.

use serde::{Deserialize, Serialize};

use crate::domain::QuantileState;
use crate::error::{check_probability, StatsError};
use crate::exceedance::is_empty_window;

/// One proportional control step, clamped to `[pct_target_min, pct_target_max]`.
///
/// Stateless. Callers must not pass the empty-window sentinel as `q_obs`; use
/// [`AdaptiveQuantileController::apply`] for the skip-on-sentinel policy.
pub fn compute_new_quantile(
    q_curr: f64,
    q_target: f64,
    q_obs: f64,
    speed: f64,
    pct_target_min: f64,
    pct_target_max: f64,
) -> f64 {
    let proposed = q_curr + speed * (q_target - q_obs);
    proposed.max(pct_target_min).min(pct_target_max)
}

/// Validated controller parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControllerParams {
    pub q_target: f64,
    pub speed: f64,
    pub pct_target_min: f64,
    pub pct_target_max: f64,
}

impl ControllerParams {
    pub fn validate(&self) -> Result<(), StatsError> {
        check_probability(self.q_target)?;
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(StatsError::InvalidSpeed(self.speed));
        }
        let rails_ok = (0.0..=1.0).contains(&self.pct_target_min)
            && (0.0..=1.0).contains(&self.pct_target_max)
            && self.pct_target_min <= self.pct_target_max;
        if !rails_ok {
            return Err(StatsError::InvalidBounds {
                min: self.pct_target_min,
                max: self.pct_target_max,
            });
        }
        Ok(())
    }
}

/// Controller that threads a [`QuantileState`] through successive steps.
///
/// Holds only parameters. Steps must be applied strictly in arrival order, one
/// per observation, since each output is the next input.
#[derive(Debug, Clone)]
pub struct AdaptiveQuantileController {
    params: ControllerParams,
}

impl AdaptiveQuantileController {
    pub fn new(params: ControllerParams) -> Result<Self, StatsError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Starting state at `initial`, pulled inside the rails.
    pub fn initial_state(&self, initial: f64) -> Result<QuantileState, StatsError> {
        check_probability(initial)?;
        Ok(QuantileState::new(self.clamp(initial)))
    }

    /// Advance `state` by one observed exceedance rate.
    ///
    /// An empty-window `q_obs` carries the level forward, pulled inside the
    /// rails.
    pub fn apply(&self, state: QuantileState, q_obs: f64) -> QuantileState {
        if is_empty_window(q_obs) {
            return QuantileState::new(self.clamp(state.current));
        }
        let p = &self.params;
        QuantileState::new(compute_new_quantile(
            state.current,
            p.q_target,
            q_obs,
            p.speed,
            p.pct_target_min,
            p.pct_target_max,
        ))
    }

    fn clamp(&self, q: f64) -> f64 {
        q.max(self.params.pct_target_min).min(self.params.pct_target_max)
    }
}
