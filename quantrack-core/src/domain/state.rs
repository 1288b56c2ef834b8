//! QuantileState — the controller's carried process state.

use serde::{Deserialize, Serialize};

/// Current tracked quantile level.
///
/// Owned by a single consumer loop and threaded by value through
/// [`AdaptiveQuantileController::apply`](crate::controller::AdaptiveQuantileController::apply).
/// Serializable so a loop can be checkpointed and resumed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantileState {
    pub current: f64,
}

impl QuantileState {
    pub fn new(current: f64) -> Self {
        Self { current }
    }
}
