//! Rolling exceedance rate over a backtest window.
//!
//! The rate for row `i` is the mean of `price_smaller` over rows
//! `[max(0, i - backtest), i)`: strictly prior rows only. Row 0 has an empty
//! window and gets the [`EMPTY_WINDOW`] sentinel; the controller skips its
//! update on that value.

use std::collections::VecDeque;

use crate::domain::EnrichedObservation;
use crate::error::{check_window, StatsError};

/// Mean of an empty window. Test with [`is_empty_window`], never with `==`.
pub const EMPTY_WINDOW: f64 = f64::NAN;

/// True when `rate` is the empty-window sentinel.
#[inline]
pub fn is_empty_window(rate: f64) -> bool {
    rate.is_nan()
}

/// Sort rows by `trade_id` and fill in `quantile_obs`.
///
/// Returns a new vector in ascending `trade_id` order; the sort is stable, so
/// rows sharing an id keep their submission order.
pub fn compute_quantile_obs(
    data: &[EnrichedObservation],
    backtest: usize,
) -> Result<Vec<EnrichedObservation>, StatsError> {
    check_window("backtest", backtest)?;

    let mut rows = data.to_vec();
    rows.sort_by_key(|r| r.trade_id);

    // prefix[i] = number of indicators set in rows[..i]
    let mut prefix = Vec::with_capacity(rows.len() + 1);
    prefix.push(0.0);
    for row in &rows {
        let last = prefix[prefix.len() - 1];
        prefix.push(last + row.indicator());
    }

    for (i, row) in rows.iter_mut().enumerate() {
        let start = i.saturating_sub(backtest);
        let len = i - start;
        row.quantile_obs = if len == 0 {
            EMPTY_WINDOW
        } else {
            (prefix[i] - prefix[start]) / len as f64
        };
    }

    Ok(rows)
}

/// Streaming form of [`compute_quantile_obs`] for the online loop.
///
/// Call [`rate`](Self::rate) before [`push`](Self::push)ing the current row's
/// indicator to get that row's `quantile_obs`.
#[derive(Debug, Clone)]
pub struct ExceedanceWindow {
    backtest: usize,
    window: VecDeque<bool>,
    hits: usize,
}

impl ExceedanceWindow {
    pub fn new(backtest: usize) -> Result<Self, StatsError> {
        check_window("backtest", backtest)?;
        Ok(Self {
            backtest,
            window: VecDeque::with_capacity(backtest),
            hits: 0,
        })
    }

    /// Mean of the indicators currently held, or [`EMPTY_WINDOW`].
    pub fn rate(&self) -> f64 {
        if self.window.is_empty() {
            return EMPTY_WINDOW;
        }
        self.hits as f64 / self.window.len() as f64
    }

    pub fn push(&mut self, price_smaller: bool) {
        if self.window.len() == self.backtest {
            if let Some(true) = self.window.pop_front() {
                self.hits -= 1;
            }
        }
        self.window.push_back(price_smaller);
        if price_smaller {
            self.hits += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }
}
