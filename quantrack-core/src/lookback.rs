//! Lookback windows of prior log-prices.

use crate::domain::{EnrichedObservation, LogObservation};
use crate::error::{check_window, StatsError};
use crate::exceedance::EMPTY_WINDOW;

/// Lookback assigned to the first row, which has no history.
///
/// Downstream quantile lookups expect a non-empty window, so the first row
/// gets this single placeholder instead of an empty list.
pub const NO_HISTORY_SENTINEL: f64 = -42.0;

/// Attach to each row the log-prices of up to `lookback` preceding rows.
///
/// Row `i > 0` gets positions `[max(0, i - lookback), i)` in original order;
/// row 0 gets `[NO_HISTORY_SENTINEL]`. `trade_id` is the row's position.
/// `price_smaller` starts false and `quantile_obs` starts at [`EMPTY_WINDOW`].
pub fn create_lookback(
    data: &[LogObservation],
    lookback: usize,
) -> Result<Vec<EnrichedObservation>, StatsError> {
    check_window("lookback", lookback)?;

    let enriched = data
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let log_prices_lookback = if i == 0 {
                vec![NO_HISTORY_SENTINEL]
            } else {
                let start = i.saturating_sub(lookback);
                data[start..i].iter().map(|r| r.log_price).collect()
            };
            EnrichedObservation {
                observation: row.observation.clone(),
                log_price: row.log_price,
                trade_id: i,
                log_prices_lookback,
                price_smaller: false,
                quantile_obs: EMPTY_WINDOW,
            }
        })
        .collect();

    Ok(enriched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{log_transform, Observation};

    fn logged(prices: &[f64]) -> Vec<LogObservation> {
        let obs: Vec<Observation> = prices
            .iter()
            .enumerate()
            .map(|(i, &p)| Observation::new(100 + i as u64, p))
            .collect();
        log_transform(&obs).unwrap()
    }

    #[test]
    fn first_row_gets_sentinel() {
        let rows = create_lookback(&logged(&[1.0, 2.0]), 3).unwrap();
        assert_eq!(rows[0].log_prices_lookback, vec![NO_HISTORY_SENTINEL]);
        assert_eq!(rows[0].log_prices_lookback, vec![-42.0]);
    }

    #[test]
    fn window_grows_then_slides() {
        let data = logged(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let rows = create_lookback(&data, 2).unwrap();

        assert_eq!(rows[1].log_prices_lookback, vec![data[0].log_price]);
        assert_eq!(
            rows[2].log_prices_lookback,
            vec![data[0].log_price, data[1].log_price]
        );
        assert_eq!(
            rows[4].log_prices_lookback,
            vec![data[2].log_price, data[3].log_price]
        );
    }

    #[test]
    fn trade_ids_are_dense_positions() {
        let rows = create_lookback(&logged(&[5.0, 4.0, 3.0, 2.0]), 10).unwrap();
        let ids: Vec<usize> = rows.iter().map(|r| r.trade_id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn own_value_is_never_included() {
        let rows = create_lookback(&logged(&[1.0, 1.0, 2.0]), 5).unwrap();
        assert!(!rows[2].log_prices_lookback.contains(&rows[2].log_price));
    }

    #[test]
    fn fresh_rows_have_empty_window_marker() {
        let rows = create_lookback(&logged(&[1.0, 2.0]), 1).unwrap();
        assert!(rows.iter().all(|r| r.quantile_obs.is_nan()));
        assert!(rows.iter().all(|r| !r.price_smaller));
    }

    #[test]
    fn zero_lookback_rejected() {
        assert_eq!(
            create_lookback(&logged(&[1.0]), 0).unwrap_err(),
            StatsError::InvalidWindow { name: "lookback", value: 0 }
        );
    }

    #[test]
    fn empty_input() {
        assert!(create_lookback(&[], 4).unwrap().is_empty());
    }
}
