//! Robust location and scale: median and median absolute deviation.
//!
//! Both functions sort a copy, so callers' slices are never reordered.

/// Median of `values`.
///
/// Returns 0.0 for an empty slice. Even-length input averages the two
/// central elements.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let half = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[half]
    } else {
        (sorted[half - 1] + sorted[half]) / 2.0
    }
}

/// Median absolute deviation from the median.
///
/// Unscaled: no 1.4826 normal-consistency factor is applied. The 3x band in
/// [`outlier_bounds`](crate::outlier::outlier_bounds) is calibrated against
/// this raw value.
pub fn median_absolute_deviation(values: &[f64]) -> f64 {
    let med = median(values);
    let deviations: Vec<f64> = values.iter().map(|v| (v - med).abs()).collect();
    median(&deviations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_of_empty_is_zero() {
        assert_eq!(median(&[]), 0.0);
    }

    #[test]
    fn median_single() {
        assert_eq!(median(&[7.5]), 7.5);
    }

    #[test]
    fn median_odd_unsorted() {
        assert_eq!(median(&[1.0, 3.0, 2.0]), 2.0);
    }

    #[test]
    fn median_even_averages_center() {
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
    }

    #[test]
    fn median_does_not_reorder_input() {
        let values = vec![3.0, 1.0, 2.0];
        let _ = median(&values);
        assert_eq!(values, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn mad_basic() {
        // median = 3, deviations = [2,1,0,1,2] → median 1
        assert_eq!(median_absolute_deviation(&[1.0, 2.0, 3.0, 4.0, 5.0]), 1.0);
    }

    #[test]
    fn mad_ignores_single_extreme() {
        // median = 101, deviations = [1, 1, 0, 49, 2] → 1
        let mad = median_absolute_deviation(&[100.0, 102.0, 101.0, 150.0, 99.0]);
        assert_eq!(mad, 1.0);
    }

    #[test]
    fn mad_of_constant_is_zero() {
        assert_eq!(median_absolute_deviation(&[4.2; 6]), 0.0);
    }

    #[test]
    fn mad_of_empty_is_zero() {
        assert_eq!(median_absolute_deviation(&[]), 0.0);
    }
}
