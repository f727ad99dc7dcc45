//! Statistical functions for column summaries.

use crate::error::{EdaError, Result};
use crate::types::ColumnSummary;
use crate::utils::numeric_values;
use polars::prelude::*;

/// Calculate sample standard deviation (n-1 denominator).
pub(crate) fn calculate_std(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    if n <= 1.0 {
        return 0.0;
    }

    let mean = values.iter().sum::<f64>() / n;
    let variance: f64 = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt()
}

/// Calculate skewness.
pub(crate) fn calculate_skewness(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    if n == 0.0 {
        return 0.0;
    }

    let mean = values.iter().sum::<f64>() / n;
    let std = calculate_std(values);
    if std == 0.0 {
        return 0.0;
    }

    values.iter().map(|v| ((v - mean) / std).powi(3)).sum::<f64>() / n
}

/// Quantile of sorted values with linear interpolation between ranks.
pub(crate) fn quantile_of_sorted(sorted: &[f64], q: f64) -> f64 {
    debug_assert!((0.0..=1.0).contains(&q));
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let rank = q * (n - 1) as f64;
            let lo = rank.floor() as usize;
            let hi = rank.ceil() as usize;
            let frac = rank - lo as f64;
            sorted[lo] + (sorted[hi] - sorted[lo]) * frac
        }
    }
}

/// Detect whether more than 5% of values fall outside the 1.5*IQR fences.
pub(crate) fn detect_outliers(sorted: &[f64]) -> bool {
    let n = sorted.len();
    if n < 4 {
        return false;
    }

    let q1 = quantile_of_sorted(sorted, 0.25);
    let q3 = quantile_of_sorted(sorted, 0.75);
    let iqr = q3 - q1;

    let lower_bound = q1 - 1.5 * iqr;
    let upper_bound = q3 + 1.5 * iqr;

    let outlier_count = sorted
        .iter()
        .filter(|v| **v < lower_bound || **v > upper_bound)
        .count();

    outlier_count > n / 20
}

/// Summarize one numeric series: count, mean, std, five-number summary,
/// skewness and an IQR outlier flag.
pub(crate) fn summarize_series(series: &Series) -> Result<ColumnSummary> {
    let mut values = numeric_values(series)?;
    if values.is_empty() {
        return Err(EdaError::NoValidValues(series.name().to_string()));
    }
    values.sort_by(|a, b| a.total_cmp(b));

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;

    Ok(ColumnSummary {
        name: series.name().to_string(),
        count,
        mean,
        std: calculate_std(&values),
        min: values[0],
        q1: quantile_of_sorted(&values, 0.25),
        median: quantile_of_sorted(&values, 0.5),
        q3: quantile_of_sorted(&values, 0.75),
        max: values[count - 1],
        skewness: calculate_skewness(&values),
        has_outliers: detect_outliers(&values),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== calculate_std tests ====================

    #[test]
    fn test_calculate_std_basic() {
        // Values: 1..5, mean 3, variance 10/4 = 2.5, std ~ 1.58
        let std = calculate_std(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!((std - 2.5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_calculate_std_single_value() {
        assert_eq!(calculate_std(&[5.0]), 0.0);
    }

    #[test]
    fn test_calculate_std_identical_values() {
        assert_eq!(calculate_std(&[5.0, 5.0, 5.0, 5.0]), 0.0);
    }

    // ==================== calculate_skewness tests ====================

    #[test]
    fn test_calculate_skewness_symmetric() {
        let skew = calculate_skewness(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!(skew.abs() < 0.1);
    }

    #[test]
    fn test_calculate_skewness_positive() {
        let skew = calculate_skewness(&[1.0, 1.0, 1.0, 1.0, 10.0]);
        assert!(skew > 0.0);
    }

    #[test]
    fn test_calculate_skewness_zero_std() {
        assert_eq!(calculate_skewness(&[5.0, 5.0, 5.0]), 0.0);
    }

    // ==================== quantile tests ====================

    #[test]
    fn test_quantile_median_odd() {
        assert_eq!(quantile_of_sorted(&[1.0, 2.0, 3.0, 4.0, 5.0], 0.5), 3.0);
    }

    #[test]
    fn test_quantile_median_even_interpolates() {
        assert_eq!(quantile_of_sorted(&[1.0, 2.0, 3.0, 4.0], 0.5), 2.5);
    }

    #[test]
    fn test_quantile_extremes() {
        let data = [1.0, 2.0, 3.0];
        assert_eq!(quantile_of_sorted(&data, 0.0), 1.0);
        assert_eq!(quantile_of_sorted(&data, 1.0), 3.0);
    }

    #[test]
    fn test_quantile_single_value() {
        assert_eq!(quantile_of_sorted(&[42.0], 0.25), 42.0);
    }

    // ==================== detect_outliers tests ====================

    #[test]
    fn test_detect_outliers_with_outlier() {
        let mut data: Vec<f64> = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
        data.sort_by(|a, b| a.total_cmp(b));
        assert!(detect_outliers(&data));
    }

    #[test]
    fn test_detect_outliers_no_outlier() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        assert!(!detect_outliers(&data));
    }

    #[test]
    fn test_detect_outliers_small_sample() {
        assert!(!detect_outliers(&[1.0, 2.0, 100.0]));
    }

    // ==================== summarize_series tests ====================

    #[test]
    fn test_summarize_series_fare_example() {
        let series = Series::new("Fare".into(), &[7.25f64, 71.28, 7.92, 53.1, 8.05]);
        let summary = summarize_series(&series).unwrap();

        let expected_mean = (7.25 + 71.28 + 7.92 + 53.1 + 8.05) / 5.0;
        assert_eq!(summary.count, 5);
        assert!((summary.mean - expected_mean).abs() < 1e-12);
        assert_eq!(summary.min, 7.25);
        assert_eq!(summary.max, 71.28);
        assert_eq!(summary.median, 8.05);
    }

    #[test]
    fn test_summarize_series_ignores_nulls() {
        let series = Series::new("Age".into(), &[Some(20.0f64), None, Some(40.0)]);
        let summary = summarize_series(&series).unwrap();
        assert_eq!(summary.count, 2);
        assert_eq!(summary.mean, 30.0);
    }

    #[test]
    fn test_summarize_series_all_null_is_error() {
        let series = Series::new("Age".into(), &[None::<f64>, None]);
        let result = summarize_series(&series);
        assert!(matches!(result, Err(EdaError::NoValidValues(_))));
    }
}
