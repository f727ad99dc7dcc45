//! Pairwise Pearson correlation over the numeric columns of a frame.

use crate::error::{EdaError, Result};
use crate::utils::{numeric_column_names, require_column};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Square matrix of pairwise Pearson correlations between numeric columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    /// Row-major values; `values[i][j]` is corr(columns[i], columns[j]).
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }
}

/// Compute the correlation matrix over all numeric columns.
///
/// Rows where either value of a pair is null are dropped for that pair
/// (pairwise-complete observations). A zero-variance column correlates
/// 0.0 with everything except itself.
pub fn correlation_matrix(df: &DataFrame) -> Result<CorrelationMatrix> {
    let columns = numeric_column_names(df);
    if columns.is_empty() {
        return Err(EdaError::NoNumericColumns);
    }

    // Materialize each column once as Option<f64> rows.
    let mut data: Vec<Vec<Option<f64>>> = Vec::with_capacity(columns.len());
    for name in &columns {
        let series = require_column(df, name)?;
        let float_series = series.cast(&DataType::Float64)?;
        data.push(float_series.f64()?.into_iter().collect());
    }

    let n = columns.len();
    let mut values = vec![vec![0.0; n]; n];
    for i in 0..n {
        values[i][i] = 1.0;
        for j in (i + 1)..n {
            let r = pearson(&data[i], &data[j]);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    Ok(CorrelationMatrix { columns, values })
}

/// Pearson correlation over pairwise-complete observations.
fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> f64 {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys.iter())
        .filter_map(|(x, y)| match (x, y) {
            (Some(x), Some(y)) => Some((*x, *y)),
            _ => None,
        })
        .collect();

    let n = pairs.len() as f64;
    if n < 2.0 {
        return 0.0;
    }

    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return 0.0;
    }

    cov / (var_x.sqrt() * var_y.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pearson_perfect_positive() {
        let xs: Vec<Option<f64>> = vec![Some(1.0), Some(2.0), Some(3.0)];
        let ys: Vec<Option<f64>> = vec![Some(2.0), Some(4.0), Some(6.0)];
        assert!((pearson(&xs, &ys) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_perfect_negative() {
        let xs: Vec<Option<f64>> = vec![Some(1.0), Some(2.0), Some(3.0)];
        let ys: Vec<Option<f64>> = vec![Some(3.0), Some(2.0), Some(1.0)];
        assert!((pearson(&xs, &ys) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_pairwise_deletion() {
        // The null row is excluded; the remaining points are perfectly correlated.
        let xs: Vec<Option<f64>> = vec![Some(1.0), None, Some(3.0), Some(4.0)];
        let ys: Vec<Option<f64>> = vec![Some(10.0), Some(99.0), Some(30.0), Some(40.0)];
        assert!((pearson(&xs, &ys) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_zero_variance() {
        let xs: Vec<Option<f64>> = vec![Some(5.0), Some(5.0), Some(5.0)];
        let ys: Vec<Option<f64>> = vec![Some(1.0), Some(2.0), Some(3.0)];
        assert_eq!(pearson(&xs, &ys), 0.0);
    }

    #[test]
    fn test_correlation_matrix_symmetric_unit_diagonal() {
        let df = df!(
            "Pclass" => &[1i64, 1, 2, 3, 3],
            "Fare" => &[71.28, 53.1, 13.0, 7.92, 7.25],
            "Survived" => &[1i64, 1, 0, 0, 1],
        )
        .unwrap();

        let matrix = correlation_matrix(&df).unwrap();
        assert_eq!(matrix.len(), 3);
        for i in 0..3 {
            assert_eq!(matrix.get(i, i), 1.0);
            for j in 0..3 {
                assert!((matrix.get(i, j) - matrix.get(j, i)).abs() < 1e-12);
                assert!(matrix.get(i, j).abs() <= 1.0 + 1e-12);
            }
        }

        // Higher class number means cheaper fare in this sample.
        let pclass_fare = matrix.get(0, 1);
        assert!(pclass_fare < 0.0);
    }

    #[test]
    fn test_correlation_matrix_skips_string_columns() {
        let df = df!(
            "Fare" => &[7.25, 8.05, 9.0],
            "Name" => &["a", "b", "c"],
        )
        .unwrap();

        let matrix = correlation_matrix(&df).unwrap();
        assert_eq!(matrix.columns, vec!["Fare"]);
    }

    #[test]
    fn test_correlation_matrix_no_numeric_columns() {
        let df = df!("Name" => &["a", "b"]).unwrap();
        let result = correlation_matrix(&df);
        assert!(matches!(result, Err(EdaError::NoNumericColumns)));
    }
}
