//! Dataset profiling: schema information and per-column summary statistics.

mod correlation;
mod statistics;

pub use correlation::{CorrelationMatrix, correlation_matrix};
pub(crate) use statistics::quantile_of_sorted;

use crate::error::Result;
use crate::types::{ColumnSummary, DatasetSummary, SchemaColumn};
use crate::utils::{is_numeric_dtype, require_column};
use polars::prelude::*;
use rand::prelude::*;

/// Profiler for the loaded dataset.
pub struct DataProfiler;

impl DataProfiler {
    /// Summarize the dataset: schema for every column, descriptive
    /// statistics for every numeric column.
    pub fn summarize(df: &DataFrame) -> Result<DatasetSummary> {
        let mut schema = Vec::new();
        let mut numeric = Vec::new();

        for col_name in df.get_column_names() {
            let series = require_column(df, col_name.as_str())?;
            schema.push(Self::profile_schema(df, series)?);
            if is_numeric_dtype(series.dtype()) && series.len() > series.null_count() {
                numeric.push(Self::summarize_numeric(series)?);
            }
        }

        Ok(DatasetSummary {
            shape: (df.height(), df.width()),
            schema,
            numeric,
        })
    }

    fn profile_schema(df: &DataFrame, series: &Series) -> Result<SchemaColumn> {
        let null_count = series.null_count();
        let non_null_count = series.len() - null_count;
        let null_percentage = if df.height() > 0 {
            (null_count as f64 / df.height() as f64) * 100.0
        } else {
            0.0
        };
        let unique_count = series.n_unique()?;

        // Fixed seed so repeated runs show the same sample values.
        let mut sample_values = Vec::new();
        let non_null_series = series.drop_nulls();
        if !non_null_series.is_empty() {
            let sample_size = std::cmp::min(5, non_null_series.len());
            let mut rng = StdRng::seed_from_u64(42);
            let indices: Vec<usize> = (0..non_null_series.len()).collect();
            let sampled: Vec<usize> = indices
                .choose_multiple(&mut rng, sample_size)
                .copied()
                .collect();

            for idx in sampled {
                if let Ok(val) = non_null_series.get(idx) {
                    sample_values.push(crate::utils::any_value_label(&val));
                }
            }
        }

        Ok(SchemaColumn {
            name: series.name().to_string(),
            dtype: format!("{:?}", series.dtype()),
            non_null_count,
            null_count,
            null_percentage,
            unique_count,
            sample_values,
        })
    }

    fn summarize_numeric(series: &Series) -> Result<ColumnSummary> {
        statistics::summarize_series(series)
    }
}
