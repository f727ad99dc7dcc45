//! Shared data types describing the profiled dataset and the run report.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Descriptive statistics for one numeric column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub name: String,
    /// Number of non-null observations.
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n-1 denominator).
    pub std: f64,
    pub min: f64,
    /// First quartile (25th percentile, linear interpolation).
    pub q1: f64,
    pub median: f64,
    /// Third quartile (75th percentile, linear interpolation).
    pub q3: f64,
    pub max: f64,
    pub skewness: f64,
    /// Whether more than 5% of observations fall outside the 1.5*IQR fences.
    pub has_outliers: bool,
}

/// Schema-level information for one column (numeric or not).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaColumn {
    pub name: String,
    pub dtype: String,
    pub non_null_count: usize,
    pub null_count: usize,
    pub null_percentage: f64,
    pub unique_count: usize,
    /// Up to 5 sample values, drawn with a fixed seed for reproducibility.
    pub sample_values: Vec<String>,
}

/// Full profile of the loaded dataset: schema plus numeric summaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// (rows, columns)
    pub shape: (usize, usize),
    pub schema: Vec<SchemaColumn>,
    pub numeric: Vec<ColumnSummary>,
}

impl DatasetSummary {
    /// Look up the summary of a numeric column by name.
    pub fn numeric_column(&self, name: &str) -> Option<&ColumnSummary> {
        self.numeric.iter().find(|c| c.name == name)
    }
}

/// Result of a complete EDA run, serializable for `--json` / `--emit-report`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdaReport {
    /// Timestamp when the run finished.
    pub generated_at: String,
    /// URL or path the dataset was loaded from.
    pub dataset_source: String,
    pub summary: DatasetSummary,
    /// Every file written to the output directory, in creation order.
    pub artifacts: Vec<PathBuf>,
    /// Warnings emitted during the run (e.g. skipped bar charts).
    pub warnings: Vec<String>,
}

impl EdaReport {
    /// Check whether a named artifact was produced.
    pub fn has_artifact(&self, file_name: &str) -> bool {
        self.artifacts
            .iter()
            .any(|p| p.file_name().and_then(|n| n.to_str()) == Some(file_name))
    }
}
