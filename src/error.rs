//! Custom error types for the EDA pipeline.
//!
//! A single `thiserror` hierarchy covers everything from the initial dataset
//! fetch down to individual plot renders. Load failures are fatal: the CLI
//! reports them and exits non-zero without producing any output.

use crate::plot::PlotError;
use thiserror::Error;

/// The main error type for the EDA pipeline.
#[derive(Error, Debug)]
pub enum EdaError {
    /// Fetching the dataset from the configured URL failed.
    #[error("Failed to fetch dataset from '{url}': {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The dataset parsed to an empty frame.
    #[error("Dataset is empty")]
    EmptyDataset,

    /// A column required by a downstream step was not found.
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// No numeric columns to summarize or plot.
    #[error("Dataset has no numeric columns")]
    NoNumericColumns,

    /// No non-null values in a column needed for computation.
    #[error("No valid values found in column '{0}'")]
    NoValidValues(String),

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Plot rendering failed.
    #[error("Plot error: {0}")]
    Plot(#[from] PlotError),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization error (report output).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<EdaError>,
    },
}

impl EdaError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        EdaError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Check whether this error occurred while loading the dataset.
    ///
    /// Load errors abort the run before any artifact is written.
    pub fn is_load_error(&self) -> bool {
        match self {
            Self::Fetch { .. } | Self::EmptyDataset => true,
            Self::WithContext { source, .. } => source.is_load_error(),
            _ => false,
        }
    }
}

/// Result type alias for EDA operations.
pub type Result<T> = std::result::Result<T, EdaError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| EdaError::Polars(e).with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_context_preserves_source() {
        let error = EdaError::ColumnNotFound("Sex_female".to_string())
            .with_context("While deriving Sex labels");
        assert!(error.to_string().contains("While deriving Sex labels"));
        assert!(format!("{:?}", error).contains("Sex_female"));
    }

    #[test]
    fn test_is_load_error() {
        assert!(EdaError::EmptyDataset.is_load_error());
        assert!(EdaError::EmptyDataset.with_context("loading").is_load_error());
        assert!(!EdaError::NoNumericColumns.is_load_error());
        assert!(!EdaError::ColumnNotFound("Age".to_string()).is_load_error());
    }

    #[test]
    fn test_result_ext_on_polars_result() {
        let res: std::result::Result<(), polars::error::PolarsError> = Err(
            polars::error::PolarsError::ComputeError("boom".into()),
        );
        let err = res.context("While profiling").unwrap_err();
        assert!(err.to_string().contains("While profiling"));
    }
}
