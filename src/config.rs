//! Configuration for the EDA run.
//!
//! The dataset URL and output directory are explicit configuration values
//! with sensible defaults rather than module-level globals, built through
//! the builder pattern for ergonomic setup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default location of the cleaned Titanic dataset.
pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/ullas9525/AIML_Internship-Task-1_Elevate_Labs/main/Output/cleaned_titanic_dataset.csv";

/// Default directory for generated plots and reports.
pub const DEFAULT_OUTPUT_DIR: &str = "Output";

/// What to do when an expected categorical source column (the one-hot
/// `Sex_female`) is absent from the loaded dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MissingCategoricalPolicy {
    /// Fail fast with a column-not-found error.
    #[default]
    Fail,
    /// Log a warning and skip the affected bar chart.
    Skip,
}

/// Configuration for the EDA pipeline.
///
/// Use [`EdaConfig::builder()`] to create a configuration with fluent API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdaConfig {
    /// Where the dataset was (or will be) loaded from. Used for report
    /// metadata only; loading itself happens in the `loader` module.
    pub dataset_source: String,

    /// Output directory for plots and reports. Created if absent.
    /// Default: "Output"
    pub output_dir: PathBuf,

    /// Fixed number of histogram bins. When None, bins are chosen per
    /// column with the Freedman-Diaconis rule (Sturges fallback).
    /// Default: None
    pub histogram_bins: Option<usize>,

    /// Decimal places for correlation heatmap annotations (0-6).
    /// Default: 2
    pub heatmap_precision: usize,

    /// Width and height of generated plots, in pixels.
    /// Default: (800, 600)
    pub plot_size: (u32, u32),

    /// Policy for a missing `Sex_female` one-hot column.
    /// Default: Fail
    pub missing_categorical: MissingCategoricalPolicy,

    /// Print summary tables, section banners and insights to stdout.
    /// The CLI turns this off in `--json` mode so stdout carries only
    /// the report document.
    /// Default: true
    #[serde(default = "default_console_output")]
    pub console_output: bool,
}

fn default_console_output() -> bool {
    true
}

impl Default for EdaConfig {
    fn default() -> Self {
        Self {
            dataset_source: DEFAULT_DATASET_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            histogram_bins: None,
            heatmap_precision: 2,
            plot_size: (800, 600),
            missing_categorical: MissingCategoricalPolicy::default(),
            console_output: true,
        }
    }
}

impl EdaConfig {
    /// Create a new configuration builder.
    pub fn builder() -> EdaConfigBuilder {
        EdaConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if let Some(bins) = self.histogram_bins
            && bins == 0
        {
            return Err(ConfigValidationError::InvalidHistogramBins);
        }

        if self.heatmap_precision > 6 {
            return Err(ConfigValidationError::InvalidPrecision(
                self.heatmap_precision,
            ));
        }

        let (w, h) = self.plot_size;
        if w == 0 || h == 0 {
            return Err(ConfigValidationError::InvalidPlotSize(w, h));
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Histogram bin count must be at least 1")]
    InvalidHistogramBins,

    #[error("Invalid heatmap precision: {0} (must be at most 6)")]
    InvalidPrecision(usize),

    #[error("Invalid plot size: {0}x{1} (both dimensions must be non-zero)")]
    InvalidPlotSize(u32, u32),
}

/// Builder for [`EdaConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct EdaConfigBuilder {
    dataset_source: Option<String>,
    output_dir: Option<PathBuf>,
    histogram_bins: Option<usize>,
    heatmap_precision: Option<usize>,
    plot_size: Option<(u32, u32)>,
    missing_categorical: Option<MissingCategoricalPolicy>,
    console_output: Option<bool>,
}

impl EdaConfigBuilder {
    /// Record where the dataset comes from (URL or local path).
    pub fn dataset_source(mut self, source: impl Into<String>) -> Self {
        self.dataset_source = Some(source.into());
        self
    }

    /// Set the output directory for plots and reports.
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(path.into());
        self
    }

    /// Force a fixed number of histogram bins for every column.
    pub fn histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = Some(bins);
        self
    }

    /// Set the decimal precision of heatmap cell annotations.
    pub fn heatmap_precision(mut self, precision: usize) -> Self {
        self.heatmap_precision = Some(precision);
        self
    }

    /// Set plot dimensions in pixels.
    pub fn plot_size(mut self, width: u32, height: u32) -> Self {
        self.plot_size = Some((width, height));
        self
    }

    /// Set the policy for a missing `Sex_female` column.
    pub fn missing_categorical(mut self, policy: MissingCategoricalPolicy) -> Self {
        self.missing_categorical = Some(policy);
        self
    }

    /// Enable or disable console tables, banners and insights.
    pub fn console_output(mut self, enabled: bool) -> Self {
        self.console_output = Some(enabled);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `EdaConfig` or an error if validation fails.
    pub fn build(self) -> Result<EdaConfig, ConfigValidationError> {
        let config = EdaConfig {
            dataset_source: self
                .dataset_source
                .unwrap_or_else(|| DEFAULT_DATASET_URL.to_string()),
            output_dir: self
                .output_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            histogram_bins: self.histogram_bins,
            heatmap_precision: self.heatmap_precision.unwrap_or(2),
            plot_size: self.plot_size.unwrap_or((800, 600)),
            missing_categorical: self.missing_categorical.unwrap_or_default(),
            console_output: self.console_output.unwrap_or(true),
        };

        config.validate()?;
        Ok(config)
    }
}
