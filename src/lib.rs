//! Exploratory Data Analysis for the cleaned Titanic passenger dataset.
//!
//! Built on Polars for the tabular work and plotters for rendering. The
//! crate loads a pre-cleaned CSV (from a fixed URL or a local path),
//! prints descriptive statistics and schema information, writes
//! distribution/outlier/correlation plots as PNG files, and prints a fixed
//! list of qualitative insights.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use titanic_eda::{EdaConfig, EdaPipeline, loader};
//!
//! let config = EdaConfig::builder()
//!     .output_dir("Output")
//!     .build()?;
//!
//! let df = loader::fetch_dataset(&config.dataset_source)?;
//! let report = EdaPipeline::new(config).run(df)?;
//!
//! for artifact in &report.artifacts {
//!     println!("wrote {}", artifact.display());
//! }
//! ```
//!
//! # Pipeline stages
//!
//! 1. **Summary** — per-column statistics and schema, printed as tables
//! 2. **Histograms / Boxplots** — one PNG each per numeric column
//! 3. **Correlation heatmap** — annotated Pearson matrix
//! 4. **Bar charts** — survival rate by derived `Sex` and by `Pclass`
//! 5. **Insights** — a fixed, hand-written narrative
//!
//! A dataset-load failure is fatal: the pipeline never runs and no output
//! file is created.

pub mod config;
pub mod dataset;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod plot;
pub mod profiler;
pub mod reporting;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use config::{
    ConfigValidationError, DEFAULT_DATASET_URL, DEFAULT_OUTPUT_DIR, EdaConfig, EdaConfigBuilder,
    MissingCategoricalPolicy,
};
pub use error::{EdaError, Result as EdaResult, ResultExt};
pub use pipeline::EdaPipeline;
pub use plot::PlotError;
pub use profiler::{CorrelationMatrix, DataProfiler, correlation_matrix};
pub use reporting::INSIGHTS;
pub use types::{ColumnSummary, DatasetSummary, EdaReport, SchemaColumn};
