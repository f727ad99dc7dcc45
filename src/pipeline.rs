//! The EDA pipeline: a strict top-to-bottom pass over the loaded dataset.
//!
//! Order matches the analysis workflow: summary statistics and schema,
//! per-column histograms and boxplots, the correlation heatmap, the two
//! categorical survival charts, then the fixed insight list.

use crate::config::{EdaConfig, MissingCategoricalPolicy};
use crate::dataset;
use crate::error::{EdaError, Result};
use crate::plot;
use crate::profiler::{DataProfiler, correlation_matrix};
use crate::reporting;
use crate::types::EdaReport;
use crate::utils::{numeric_column_names, numeric_values, require_column};
use chrono::Local;
use polars::prelude::*;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Orchestrates one full EDA run.
pub struct EdaPipeline {
    config: EdaConfig,
}

impl EdaPipeline {
    pub fn new(config: EdaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EdaConfig {
        &self.config
    }

    /// Run the full analysis on a loaded dataset.
    ///
    /// Consumes the frame (the `Sex` derivation is the one mutation of the
    /// run) and returns the serializable run report. Any error aborts the
    /// remaining steps.
    pub fn run(&self, mut df: DataFrame) -> Result<EdaReport> {
        if df.height() == 0 {
            return Err(EdaError::EmptyDataset);
        }

        let output_dir = &self.config.output_dir;
        if !output_dir.exists() {
            std::fs::create_dir_all(output_dir)?;
            info!("Created output directory: {}", output_dir.display());
        }

        let mut artifacts: Vec<PathBuf> = Vec::new();
        let mut warnings: Vec<String> = Vec::new();

        let console = self.config.console_output;

        // 1. Summary statistics and schema
        let summary = DataProfiler::summarize(&df)?;
        if console {
            reporting::print_summary(&summary);
            reporting::print_schema(&summary);
        }

        // 2-3. Distribution histograms and boxplots per numeric column
        let numeric_cols = numeric_column_names(&df);
        if numeric_cols.is_empty() {
            return Err(EdaError::NoNumericColumns);
        }

        if console {
            reporting::print_section("Generating Histograms");
        }
        for name in &numeric_cols {
            let values = numeric_values(require_column(&df, name)?)?;
            if values.is_empty() {
                warn!("Skipping histogram for all-null column '{}'", name);
                warnings.push(format!("Skipped histogram for all-null column '{name}'"));
                continue;
            }
            let path = plot::histogram_path(output_dir, name);
            plot::create_histogram(
                &values,
                name,
                self.config.plot_size,
                self.config.histogram_bins,
                &path,
            )?;
            debug!("Wrote {}", path.display());
            artifacts.push(path);
        }

        if console {
            reporting::print_section("Generating Boxplots");
        }
        for name in &numeric_cols {
            let values = numeric_values(require_column(&df, name)?)?;
            if values.is_empty() {
                warn!("Skipping boxplot for all-null column '{}'", name);
                warnings.push(format!("Skipped boxplot for all-null column '{name}'"));
                continue;
            }
            let path = plot::boxplot_path(output_dir, name);
            plot::create_boxplot(&values, name, self.config.plot_size, &path)?;
            debug!("Wrote {}", path.display());
            artifacts.push(path);
        }

        // 4. Correlation heatmap over numeric columns
        if console {
            reporting::print_section("Generating Correlation Heatmap");
        }
        let matrix = correlation_matrix(&df)?;
        let heatmap_path = output_dir.join(plot::CORRELATION_HEATMAP_FILE);
        // The heatmap gets a larger canvas than the per-column plots.
        let heatmap_size = (
            self.config.plot_size.0 * 5 / 4,
            self.config.plot_size.1 * 4 / 3,
        );
        plot::create_correlation_heatmap(
            &matrix,
            self.config.heatmap_precision,
            heatmap_size,
            &heatmap_path,
        )?;
        artifacts.push(heatmap_path);

        // 5. Categorical survival charts
        if console {
            reporting::print_section("Generating Bar Charts for Categorical Insights");
        }
        self.sex_survival_chart(&mut df, &mut artifacts, &mut warnings)?;
        self.categorical_survival_chart(&df, "Pclass", &mut artifacts, &mut warnings)?;

        // 6. Fixed insight list
        if console {
            reporting::print_insights();
        }

        Ok(EdaReport {
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            dataset_source: self.config.dataset_source.clone(),
            summary,
            artifacts,
            warnings,
        })
    }

    /// Derive the `Sex` label column and chart survival rate by sex.
    ///
    /// The one-hot source column may be absent when the upstream cleaning
    /// step was skipped; the configured policy decides between failing
    /// fast and skipping the chart.
    fn sex_survival_chart(
        &self,
        df: &mut DataFrame,
        artifacts: &mut Vec<PathBuf>,
        warnings: &mut Vec<String>,
    ) -> Result<()> {
        if df.column("Sex_female").is_err() {
            return self.handle_missing_categorical("Sex_female", warnings);
        }

        dataset::derive_sex_column(df)?;
        let rates = dataset::rate_by_group(df, "Sex", "Survived")?;
        let path = plot::bar_chart_path(&self.config.output_dir, "Sex", "Survived");
        plot::create_bar_chart(
            &rates,
            "Survival Rate by Sex",
            "Sex",
            self.config.plot_size,
            &path,
        )?;
        artifacts.push(path);
        Ok(())
    }

    fn categorical_survival_chart(
        &self,
        df: &DataFrame,
        group: &str,
        artifacts: &mut Vec<PathBuf>,
        warnings: &mut Vec<String>,
    ) -> Result<()> {
        if df.column(group).is_err() {
            return self.handle_missing_categorical(group, warnings);
        }

        let rates = dataset::rate_by_group(df, group, "Survived")?;
        let path = plot::bar_chart_path(&self.config.output_dir, group, "Survived");
        plot::create_bar_chart(
            &rates,
            &format!("Survival Rate by {group}"),
            if group == "Pclass" {
                "Passenger Class"
            } else {
                group
            },
            self.config.plot_size,
            &path,
        )?;
        artifacts.push(path);
        Ok(())
    }

    fn handle_missing_categorical(&self, column: &str, warnings: &mut Vec<String>) -> Result<()> {
        match self.config.missing_categorical {
            MissingCategoricalPolicy::Fail => Err(EdaError::ColumnNotFound(column.to_string())),
            MissingCategoricalPolicy::Skip => {
                warn!(
                    "Column '{}' not found; skipping its survival bar chart",
                    column
                );
                warnings.push(format!(
                    "Skipped survival bar chart: column '{column}' not found"
                ));
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_rejects_empty_frame() {
        let dir = tempfile::tempdir().unwrap();
        let config = EdaConfig::builder()
            .output_dir(dir.path().join("Output"))
            .build()
            .unwrap();

        let df = DataFrame::empty();
        let result = EdaPipeline::new(config).run(df);
        assert!(matches!(result, Err(EdaError::EmptyDataset)));

        // Nothing was written for a failed load.
        assert!(!dir.path().join("Output").exists());
    }

    #[test]
    fn test_pipeline_exposes_config() {
        let config = EdaConfig::builder()
            .heatmap_precision(3)
            .build()
            .unwrap();
        let pipeline = EdaPipeline::new(config);
        assert_eq!(pipeline.config().heatmap_precision, 3);
    }
}
