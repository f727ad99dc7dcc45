//! Plot rendering.
//!
//! All charts are rendered with the [`plotters`] bitmap backend and saved
//! as PNG files with deterministic names in the output directory. The
//! bitmap backend keeps rendering headless-friendly (no display server).

mod bars;
mod boxplot;
mod heatmap;
mod histogram;

pub use bars::create_bar_chart;
pub use boxplot::create_boxplot;
pub use heatmap::create_correlation_heatmap;
pub use histogram::create_histogram;

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during plot generation.
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save plot to file: {0}")]
    FileSave(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub(crate) type Result<T> = core::result::Result<T, PlotError>;

/// File name of the correlation heatmap.
pub const CORRELATION_HEATMAP_FILE: &str = "correlation_heatmap.png";

/// Path of the histogram image for a column.
pub fn histogram_path(output_dir: &Path, column: &str) -> PathBuf {
    output_dir.join(format!("{column}_histogram.png"))
}

/// Path of the boxplot image for a column.
pub fn boxplot_path(output_dir: &Path, column: &str) -> PathBuf {
    output_dir.join(format!("{column}_boxplot.png"))
}

/// Path of the grouped bar chart for a categorical column.
///
/// The column name is lowercased, matching `sex_vs_survived_bar_chart.png`
/// and `pclass_vs_survived_bar_chart.png`.
pub fn bar_chart_path(output_dir: &Path, group_column: &str, target_column: &str) -> PathBuf {
    output_dir.join(format!(
        "{}_vs_{}_bar_chart.png",
        group_column.to_lowercase(),
        target_column.to_lowercase()
    ))
}

/// Pad a value range so flat data still renders with a visible axis span.
pub(crate) fn padded_range(min: f64, max: f64) -> (f64, f64) {
    if min < max {
        let pad = (max - min) * 0.05;
        (min - pad, max + pad)
    } else {
        // Degenerate (constant) data.
        (min - 0.5, max + 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_file_names() {
        let dir = Path::new("Output");
        assert_eq!(
            histogram_path(dir, "Fare"),
            PathBuf::from("Output/Fare_histogram.png")
        );
        assert_eq!(
            boxplot_path(dir, "Age"),
            PathBuf::from("Output/Age_boxplot.png")
        );
        assert_eq!(
            bar_chart_path(dir, "Sex", "Survived"),
            PathBuf::from("Output/sex_vs_survived_bar_chart.png")
        );
        assert_eq!(
            bar_chart_path(dir, "Pclass", "Survived"),
            PathBuf::from("Output/pclass_vs_survived_bar_chart.png")
        );
    }

    #[test]
    fn test_padded_range_normal() {
        let (lo, hi) = padded_range(0.0, 100.0);
        assert!(lo < 0.0 && hi > 100.0);
    }

    #[test]
    fn test_padded_range_constant_data() {
        let (lo, hi) = padded_range(5.0, 5.0);
        assert!(lo < 5.0 && hi > 5.0);
    }
}
