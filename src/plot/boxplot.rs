//! Boxplot rendering for a single numeric column.

use super::{PlotError, Result, padded_range};
use plotters::prelude::*;
use std::path::Path;

/// Render a vertical boxplot of `values` and save it as PNG.
///
/// Whiskers follow the plotters [`Quartiles`] convention (1.5*IQR fences
/// clamped to the data range), matching the outlier fences reported in the
/// numeric summary.
pub fn create_boxplot(
    values: &[f64],
    column: &str,
    size: (u32, u32),
    output_path: &Path,
) -> Result<()> {
    if values.is_empty() {
        return Err(PlotError::InvalidData(format!(
            "No values to plot for column '{column}'"
        )));
    }

    let data_min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let data_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let (y_min, y_max) = padded_range(data_min, data_max);

    let quartiles = Quartiles::new(values);
    let categories = [column];

    let root = BitMapBackend::new(output_path, size).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Boxplot of {column}"), ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(categories[..].into_segmented(), y_min as f32..y_max as f32)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .y_desc(column)
        .label_style(("sans-serif", 18))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series([Boxplot::new_vertical(
            SegmentValue::CenterOf(&column),
            &quartiles,
        )
        .width(60)
        .whisker_width(0.5)
        .style(&BLUE)])
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_boxplot_empty_values() {
        let path = std::env::temp_dir().join("empty_boxplot.png");
        let result = create_boxplot(&[], "Fare", (800, 600), &path);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_create_boxplot_writes_file() {
        let dir = std::env::temp_dir();
        let path = dir.join("fare_boxplot_test.png");
        let _ = std::fs::remove_file(&path);

        let values = [7.25, 71.28, 7.92, 53.1, 8.05, 8.46, 26.55, 13.0];
        create_boxplot(&values, "Fare", (800, 600), &path).unwrap();
        assert!(path.exists());

        let _ = std::fs::remove_file(&path);
    }
}
