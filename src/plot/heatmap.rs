//! Correlation heatmap rendering.

use super::{PlotError, Result};
use crate::profiler::CorrelationMatrix;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

/// Render the correlation matrix as an annotated heatmap and save it as PNG.
///
/// Cells use a diverging blue/white/red ramp over [-1, 1]; each cell is
/// annotated with its coefficient at `precision` decimal places. Matrix row
/// 0 is drawn at the top, mirroring the conventional matrix orientation.
pub fn create_correlation_heatmap(
    matrix: &CorrelationMatrix,
    precision: usize,
    size: (u32, u32),
    output_path: &Path,
) -> Result<()> {
    if matrix.is_empty() {
        return Err(PlotError::InvalidData(
            "Correlation matrix has no columns".to_string(),
        ));
    }

    let n = matrix.len();
    let nf = n as f64;

    let root = BitMapBackend::new(output_path, size).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    // Cell i is centered on integer i, so integer axis ticks line up with
    // cell centers.
    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Correlation Heatmap of Numerical Features",
            ("sans-serif", 30),
        )
        .margin(20)
        .x_label_area_size(90)
        .y_label_area_size(110)
        .build_cartesian_2d(-0.5..nf - 0.5, -0.5..nf - 0.5)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    let columns = matrix.columns.clone();
    let y_columns = columns.clone();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(n)
        .y_labels(n)
        .x_label_formatter(&move |x| axis_label(&columns, *x))
        .y_label_formatter(&move |y| axis_label_flipped(&y_columns, *y))
        .label_style(("sans-serif", 16))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    for i in 0..n {
        for j in 0..n {
            let r = matrix.get(i, j);
            let x = j as f64;
            let y = (n - 1 - i) as f64;

            chart
                .draw_series([Rectangle::new(
                    [(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)],
                    correlation_color(r).filled(),
                )])
                .map_err(|e| PlotError::Drawing(e.to_string()))?;

            let text_color = if r.abs() > 0.65 { &WHITE } else { &BLACK };
            let style = ("sans-serif", 16)
                .into_font()
                .color(text_color)
                .pos(Pos::new(HPos::Center, VPos::Center));
            chart
                .draw_series([Text::new(format!("{r:.precision$}"), (x, y), style)])
                .map_err(|e| PlotError::Drawing(e.to_string()))?;
        }
    }

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}

fn axis_label(columns: &[String], position: f64) -> String {
    index_of_tick(position)
        .and_then(|i| columns.get(i))
        .cloned()
        .unwrap_or_default()
}

/// Matrix row 0 sits at the top of the chart, so y labels run in reverse.
fn axis_label_flipped(columns: &[String], position: f64) -> String {
    index_of_tick(position)
        .and_then(|i| columns.len().checked_sub(i + 1))
        .and_then(|i| columns.get(i))
        .cloned()
        .unwrap_or_default()
}

fn index_of_tick(position: f64) -> Option<usize> {
    let rounded = position.round();
    if (position - rounded).abs() < 1e-6 && rounded >= 0.0 {
        Some(rounded as usize)
    } else {
        None
    }
}

/// Diverging color ramp: blue for negative, white at zero, red for positive.
fn correlation_color(r: f64) -> RGBColor {
    let r = r.clamp(-1.0, 1.0);
    if r >= 0.0 {
        blend((255, 255, 255), (178, 24, 43), r)
    } else {
        blend((255, 255, 255), (33, 102, 172), -r)
    }
}

fn blend(from: (u8, u8, u8), to: (u8, u8, u8), t: f64) -> RGBColor {
    let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    RGBColor(
        channel(from.0, to.0),
        channel(from.1, to.1),
        channel(from.2, to.2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correlation_color_extremes() {
        assert_eq!(correlation_color(0.0), RGBColor(255, 255, 255));
        assert_eq!(correlation_color(1.0), RGBColor(178, 24, 43));
        assert_eq!(correlation_color(-1.0), RGBColor(33, 102, 172));
    }

    #[test]
    fn test_correlation_color_clamps() {
        assert_eq!(correlation_color(2.0), correlation_color(1.0));
        assert_eq!(correlation_color(-2.0), correlation_color(-1.0));
    }

    #[test]
    fn test_axis_label_lookup() {
        let cols = vec!["Age".to_string(), "Fare".to_string()];
        assert_eq!(axis_label(&cols, 0.0), "Age");
        assert_eq!(axis_label(&cols, 1.0), "Fare");
        assert_eq!(axis_label(&cols, 0.5), "");
        assert_eq!(axis_label(&cols, 7.0), "");
    }

    #[test]
    fn test_axis_label_flipped_reverses() {
        let cols = vec!["Age".to_string(), "Fare".to_string()];
        assert_eq!(axis_label_flipped(&cols, 0.0), "Fare");
        assert_eq!(axis_label_flipped(&cols, 1.0), "Age");
    }

    #[test]
    fn test_empty_matrix_is_invalid() {
        let matrix = CorrelationMatrix {
            columns: Vec::new(),
            values: Vec::new(),
        };
        let path = std::env::temp_dir().join("empty_heatmap.png");
        let result = create_correlation_heatmap(&matrix, 2, (1000, 800), &path);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_create_heatmap_writes_file() {
        let matrix = CorrelationMatrix {
            columns: vec!["Pclass".to_string(), "Fare".to_string()],
            values: vec![vec![1.0, -0.55], vec![-0.55, 1.0]],
        };
        let dir = std::env::temp_dir();
        let path = dir.join("heatmap_test.png");
        let _ = std::fs::remove_file(&path);

        create_correlation_heatmap(&matrix, 2, (1000, 800), &path).unwrap();
        assert!(path.exists());

        let _ = std::fs::remove_file(&path);
    }
}
