//! Grouped bar charts for categorical survival rates.

use super::{PlotError, Result};
use plotters::prelude::*;
use plotters::style::Palette99;
use std::path::Path;

/// Render a bar chart of per-category rates and save it as PNG.
///
/// `rates` holds (category label, mean target value) pairs in display
/// order; for a 0/1 target the y axis is the survival rate in [0, 1].
pub fn create_bar_chart(
    rates: &[(String, f64)],
    title: &str,
    x_label: &str,
    size: (u32, u32),
    output_path: &Path,
) -> Result<()> {
    if rates.is_empty() {
        return Err(PlotError::InvalidData(
            "No categories to plot".to_string(),
        ));
    }

    let max_rate = rates.iter().map(|(_, r)| *r).fold(0.0f64, f64::max);
    let y_max = if max_rate > 1.0 { max_rate * 1.1 } else { 1.0 };

    let root = BitMapBackend::new(output_path, size).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (0..rates.len() as i32).into_segmented(),
            0.0..y_max,
        )
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    let labels: Vec<String> = rates.iter().map(|(l, _)| l.clone()).collect();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(x_label)
        .y_desc("Survival Rate")
        .x_label_formatter(&move |x| match x {
            SegmentValue::CenterOf(i) => labels
                .get(*i as usize)
                .cloned()
                .unwrap_or_default(),
            _ => String::new(),
        })
        .label_style(("sans-serif", 18))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(rates.iter().enumerate().map(|(i, (_, rate))| {
            let color = Palette99::pick(i).mix(0.85);
            Rectangle::new(
                [
                    (SegmentValue::Exact(i as i32), 0.0),
                    (SegmentValue::Exact(i as i32 + 1), *rate),
                ],
                color.filled(),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_bar_chart_empty_categories() {
        let path = std::env::temp_dir().join("empty_bars.png");
        let result = create_bar_chart(&[], "Survival Rate by Sex", "Sex", (800, 600), &path);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_create_bar_chart_writes_file() {
        let dir = std::env::temp_dir();
        let path = dir.join("sex_bar_chart_test.png");
        let _ = std::fs::remove_file(&path);

        let rates = vec![
            ("female".to_string(), 0.74),
            ("male".to_string(), 0.19),
        ];
        create_bar_chart(&rates, "Survival Rate by Sex", "Sex", (800, 600), &path).unwrap();
        assert!(path.exists());

        let _ = std::fs::remove_file(&path);
    }
}
