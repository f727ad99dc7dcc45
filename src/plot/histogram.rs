//! Histogram rendering with a Gaussian kernel density overlay.

use super::{PlotError, Result, padded_range};
use crate::profiler::quantile_of_sorted;
use plotters::prelude::*;
use std::path::Path;

/// Render a histogram of `values` with a density overlay and save it as PNG.
///
/// Bin count follows the Freedman-Diaconis rule with a Sturges fallback,
/// unless `bins` forces a fixed count. The density curve is a Gaussian KDE
/// (Silverman bandwidth) scaled to the frequency axis.
pub fn create_histogram(
    values: &[f64],
    column: &str,
    size: (u32, u32),
    bins: Option<usize>,
    output_path: &Path,
) -> Result<()> {
    if values.is_empty() {
        return Err(PlotError::InvalidData(format!(
            "No values to plot for column '{column}'"
        )));
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let data_min = sorted[0];
    let data_max = sorted[sorted.len() - 1];
    let (x_min, x_max) = padded_range(data_min, data_max);

    let bin_count = bins.unwrap_or_else(|| auto_bin_count(&sorted)).max(1);
    let bin_width = (x_max - x_min) / bin_count as f64;
    let counts = bin_counts(&sorted, x_min, bin_width, bin_count);

    let density = kde_curve(&sorted, x_min, x_max, bin_width);
    let peak = counts
        .iter()
        .map(|c| *c as f64)
        .chain(density.iter().map(|(_, y)| *y))
        .fold(0.0f64, f64::max);
    let y_max = (peak * 1.1).max(1.0);

    let root = BitMapBackend::new(output_path, size).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Distribution of {column}"), ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(column)
        .y_desc("Frequency")
        .label_style(("sans-serif", 18))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(counts.iter().enumerate().map(|(i, count)| {
            let left = x_min + i as f64 * bin_width;
            Rectangle::new(
                [(left, 0.0), (left + bin_width, *count as f64)],
                BLUE.mix(0.35).filled(),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    if !density.is_empty() {
        chart
            .draw_series(LineSeries::new(density, RED.stroke_width(2)))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}

/// Freedman-Diaconis bin count, falling back to Sturges when the IQR
/// is degenerate.
fn auto_bin_count(sorted: &[f64]) -> usize {
    let n = sorted.len();
    let span = sorted[n - 1] - sorted[0];
    if span <= 0.0 {
        return 1;
    }

    let iqr = quantile_of_sorted(sorted, 0.75) - quantile_of_sorted(sorted, 0.25);
    let fd_width = 2.0 * iqr / (n as f64).cbrt();
    if fd_width > 0.0 {
        ((span / fd_width).ceil() as usize).clamp(1, 100)
    } else {
        ((n as f64).log2().ceil() as usize + 1).clamp(1, 100)
    }
}

fn bin_counts(sorted: &[f64], x_min: f64, bin_width: f64, bin_count: usize) -> Vec<usize> {
    let mut counts = vec![0usize; bin_count];
    for v in sorted {
        let idx = (((v - x_min) / bin_width) as usize).min(bin_count - 1);
        counts[idx] += 1;
    }
    counts
}

/// Gaussian KDE sampled across the plot range, scaled to frequency units
/// (density * n * bin_width) so it overlays the histogram bars.
fn kde_curve(sorted: &[f64], x_min: f64, x_max: f64, bin_width: f64) -> Vec<(f64, f64)> {
    let n = sorted.len();
    let bandwidth = silverman_bandwidth(sorted);
    if bandwidth <= 0.0 || n < 2 {
        return Vec::new();
    }

    const SAMPLES: usize = 200;
    let step = (x_max - x_min) / (SAMPLES - 1) as f64;
    (0..SAMPLES)
        .map(|i| {
            let x = x_min + i as f64 * step;
            let density: f64 = sorted
                .iter()
                .map(|v| {
                    let u = (x - v) / bandwidth;
                    (-0.5 * u * u).exp()
                })
                .sum::<f64>()
                / (n as f64 * bandwidth * (2.0 * std::f64::consts::PI).sqrt());
            (x, density * n as f64 * bin_width)
        })
        .collect()
}

fn silverman_bandwidth(sorted: &[f64]) -> f64 {
    let n = sorted.len() as f64;
    let mean = sorted.iter().sum::<f64>() / n;
    let std = (sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0).max(1.0)).sqrt();
    let iqr = quantile_of_sorted(sorted, 0.75) - quantile_of_sorted(sorted, 0.25);

    let spread = if iqr > 0.0 {
        std.min(iqr / 1.34)
    } else {
        std
    };
    0.9 * spread * n.powf(-0.2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_bin_count_reasonable() {
        let sorted: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let bins = auto_bin_count(&sorted);
        assert!((2..=100).contains(&bins));
    }

    #[test]
    fn test_auto_bin_count_constant_data() {
        assert_eq!(auto_bin_count(&[3.0, 3.0, 3.0]), 1);
    }

    #[test]
    fn test_bin_counts_cover_all_values() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        let counts = bin_counts(&sorted, 0.0, 2.0, 3);
        assert_eq!(counts.iter().sum::<usize>(), 5);
        assert_eq!(counts, vec![1, 2, 2]);
    }

    #[test]
    fn test_kde_curve_scaled_to_frequency() {
        let mut sorted: Vec<f64> = (0..50).map(|i| (i % 10) as f64).collect();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let curve = kde_curve(&sorted, -1.0, 10.0, 1.0);
        assert_eq!(curve.len(), 200);
        // Scaled density must be positive somewhere near the data.
        assert!(curve.iter().any(|(_, y)| *y > 0.1));
    }

    #[test]
    fn test_kde_curve_degenerate_data() {
        let sorted = [5.0, 5.0, 5.0];
        assert!(kde_curve(&sorted, 4.5, 5.5, 0.1).is_empty());
    }

    #[test]
    fn test_create_histogram_empty_values() {
        let path = std::env::temp_dir().join("empty_histogram.png");
        let result = create_histogram(&[], "Fare", (800, 600), None, &path);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_create_histogram_writes_file() {
        let dir = std::env::temp_dir();
        let path = dir.join("fare_histogram_test.png");
        let _ = std::fs::remove_file(&path);

        let values = [7.25, 71.28, 7.92, 53.1, 8.05, 8.46, 26.55, 13.0];
        create_histogram(&values, "Fare", (800, 600), None, &path).unwrap();
        assert!(path.exists());

        let _ = std::fs::remove_file(&path);
    }
}
