//! Console reporting and JSON report output.
//!
//! Summary statistics, schema information and the fixed insight list are
//! user-facing CLI output, printed with `println!` rather than logged, so
//! they stay visible regardless of log level.

use crate::error::Result;
use crate::types::{DatasetSummary, EdaReport};
use crate::utils::truncate_str;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Hand-written observations about the dataset's known shape.
///
/// A static narrative, not computed from data at runtime.
pub const INSIGHTS: &[&str] = &[
    "The dataset contains information on passenger demographics, ticket details, and survival status.",
    "A significant portion of passengers did not survive, indicating the severity of the disaster.",
    "Females had a considerably higher survival rate compared to males, suggesting a 'women and children first' policy.",
    "Passengers in Pclass 1 had a much higher survival rate than those in Pclass 2 and 3.",
    "Age distribution shows a wide range, with a notable number of children and elderly individuals.",
    "'Fare' distribution is heavily skewed towards lower values, indicating most passengers paid less.",
    "'SibSp' and 'Parch' features indicate that most passengers traveled alone or with a small family.",
    "There is a moderate negative correlation between 'Pclass' and 'Fare', meaning higher classes paid more.",
];

/// Print the section header used between pipeline stages.
pub fn print_section(title: &str) {
    println!("\n--- {title} ---");
}

/// Print descriptive statistics for every numeric column.
pub fn print_summary(summary: &DatasetSummary) {
    print_section("Summary Statistics");
    println!(
        "{:<16} {:>8} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "Column", "Count", "Mean", "Std", "Min", "25%", "50%", "75%", "Max"
    );
    println!("{}", "-".repeat(100));

    for col in &summary.numeric {
        println!(
            "{:<16} {:>8} {:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>10.4}",
            truncate_str(&col.name, 15),
            col.count,
            col.mean,
            col.std,
            col.min,
            col.q1,
            col.median,
            col.q3,
            col.max
        );
    }
}

/// Print schema information: dtypes, null accounting, unique counts.
pub fn print_schema(summary: &DatasetSummary) {
    print_section("Info");
    println!(
        "Shape: {} rows x {} columns",
        summary.shape.0, summary.shape.1
    );
    println!(
        "{:<16} {:<12} {:>10} {:>10} {:>8}",
        "Column", "Dtype", "Non-Null", "Null %", "Unique"
    );
    println!("{}", "-".repeat(60));

    for col in &summary.schema {
        println!(
            "{:<16} {:<12} {:>10} {:>10.1} {:>8}",
            truncate_str(&col.name, 15),
            col.dtype,
            col.non_null_count,
            col.null_percentage,
            col.unique_count
        );
    }
}

/// Print the fixed insight list.
pub fn print_insights() {
    print_section("Key Insights from EDA");
    for insight in INSIGHTS {
        println!("- {insight}");
    }
}

/// Write the run report as pretty-printed JSON into the output directory.
///
/// Returns the path of the written file.
pub fn write_json_report(report: &EdaReport, output_dir: &Path) -> Result<PathBuf> {
    let path = output_dir.join("eda_report.json");
    let json = serde_json::to_string_pretty(report)?;

    let mut file = File::create(&path)?;
    file.write_all(json.as_bytes())?;

    info!("Report written to: {}", path.display());
    Ok(path)
}
