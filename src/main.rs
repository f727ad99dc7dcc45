//! CLI entry point for the Titanic EDA pipeline.

use anyhow::{Result, anyhow};
use clap::Parser;
use titanic_eda::{EdaConfig, EdaPipeline, MissingCategoricalPolicy, loader, reporting};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Exploratory data analysis for the cleaned Titanic dataset",
    long_about = "Loads the cleaned Titanic passenger dataset, prints summary\n\
                  statistics and schema information, renders distribution,\n\
                  outlier and correlation plots into the output directory,\n\
                  and prints a fixed list of insights.\n\n\
                  EXAMPLES:\n  \
                  # Fetch the dataset from its default URL\n  \
                  titanic-eda\n\n  \
                  # Analyze a local copy instead\n  \
                  titanic-eda --input data/cleaned_titanic_dataset.csv\n\n  \
                  # Machine-readable run report\n  \
                  titanic-eda --json | jq .artifacts"
)]
struct Args {
    /// URL of the cleaned dataset CSV
    #[arg(long, default_value = titanic_eda::DEFAULT_DATASET_URL)]
    url: String,

    /// Analyze a local CSV file instead of fetching the URL
    #[arg(short, long)]
    input: Option<String>,

    /// Output directory for generated plots
    #[arg(short, long, default_value = titanic_eda::DEFAULT_OUTPUT_DIR)]
    output: String,

    /// Skip the survival bar charts when their source columns are missing,
    /// instead of failing
    #[arg(long)]
    skip_missing_categorical: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show warnings and errors)
    #[arg(short, long)]
    quiet: bool,

    /// Output the run report as JSON to stdout instead of console tables
    ///
    /// Disables all logging; only the final JSON is written to stdout.
    #[arg(long)]
    json: bool,

    /// Write the run report as eda_report.json into the output directory
    #[arg(short = 'r', long)]
    emit_report: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level, args.quiet, args.json);

    let source = args.input.clone().unwrap_or_else(|| args.url.clone());
    let missing_categorical = if args.skip_missing_categorical {
        MissingCategoricalPolicy::Skip
    } else {
        MissingCategoricalPolicy::Fail
    };

    let config = EdaConfig::builder()
        .dataset_source(&source)
        .output_dir(&args.output)
        .missing_categorical(missing_categorical)
        .console_output(!args.json)
        .build()?;

    // Load the dataset; a failure here is fatal and produces no output.
    let df = match &args.input {
        Some(path) => loader::read_dataset(path),
        None => loader::fetch_dataset(&args.url),
    };
    let df = match df {
        Ok(df) => {
            if !args.json {
                println!("Dataset loaded successfully.");
            }
            df
        }
        Err(e) => {
            error!("Error loading dataset: {}", e);
            return Err(anyhow!("Error loading dataset: {}", e));
        }
    };

    let pipeline = EdaPipeline::new(config);
    let report = match pipeline.run(df) {
        Ok(report) => report,
        Err(e) => {
            error!("EDA run failed: {}", e);
            return Err(anyhow!("EDA run failed: {}", e));
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if args.emit_report {
        reporting::write_json_report(&report, &pipeline.config().output_dir)?;
    }

    info!(
        "EDA complete: {} artifacts written to {}",
        report.artifacts.len(),
        args.output
    );

    Ok(())
}
