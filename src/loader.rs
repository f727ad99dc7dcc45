//! Dataset loading.
//!
//! The dataset is fetched once, either from the fixed URL or from a local
//! CSV file. A load failure is fatal for the whole run: no downstream step
//! executes and no output file is produced.

use crate::error::{EdaError, Result};
use polars::io::csv::read::{CsvParseOptions, CsvReadOptions};
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info};

/// Fetch the dataset CSV from a URL into a DataFrame.
pub fn fetch_dataset(url: &str) -> Result<DataFrame> {
    info!("Fetching dataset from: {}", url);

    let response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(|source| EdaError::Fetch {
            url: url.to_string(),
            source,
        })?;
    let bytes = response.bytes().map_err(|source| EdaError::Fetch {
        url: url.to_string(),
        source,
    })?;

    let df = parse_csv_bytes(bytes.to_vec())?;
    info!("Dataset loaded successfully: {:?}", df.shape());
    Ok(df)
}

/// Read the dataset CSV from a local file into a DataFrame.
pub fn read_dataset(path: impl AsRef<Path>) -> Result<DataFrame> {
    let path = path.as_ref();
    info!("Reading dataset from: {}", path.display());

    let bytes = std::fs::read(path)?;
    let df = parse_csv_bytes(bytes)?;
    info!("Dataset loaded successfully: {:?}", df.shape());
    Ok(df)
}

/// Parse CSV bytes with fallback strategies.
///
/// Tries quote-aware parsing first, then plain parsing, so a dataset with
/// slightly malformed quoting still loads.
fn parse_csv_bytes(bytes: Vec<u8>) -> Result<DataFrame> {
    match CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_quote_char(Some(b'"')))
        .into_reader_with_file_handle(Cursor::new(bytes.clone()))
        .finish()
    {
        Ok(df) => return check_non_empty(df),
        Err(e) => {
            debug!("Quote-aware CSV parsing failed: {}", e);
        }
    }

    let df = CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_quote_char(None))
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()?;
    check_non_empty(df)
}

fn check_non_empty(df: DataFrame) -> Result<DataFrame> {
    if df.height() == 0 {
        return Err(EdaError::EmptyDataset);
    }
    Ok(df)
}
