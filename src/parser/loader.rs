//! CSV reader for uploaded event files.
//!
//! Produces a `RawTable` of strings. Nothing is interpreted here: typing and
//! normalization happen in `normalize`.

use super::schema::RawTable;
use crate::utils::error::LoadError;
use log::{debug, info};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read a CSV (with header row) into a raw table
///
/// **Public** - main entry point for loading
///
/// # Errors
/// * `LoadError::Csv` - unparseable CSV or rows with a different field count
/// * `LoadError::Io` - read failure
///
/// No partial table is returned on error.
pub fn read_raw_table<R: Read>(reader: R) -> Result<RawTable, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();

    debug!("CSV header: {:?}", headers);

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        rows.push(record.iter().map(|field| field.to_string()).collect());
    }

    debug!("Read {} rows", rows.len());

    Ok(RawTable { headers, rows })
}

/// Read a CSV file from disk
///
/// **Public** - convenience wrapper used by the commands
pub fn read_raw_table_from_path(path: impl AsRef<Path>) -> Result<RawTable, LoadError> {
    let path = path.as_ref();

    info!("Loading events from: {}", path.display());

    let file = File::open(path)?;
    read_raw_table(file)
}
