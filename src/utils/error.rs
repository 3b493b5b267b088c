//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while reading the input CSV
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors that can occur while converting raw cells into typed values
#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("Row {row}: unrecognized date in date_of_event: {value:?}")]
    InvalidDate { row: usize, value: String },

    #[error("Row {row}: age is not a number: {value:?}")]
    InvalidAge { row: usize, value: String },
}

/// Errors raised when the input does not carry the expected columns
#[derive(Error, Debug, PartialEq)]
pub enum SchemaError {
    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

/// Any fatal error of a load or render pass
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("Gender {selected:?} is not present in the data (options: {options:?})")]
    InvalidSelection {
        selected: String,
        options: Vec<String>,
    },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
