//! CSV loading, schema definitions and input normalization.
//!
//! This module handles:
//! - Reading the uploaded CSV into a raw table
//! - Validating required columns
//! - Parsing typed values and deriving year/month
//! - Normalizing gender codes

pub mod loader;
pub mod normalize;
pub mod schema;

// Re-export main types
pub use loader::{read_raw_table, read_raw_table_from_path};
pub use normalize::{normalize, normalize_gender, normalize_genders, parse_date, validate_schema};
pub use schema::{Category, EventRecord, EventTable, RawTable};
