//! Report schema written to JSON.
//!
//! Schema is versioned to allow future evolution.

use crate::parser::schema::RawTable;
use crate::pipeline::DerivedTables;
use crate::utils::config::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Input file the report was built from
    pub source: String,

    /// Timestamp when the report was generated
    pub generated_at: String,

    /// First rows of the upload, unmodified
    pub sample: RawTable,

    /// Every derived table of the render pass
    pub tables: DerivedTables,
}

/// Assemble a report from one render pass
pub fn build_report(
    source: impl Into<String>,
    raw: &RawTable,
    sample_rows: usize,
    tables: DerivedTables,
) -> Report {
    Report {
        version: SCHEMA_VERSION.to_string(),
        source: source.into(),
        generated_at: chrono::Utc::now().to_rfc3339(),
        sample: raw.sample(sample_rows),
        tables,
    }
}
