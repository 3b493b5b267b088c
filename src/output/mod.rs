//! Output writers for report data.
//!
//! This module handles:
//! - The versioned report schema
//! - JSON reports (write and read back)
//! - Text summaries

pub mod json;
pub mod report;
pub mod text;

// Re-export main functions
pub use json::{read_report, validate_output_path, write_report};
pub use report::{build_report, Report};
pub use text::render_text_summary;
