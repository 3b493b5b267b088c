//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod report;
pub mod utils;

// Re-export main command functions
pub use report::{execute_report, validate_args, ReportArgs};
pub use utils::{check_input, display_schema, display_version, validate_report_file};
