//! Report command implementation.
//!
//! The report command:
//! 1. Reads the CSV
//! 2. Normalizes and validates the events
//! 3. Recomputes every derived table
//! 4. Writes the JSON report (and optionally a text summary)

use crate::output::{build_report, render_text_summary, validate_output_path, write_report};
use crate::parser::{normalize, read_raw_table_from_path};
use crate::pipeline::Pipeline;
use crate::utils::config::DEFAULT_SAMPLE_ROWS;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Input CSV of conflict events
    pub input: PathBuf,

    /// Output path for the JSON report
    pub output_json: PathBuf,

    /// Gender for the district breakdown (None = first in data)
    pub gender: Option<String>,

    /// Raw rows to include as the dataset sample
    pub sample_rows: usize,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("events.csv"),
            output_json: PathBuf::from("report.json"),
            gender: None,
            sample_rows: DEFAULT_SAMPLE_ROWS,
            print_summary: false,
        }
    }
}

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Unreadable or malformed CSV
/// * Missing required columns or unparseable values
/// * Gender selection not present in the data
/// * File write errors
///
/// Any error aborts the pass before the report is written.
pub fn execute_report(args: ReportArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Building report for: {}", args.input.display());

    info!("Step 1/4: Reading CSV...");
    let raw = read_raw_table_from_path(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    info!("Step 2/4: Normalizing {} rows...", raw.len());
    let events = normalize(&raw).context("Failed to normalize events")?;

    info!("Step 3/4: Recomputing derived tables...");
    let tables = Pipeline::new()
        .recompute(&events, args.gender.as_deref())
        .context("Failed to compute derived tables")?;

    debug!(
        "{} charts, {} warnings",
        tables.charts.len(),
        tables.warnings.len()
    );

    info!("Step 4/4: Writing report...");
    let report = build_report(
        args.input.display().to_string(),
        &raw,
        args.sample_rows,
        tables,
    );

    write_report(&report, &args.output_json).context("Failed to write report JSON")?;

    info!("✓ Report written to: {}", args.output_json.display());

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("CONFLICT EVENTS SUMMARY");
        println!("{}", "=".repeat(80));
        println!("{}", render_text_summary(&report, 10));
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if !args.input.exists() {
        anyhow::bail!("Input file does not exist: {}", args.input.display());
    }

    validate_output_path(&args.output_json)?;

    if let Some(gender) = &args.gender {
        if gender.trim().is_empty() {
            anyhow::bail!("Gender selection cannot be empty");
        }
    }

    if args.sample_rows > 1000 {
        anyhow::bail!("sample_rows is too large (max 1000)");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn existing_input() -> NamedTempFile {
        NamedTempFile::new().unwrap()
    }

    #[test]
    fn test_validate_args_valid() {
        let input = existing_input();
        let args = ReportArgs {
            input: input.path().to_path_buf(),
            ..Default::default()
        };

        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_missing_input() {
        let args = ReportArgs {
            input: PathBuf::from("/nonexistent/events.csv"),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_gender() {
        let input = existing_input();
        let args = ReportArgs {
            input: input.path().to_path_buf(),
            gender: Some("  ".to_string()),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_sample_too_large() {
        let input = existing_input();
        let args = ReportArgs {
            input: input.path().to_path_buf(),
            sample_rows: 5000,
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_output_is_directory() {
        let input = existing_input();
        let dir = tempfile::tempdir().unwrap();
        let args = ReportArgs {
            input: input.path().to_path_buf(),
            output_json: dir.path().to_path_buf(),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }
}
