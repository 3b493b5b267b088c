//! Conflict Dashboard CLI
//!
//! Loads a CSV of conflict events and derives the summary tables behind
//! each dashboard chart.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use conflict_dashboard::commands::{
    check_input, display_schema, display_version, execute_report, validate_args,
    validate_report_file, ReportArgs,
};
use conflict_dashboard::utils::config::DEFAULT_SAMPLE_ROWS;

/// Conflict Dashboard - summary tables for conflict-event datasets
#[derive(Parser, Debug)]
#[command(name = "conflict-dash")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the dashboard report from a CSV
    Report {
        /// Input CSV of conflict events
        #[arg(short, long, env = "CONFLICT_DASH_INPUT")]
        input: PathBuf,

        /// Output path for JSON report
        #[arg(short, long, default_value = "report.json")]
        output: PathBuf,

        /// Gender for the district breakdown (defaults to the first in the data)
        #[arg(short, long)]
        gender: Option<String>,

        /// Number of raw rows to include as the dataset sample
        #[arg(long, default_value_t = DEFAULT_SAMPLE_ROWS)]
        sample: usize,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Check that a CSV loads and normalizes cleanly
    Check {
        /// Input CSV of conflict events
        #[arg(short, long, env = "CONFLICT_DASH_INPUT")]
        input: PathBuf,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Report {
            input,
            output,
            gender,
            sample,
            summary,
        } => {
            let args = ReportArgs {
                input,
                output_json: output,
                gender,
                sample_rows: sample,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_report(args)?;
        }

        Commands::Check { input } => {
            check_input(&input)?;
        }

        Commands::Validate { file } => {
            validate_report_file(&file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
