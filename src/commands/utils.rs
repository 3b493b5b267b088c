use anyhow::{Context, Result};
use std::path::Path;
use crate::output::read_report;
use crate::parser::{normalize, read_raw_table_from_path, validate_schema};
use crate::pipeline::gender_options;
use crate::utils::config::{REQUIRED_COLUMNS, SCHEMA_VERSION};

/// Load and normalize a CSV without writing anything
pub fn check_input(input: &Path) -> Result<()> {
    println!("Checking input: {}", input.display());

    let raw = read_raw_table_from_path(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    validate_schema(&raw.headers)?;
    let events = normalize(&raw)?;

    let extra: Vec<&String> = raw
        .headers
        .iter()
        .filter(|h| !REQUIRED_COLUMNS.contains(&h.as_str()))
        .collect();

    println!("✓ Valid event CSV");
    println!("  Rows: {}", events.len());
    println!("  Required columns: {}/{}", REQUIRED_COLUMNS.len(), REQUIRED_COLUMNS.len());
    if !extra.is_empty() {
        println!("  Extra columns: {:?}", extra);
    }
    println!("  Gender options: {:?}", gender_options(&events));

    Ok(())
}

/// Validate a report JSON file
pub fn validate_report_file(file_path: &Path) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source);
    println!("  Events: {}", report.tables.event_count);
    println!("  Charts: {}", report.tables.charts.len());
    println!("  Warnings: {}", report.tables.warnings.len());

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Conflict Dashboard Input Schema");
    println!("Report Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Required CSV columns:");
        println!("  citizenship: string                  - Citizenship of the person");
        println!("  event_location_region: string        - Region of the event");
        println!("  event_location_district: string      - District of the event");
        println!("  took_part_in_the_hostilities: string - 'Yes' or 'No'");
        println!("  ammunition: string                   - Weapon used");
        println!("  type_of_injury: string               - Injury type");
        println!("  gender: string                       - 'M' or 'F' (shown as Male/Female)");
        println!("  killed_by: string                    - Responsible party");
        println!("  place_of_residence: string           - Place of residence");
        println!("  age: number                          - Age (may be empty)");
        println!("  date_of_event: date                  - e.g. '2021-05-13'");
        println!();
        println!("Empty cells are treated as missing values.");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Conflict Dashboard v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Aggregation pipeline and report generator for conflict-event CSV datasets.");
}
