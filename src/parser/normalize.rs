//! Input normalization: schema validation, typed parsing and derived fields.
//!
//! Turns a `RawTable` into an `EventTable`:
//! - checks every required column is present (`SchemaError`)
//! - parses `age` and `date_of_event` (`ParseError` on bad values)
//! - maps gender codes to display names
//! - derives `year` and `month` from the event date

use super::schema::{EventRecord, EventTable, RawTable};
use crate::utils::config::{DATETIME_FORMATS, DATE_FORMATS, GENDER_NAMES, REQUIRED_COLUMNS};
use crate::utils::error::{ParseError, PipelineError, SchemaError};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use log::{debug, info};

/// Header positions of the required columns
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    citizenship: usize,
    event_location_region: usize,
    event_location_district: usize,
    took_part_in_the_hostilities: usize,
    ammunition: usize,
    type_of_injury: usize,
    gender: usize,
    killed_by: usize,
    place_of_residence: usize,
    age: usize,
    date_of_event: usize,
}

/// Build a normalized event table from raw rows
///
/// **Public** - main entry point for normalization
///
/// # Errors
/// * `PipelineError::Schema` - a required column is missing
/// * `PipelineError::Parse` - a date or age value cannot be parsed
///
/// Fails on the first bad row; nothing is returned in that case.
pub fn normalize(raw: &RawTable) -> Result<EventTable, PipelineError> {
    validate_schema(&raw.headers)?;
    let index = resolve_columns(raw)?;

    let mut events = Vec::with_capacity(raw.len());
    for (i, row) in raw.rows.iter().enumerate() {
        events.push(parse_row(row, &index, i + 1)?);
    }

    info!("Normalized {} events", events.len());

    Ok(EventTable::new(events))
}

/// Check that every required column appears in the header
///
/// **Public** - also used by the `check` command
pub fn validate_schema(headers: &[String]) -> Result<(), SchemaError> {
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(SchemaError::MissingColumn(column.to_string()));
        }
    }
    Ok(())
}

fn resolve_columns(raw: &RawTable) -> Result<ColumnIndex, SchemaError> {
    let find = |name: &str| {
        raw.column_index(name)
            .ok_or_else(|| SchemaError::MissingColumn(name.to_string()))
    };

    Ok(ColumnIndex {
        citizenship: find("citizenship")?,
        event_location_region: find("event_location_region")?,
        event_location_district: find("event_location_district")?,
        took_part_in_the_hostilities: find("took_part_in_the_hostilities")?,
        ammunition: find("ammunition")?,
        type_of_injury: find("type_of_injury")?,
        gender: find("gender")?,
        killed_by: find("killed_by")?,
        place_of_residence: find("place_of_residence")?,
        age: find("age")?,
        date_of_event: find("date_of_event")?,
    })
}

/// Parse one raw row; `row_number` is 1-based over data rows
fn parse_row(row: &[String], index: &ColumnIndex, row_number: usize) -> Result<EventRecord, ParseError> {
    let cell = |i: usize| -> Option<String> {
        row.get(i)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    let age = match cell(index.age) {
        Some(value) => Some(parse_age(&value).ok_or(ParseError::InvalidAge {
            row: row_number,
            value,
        })?),
        None => None,
    };

    let date_of_event = match cell(index.date_of_event) {
        Some(value) => Some(parse_date(&value).ok_or(ParseError::InvalidDate {
            row: row_number,
            value,
        })?),
        None => None,
    };

    Ok(EventRecord {
        citizenship: cell(index.citizenship),
        event_location_region: cell(index.event_location_region),
        event_location_district: cell(index.event_location_district),
        took_part_in_the_hostilities: cell(index.took_part_in_the_hostilities),
        ammunition: cell(index.ammunition),
        type_of_injury: cell(index.type_of_injury),
        gender: cell(index.gender).map(|g| normalize_gender(&g)),
        killed_by: cell(index.killed_by),
        place_of_residence: cell(index.place_of_residence),
        age,
        date_of_event,
        year: date_of_event.map(|d| d.year()),
        month: date_of_event.map(month_name),
    })
}

/// Parse a numeric age ("23", "23.0")
pub fn parse_age(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse an event date in any of the accepted formats
///
/// **Public** - returns None when no format matches
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.date());
        }
    }

    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .ok()
}

/// Full English month name, independent of locale
pub fn month_name(date: NaiveDate) -> String {
    date.format("%B").to_string()
}

/// Map a raw gender code to its display name; unknown values pass through
pub fn normalize_gender(value: &str) -> String {
    GENDER_NAMES
        .iter()
        .find(|(code, _)| *code == value)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Apply gender normalization to every record of a table
///
/// Table-level form of `normalize_gender`, which `normalize` already applies
/// per row. Idempotent: display names map to themselves, so running it on a
/// normalized table is a no-op.
pub fn normalize_genders(table: &EventTable) -> EventTable {
    debug!("Normalizing gender values for {} events", table.len());

    let events = table
        .iter()
        .map(|event| EventRecord {
            gender: event.gender.as_deref().map(normalize_gender),
            ..event.clone()
        })
        .collect();

    EventTable::new(events)
}
