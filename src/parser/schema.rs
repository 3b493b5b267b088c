//! Typed schema for conflict-event rows.
//!
//! Column access is resolved once at load time; every derivation works on
//! `EventRecord` fields, never on string-keyed lookups.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One conflict event (a single CSV row after normalization)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventRecord {
    pub citizenship: Option<String>,
    pub event_location_region: Option<String>,
    pub event_location_district: Option<String>,
    pub took_part_in_the_hostilities: Option<String>,
    pub ammunition: Option<String>,
    pub type_of_injury: Option<String>,
    pub gender: Option<String>,
    pub killed_by: Option<String>,
    pub place_of_residence: Option<String>,
    pub age: Option<f64>,
    pub date_of_event: Option<NaiveDate>,

    /// Calendar year of `date_of_event`
    pub year: Option<i32>,

    /// Full English month name of `date_of_event` ("January")
    pub month: Option<String>,
}

impl EventRecord {
    /// Month number (1-12) of the event date, used for chronological ordering
    pub fn month_index(&self) -> Option<u32> {
        self.date_of_event.map(|d| d.month())
    }
}

/// Categorical columns that aggregations can group or count by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Citizenship,
    EventLocationRegion,
    EventLocationDistrict,
    TookPartInTheHostilities,
    Ammunition,
    TypeOfInjury,
    Gender,
    KilledBy,
    PlaceOfResidence,
}

impl Category {
    /// Column name as it appears in the CSV header
    pub fn column_name(self) -> &'static str {
        match self {
            Category::Citizenship => "citizenship",
            Category::EventLocationRegion => "event_location_region",
            Category::EventLocationDistrict => "event_location_district",
            Category::TookPartInTheHostilities => "took_part_in_the_hostilities",
            Category::Ammunition => "ammunition",
            Category::TypeOfInjury => "type_of_injury",
            Category::Gender => "gender",
            Category::KilledBy => "killed_by",
            Category::PlaceOfResidence => "place_of_residence",
        }
    }

    /// Value of this column for one record (None when missing)
    pub fn value_of(self, record: &EventRecord) -> Option<&str> {
        let field = match self {
            Category::Citizenship => &record.citizenship,
            Category::EventLocationRegion => &record.event_location_region,
            Category::EventLocationDistrict => &record.event_location_district,
            Category::TookPartInTheHostilities => &record.took_part_in_the_hostilities,
            Category::Ammunition => &record.ammunition,
            Category::TypeOfInjury => &record.type_of_injury,
            Category::Gender => &record.gender,
            Category::KilledBy => &record.killed_by,
            Category::PlaceOfResidence => &record.place_of_residence,
        };
        field.as_deref()
    }
}

/// Ordered collection of typed events from one upload
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventTable {
    pub events: Vec<EventRecord>,
}

impl EventTable {
    pub fn new(events: Vec<EventRecord>) -> Self {
        Self { events }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EventRecord> {
        self.events.iter()
    }
}

/// The uploaded CSV exactly as read, kept for unmodified display
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a header, if present
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// First `max_rows` rows with the header
    pub fn sample(&self, max_rows: usize) -> RawTable {
        RawTable {
            headers: self.headers.clone(),
            rows: self.rows.iter().take(max_rows).cloned().collect(),
        }
    }
}
