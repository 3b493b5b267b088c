//! Configuration and constants for the pipeline and the CLI.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Columns every input CSV must carry
pub const REQUIRED_COLUMNS: &[&str] = &[
    "citizenship",
    "event_location_region",
    "event_location_district",
    "took_part_in_the_hostilities",
    "ammunition",
    "type_of_injury",
    "gender",
    "killed_by",
    "place_of_residence",
    "age",
    "date_of_event",
];

// Date-only formats, tried in order
pub const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y"];

// Timestamp formats; only the date part is kept
pub const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Raw gender codes and their display names
pub const GENDER_NAMES: &[(&str, &str)] = &[("M", "Male"), ("F", "Female")];

/// Participation values counted by the hostility partition
pub const HOSTILITY_YES: &str = "Yes";
pub const HOSTILITY_NO: &str = "No";

/// Separator used for composite-key labels ("Male-Israeli security forces")
pub const LABEL_SEPARATOR: &str = "-";

/// Raw rows included in the dataset sample by default
pub const DEFAULT_SAMPLE_ROWS: usize = 5;
