//! The aggregation pipeline: one event table in, every derived table out.
//!
//! `Pipeline::recompute` is a pure function of the event table and the
//! gender selection. It is called once per upload and once per selection
//! change; nothing is cached between calls.

use crate::aggregator::{
    district_by_gender, events_over_time, group_distinct, group_mean_age, group_size,
    group_value_counts, hostility_counts, label_rows, value_counts, CategoryCount,
    CompositeCount, GroupDistinct, GroupMean, GroupedCount, HostilityCounts, TimelinePoint,
};
use crate::parser::schema::{Category, EventTable};
use crate::utils::error::PipelineError;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Chart type the presentation layer should use for a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Table,
    Bar,
    GroupedBar,
    Pie,
    Donut,
    Line,
}

/// Pairs a derived table with its title and chart kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Field name of the table in `DerivedTables`
    pub table: String,
    pub title: String,
    pub kind: ChartKind,
}

impl ChartSpec {
    fn new(table: &str, title: impl Into<String>, kind: ChartKind) -> Self {
        Self {
            table: table.to_string(),
            title: title.into(),
            kind,
        }
    }
}

/// Non-fatal notice that a derivation produced nothing to plot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyResultWarning {
    pub table: String,
    pub reason: String,
}

/// Every derived summary table of one render pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedTables {
    pub event_count: usize,
    pub citizenship_counts: Vec<CategoryCount>,
    pub region_counts: Vec<CategoryCount>,
    pub hostility: HostilityCounts,
    pub weapon_counts: Vec<CategoryCount>,
    pub injury_types: Vec<CategoryCount>,
    pub hostility_by_gender: Vec<GroupedCount>,
    pub residents_by_region: Vec<GroupDistinct>,
    pub average_age_by_region: Vec<GroupMean>,
    pub incidents_by_citizenship: Vec<CategoryCount>,
    pub kills_by_gender: Vec<CompositeCount>,
    pub gender_options: Vec<String>,
    pub selected_gender: Option<String>,
    pub districts_for_gender: Vec<CompositeCount>,
    pub events_over_time: Vec<TimelinePoint>,
    pub charts: Vec<ChartSpec>,
    pub warnings: Vec<EmptyResultWarning>,
}

impl DerivedTables {
    /// Derived tables keyed by name, without the manifest and warnings
    ///
    /// **Public** - the `{name: table}` view handed to the presentation layer
    pub fn named_tables(&self) -> Result<serde_json::Map<String, serde_json::Value>, serde_json::Error> {
        let mut map = match serde_json::to_value(self)? {
            serde_json::Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };
        map.remove("charts");
        map.remove("warnings");
        Ok(map)
    }
}

/// Stateless aggregation pipeline
#[derive(Debug, Clone, Copy, Default)]
pub struct Pipeline;

impl Pipeline {
    pub fn new() -> Self {
        Self
    }

    /// Recompute every derived table from the event table
    ///
    /// **Public** - main entry point of the pipeline
    ///
    /// # Arguments
    /// * `table` - Normalized event table
    /// * `selected_gender` - Gender for the district breakdown; None picks
    ///   the first gender present
    ///
    /// # Errors
    /// * `PipelineError::InvalidSelection` - selected gender not in the data
    pub fn recompute(
        &self,
        table: &EventTable,
        selected_gender: Option<&str>,
    ) -> Result<DerivedTables, PipelineError> {
        info!("Recomputing derived tables for {} events", table.len());

        let gender_options = gender_options(table);
        let selected_gender = resolve_selection(&gender_options, selected_gender)?;

        debug!("Gender selection: {:?}", selected_gender);

        let districts_for_gender = match &selected_gender {
            Some(gender) => label_rows(&district_by_gender(table, gender)),
            None => Vec::new(),
        };

        let mut tables = DerivedTables {
            event_count: table.len(),
            citizenship_counts: value_counts(table, Category::Citizenship),
            region_counts: value_counts(table, Category::EventLocationRegion),
            hostility: hostility_counts(table),
            weapon_counts: value_counts(table, Category::Ammunition),
            injury_types: value_counts(table, Category::TypeOfInjury),
            hostility_by_gender: group_value_counts(
                table,
                Category::Gender,
                Category::TookPartInTheHostilities,
            ),
            residents_by_region: group_distinct(
                table,
                Category::EventLocationRegion,
                Category::PlaceOfResidence,
            ),
            average_age_by_region: group_mean_age(table, Category::EventLocationRegion),
            incidents_by_citizenship: group_size(table, Category::Citizenship),
            kills_by_gender: label_rows(&group_value_counts(
                table,
                Category::Gender,
                Category::KilledBy,
            )),
            districts_for_gender,
            events_over_time: events_over_time(table),
            charts: chart_manifest(selected_gender.as_deref()),
            gender_options,
            selected_gender,
            warnings: Vec::new(),
        };

        tables.warnings = collect_warnings(&tables);
        for warning in &tables.warnings {
            warn!("{}: {}", warning.table, warning.reason);
        }

        Ok(tables)
    }
}

/// Distinct non-missing genders in first-seen order
///
/// **Public** - the values a user may select
pub fn gender_options(table: &EventTable) -> Vec<String> {
    let mut seen = HashSet::new();
    table
        .iter()
        .filter_map(|event| event.gender.as_deref())
        .filter(|gender| seen.insert(*gender))
        .map(str::to_string)
        .collect()
}

fn resolve_selection(
    options: &[String],
    selected: Option<&str>,
) -> Result<Option<String>, PipelineError> {
    match selected {
        Some(gender) if options.iter().any(|o| o == gender) => Ok(Some(gender.to_string())),
        Some(gender) => Err(PipelineError::InvalidSelection {
            selected: gender.to_string(),
            options: options.to_vec(),
        }),
        None => Ok(options.first().cloned()),
    }
}

/// Titles and chart kinds, in display order
fn chart_manifest(selected_gender: Option<&str>) -> Vec<ChartSpec> {
    let district_title = match selected_gender {
        Some(gender) => format!("Kill count based on {}", gender),
        None => "Kill count based on gender".to_string(),
    };

    vec![
        ChartSpec::new("citizenship_counts", "Citizenship counts", ChartKind::Table),
        ChartSpec::new("region_counts", "Event Location Region", ChartKind::Table),
        ChartSpec::new("weapon_counts", "Weapon counts", ChartKind::Table),
        ChartSpec::new("injury_types", "Type of injuries", ChartKind::Bar),
        ChartSpec::new(
            "hostility_by_gender",
            "Participation in Hostilities by Gender",
            ChartKind::GroupedBar,
        ),
        ChartSpec::new("region_counts", "Event Location Region Count", ChartKind::Pie),
        ChartSpec::new("residents_by_region", "Resident count by region", ChartKind::Pie),
        ChartSpec::new("average_age_by_region", "Average age by region", ChartKind::Bar),
        ChartSpec::new(
            "incidents_by_citizenship",
            "Incident count by citizenship",
            ChartKind::Donut,
        ),
        ChartSpec::new("kills_by_gender", "Kill count by gender", ChartKind::Pie),
        ChartSpec::new("districts_for_gender", district_title, ChartKind::Donut),
        ChartSpec::new("events_over_time", "Time-Based Events", ChartKind::Line),
    ]
}

fn collect_warnings(tables: &DerivedTables) -> Vec<EmptyResultWarning> {
    let empty = |name: &str, is_empty: bool| {
        is_empty.then(|| EmptyResultWarning {
            table: name.to_string(),
            reason: "no rows to display".to_string(),
        })
    };

    let mut warnings: Vec<EmptyResultWarning> = [
        empty("citizenship_counts", tables.citizenship_counts.is_empty()),
        empty("region_counts", tables.region_counts.is_empty()),
        empty("weapon_counts", tables.weapon_counts.is_empty()),
        empty("injury_types", tables.injury_types.is_empty()),
        empty("hostility_by_gender", tables.hostility_by_gender.is_empty()),
        empty("residents_by_region", tables.residents_by_region.is_empty()),
        empty("incidents_by_citizenship", tables.incidents_by_citizenship.is_empty()),
        empty("kills_by_gender", tables.kills_by_gender.is_empty()),
        empty("districts_for_gender", tables.districts_for_gender.is_empty()),
        empty("events_over_time", tables.events_over_time.is_empty()),
    ]
    .into_iter()
    .flatten()
    .collect();

    if tables.average_age_by_region.is_empty() {
        warnings.extend(empty("average_age_by_region", true));
    } else if tables.average_age_by_region.iter().all(|g| g.mean.is_none()) {
        warnings.push(EmptyResultWarning {
            table: "average_age_by_region".to_string(),
            reason: "no valid ages in any region".to_string(),
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::EventRecord;

    fn person(gender: &str, hostility: &str) -> EventRecord {
        EventRecord {
            gender: Some(gender.to_string()),
            took_part_in_the_hostilities: Some(hostility.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_gender_options_first_seen() {
        let table = EventTable::new(vec![
            person("Female", "No"),
            person("Male", "Yes"),
            person("Female", "Yes"),
        ]);

        assert_eq!(gender_options(&table), vec!["Female", "Male"]);
    }

    #[test]
    fn test_default_selection_is_first_option() {
        let table = EventTable::new(vec![person("Male", "Yes"), person("Female", "No")]);
        let tables = Pipeline::new().recompute(&table, None).unwrap();

        assert_eq!(tables.selected_gender.as_deref(), Some("Male"));
    }

    #[test]
    fn test_invalid_selection() {
        let table = EventTable::new(vec![person("Male", "Yes")]);
        let result = Pipeline::new().recompute(&table, Some("Female"));

        assert!(matches!(result, Err(PipelineError::InvalidSelection { .. })));
    }

    #[test]
    fn test_empty_table_warns_without_error() {
        let tables = Pipeline::new().recompute(&EventTable::default(), None).unwrap();

        assert_eq!(tables.event_count, 0);
        assert!(tables.selected_gender.is_none());
        assert!(tables.warnings.iter().any(|w| w.table == "events_over_time"));
        assert!(tables.warnings.iter().any(|w| w.table == "average_age_by_region"));
    }

    #[test]
    fn test_all_missing_ages_warns() {
        let table = EventTable::new(vec![EventRecord {
            event_location_region: Some("Israel".to_string()),
            ..Default::default()
        }]);
        let tables = Pipeline::new().recompute(&table, None).unwrap();

        let warning = tables
            .warnings
            .iter()
            .find(|w| w.table == "average_age_by_region")
            .unwrap();
        assert_eq!(warning.reason, "no valid ages in any region");
    }

    #[test]
    fn test_named_tables() {
        let table = EventTable::new(vec![person("Male", "Yes")]);
        let tables = Pipeline::new().recompute(&table, None).unwrap();
        let named = tables.named_tables().unwrap();

        assert!(named.contains_key("kills_by_gender"));
        assert!(named.contains_key("events_over_time"));
        assert!(!named.contains_key("charts"));
        assert!(!named.contains_key("warnings"));
    }

    #[test]
    fn test_manifest_refers_to_tables() {
        let table = EventTable::new(vec![person("Male", "Yes")]);
        let tables = Pipeline::new().recompute(&table, None).unwrap();
        let named = tables.named_tables().unwrap();

        for chart in &tables.charts {
            assert!(named.contains_key(&chart.table), "unknown table {}", chart.table);
        }
        assert_eq!(
            tables.charts.iter().find(|c| c.table == "districts_for_gender").unwrap().title,
            "Kill count based on Male"
        );
    }
}
