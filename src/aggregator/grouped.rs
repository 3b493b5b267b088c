//! Grouped aggregations: row counts, means and distinct counts per group.
//!
//! Groups are keyed by one categorical column. Rows with a missing key are
//! dropped, and groups are emitted in the order their key was first seen.

use super::frequency::{count_values, CategoryCount};
use crate::parser::schema::{Category, EventRecord, EventTable};
use log::debug;
use serde::{Deserialize, Serialize};
use indexmap::IndexMap;
use std::collections::HashSet;

/// Mean of a numeric column within one group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMean {
    pub key: String,

    /// None when the group has no valid values
    pub mean: Option<f64>,
}

/// Distinct-value count of a column within one group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDistinct {
    pub key: String,
    pub distinct: usize,
}

/// One (outer, inner) pair of a two-level grouping with its row count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedCount {
    pub outer: String,
    pub inner: String,
    pub count: usize,
}

/// Number of rows per group
///
/// **Public** - incidents by citizenship
pub fn group_size(table: &EventTable, key: Category) -> Vec<CategoryCount> {
    let mut groups: IndexMap<String, usize> = IndexMap::new();

    for event in table.iter() {
        if let Some(group) = key.value_of(event) {
            *groups.entry(group.to_string()).or_default() += 1;
        }
    }

    groups
        .into_iter()
        .map(|(key, count)| CategoryCount { key, count })
        .collect()
}

/// Mean of a numeric field per group, ignoring missing values
///
/// **Public** - average age by region
pub fn group_mean<F>(table: &EventTable, key: Category, value: F) -> Vec<GroupMean>
where
    F: Fn(&EventRecord) -> Option<f64>,
{
    // (running mean, valid count); no running sum, so large values stay finite
    let mut groups: IndexMap<String, (f64, usize)> = IndexMap::new();

    for event in table.iter() {
        if let Some(group) = key.value_of(event) {
            let (mean, n) = groups.entry(group.to_string()).or_default();
            if let Some(v) = value(event) {
                *n += 1;
                *mean += (v - *mean) / *n as f64;
            }
        }
    }

    groups
        .into_iter()
        .map(|(key, (mean, n))| GroupMean {
            key,
            mean: if n > 0 { Some(mean) } else { None },
        })
        .collect()
}

/// Mean age per group
pub fn group_mean_age(table: &EventTable, key: Category) -> Vec<GroupMean> {
    group_mean(table, key, |event| event.age)
}

/// Number of distinct non-missing values of `column` per group
///
/// **Public** - residents (place of residence) by region
pub fn group_distinct(table: &EventTable, key: Category, column: Category) -> Vec<GroupDistinct> {
    let mut groups: IndexMap<String, HashSet<String>> = IndexMap::new();

    for event in table.iter() {
        if let Some(group) = key.value_of(event) {
            let seen = groups.entry(group.to_string()).or_default();
            if let Some(value) = column.value_of(event) {
                seen.insert(value.to_string());
            }
        }
    }

    groups
        .into_iter()
        .map(|(key, seen)| GroupDistinct {
            key,
            distinct: seen.len(),
        })
        .collect()
}

/// Value counts of `inner` within each group of `outer`
///
/// **Public** - hostility and kills by gender
///
/// Rows are grouped by outer value (first-seen order); within a group,
/// inner values are ordered by descending count. Rows missing either value
/// are skipped.
pub fn group_value_counts(table: &EventTable, outer: Category, inner: Category) -> Vec<GroupedCount> {
    let rows: Vec<&EventRecord> = table.iter().collect();
    grouped_counts(&rows, outer, inner)
}

/// District breakdown for one selected gender
///
/// **Public** - the only derivation driven by the gender selection
pub fn district_by_gender(table: &EventTable, gender: &str) -> Vec<GroupedCount> {
    let rows: Vec<&EventRecord> = table
        .iter()
        .filter(|event| event.gender.as_deref() == Some(gender))
        .collect();

    debug!("{} events match gender {:?}", rows.len(), gender);

    grouped_counts(&rows, Category::Gender, Category::EventLocationDistrict)
}

fn grouped_counts(rows: &[&EventRecord], outer: Category, inner: Category) -> Vec<GroupedCount> {
    let mut groups: IndexMap<String, Vec<&EventRecord>> = IndexMap::new();

    for &event in rows {
        if let Some(group) = outer.value_of(event) {
            groups.entry(group.to_string()).or_default().push(event);
        }
    }

    groups
        .into_iter()
        .flat_map(|(outer_key, members)| {
            count_values(members.iter().map(|event| inner.value_of(event)))
                .into_iter()
                .map(move |c| GroupedCount {
                    outer: outer_key.clone(),
                    inner: c.key,
                    count: c.count,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(region: Option<&str>, age: Option<f64>, residence: Option<&str>) -> EventRecord {
        EventRecord {
            event_location_region: region.map(String::from),
            age,
            place_of_residence: residence.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_group_mean_age() {
        let table = EventTable::new(vec![
            event(Some("Gaza Strip"), Some(20.0), None),
            event(Some("West Bank"), None, None),
            event(Some("Gaza Strip"), Some(30.0), None),
            event(Some("Gaza Strip"), None, None),
        ]);

        let means = group_mean_age(&table, Category::EventLocationRegion);

        assert_eq!(
            means,
            vec![
                GroupMean { key: "Gaza Strip".to_string(), mean: Some(25.0) },
                GroupMean { key: "West Bank".to_string(), mean: None },
            ]
        );
    }

    #[test]
    fn test_group_mean_large_values_stay_finite() {
        let table = EventTable::new(vec![
            event(Some("Israel"), Some(1e308), None),
            event(Some("Israel"), Some(1e308), None),
        ]);

        let means = group_mean_age(&table, Category::EventLocationRegion);

        assert_eq!(means[0].mean, Some(1e308));
    }

    #[test]
    fn test_group_distinct() {
        let table = EventTable::new(vec![
            event(Some("West Bank"), None, Some("Jenin")),
            event(Some("West Bank"), None, Some("Jenin")),
            event(Some("West Bank"), None, Some("Nablus")),
            event(Some("Israel"), None, None),
            event(None, None, Some("Haifa")),
        ]);

        let distinct = group_distinct(&table, Category::EventLocationRegion, Category::PlaceOfResidence);

        assert_eq!(distinct.len(), 2);
        assert_eq!(distinct[0].distinct, 2);
        assert_eq!(distinct[1].key, "Israel");
        assert_eq!(distinct[1].distinct, 0);
    }

    #[test]
    fn test_group_size_first_seen() {
        let table = EventTable::new(
            ["Israeli", "Palestinian", "Palestinian", "Jordanian"]
                .iter()
                .map(|c| EventRecord {
                    citizenship: Some(c.to_string()),
                    ..Default::default()
                })
                .collect(),
        );

        let sizes = group_size(&table, Category::Citizenship);
        let keys: Vec<&str> = sizes.iter().map(|s| s.key.as_str()).collect();

        assert_eq!(keys, vec!["Israeli", "Palestinian", "Jordanian"]);
        assert_eq!(sizes[1].count, 2);
    }

    #[test]
    fn test_district_by_gender_filters() {
        let table = EventTable::new(vec![
            EventRecord {
                gender: Some("Male".to_string()),
                event_location_district: Some("Gaza".to_string()),
                ..Default::default()
            },
            EventRecord {
                gender: Some("Female".to_string()),
                event_location_district: Some("Hebron".to_string()),
                ..Default::default()
            },
            EventRecord {
                gender: Some("Male".to_string()),
                event_location_district: Some("Gaza".to_string()),
                ..Default::default()
            },
        ]);

        let rows = district_by_gender(&table, "Male");
        assert_eq!(
            rows,
            vec![GroupedCount {
                outer: "Male".to_string(),
                inner: "Gaza".to_string(),
                count: 2
            }]
        );
        assert!(district_by_gender(&table, "Other").is_empty());
    }
}
