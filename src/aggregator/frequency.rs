//! Per-column frequency aggregations (value counts).
//!
//! Counts are ordered by descending count. Equal counts keep the order in
//! which their values were first seen, so output is deterministic.

use crate::parser::schema::{Category, EventTable};
use crate::utils::config::{HOSTILITY_NO, HOSTILITY_YES};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

/// Number of rows carrying one category value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub key: String,
    pub count: usize,
}

impl CategoryCount {
    pub fn new(key: impl Into<String>, count: usize) -> Self {
        Self { key: key.into(), count }
    }
}

/// Participation partition of the event table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HostilityCounts {
    /// Rows with `took_part_in_the_hostilities == "Yes"`
    pub yes: usize,

    /// Rows with `took_part_in_the_hostilities == "No"`
    pub no: usize,
}

/// Count rows per distinct value of one column
///
/// **Public** - used for citizenship, region, ammunition and injury charts
///
/// Missing values are skipped. An empty table gives an empty result.
pub fn value_counts(table: &EventTable, column: Category) -> Vec<CategoryCount> {
    let counts = count_values(table.iter().map(|event| column.value_of(event)));

    debug!(
        "{}: {} distinct values",
        column.column_name(),
        counts.len()
    );

    counts
}

/// Count an arbitrary sequence of optional values
///
/// **Public (crate)** - shared by the two-level groupings
pub(crate) fn count_values<'a, I>(values: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut groups: IndexMap<String, usize> = IndexMap::new();

    for value in values.into_iter().flatten() {
        *groups.entry(value.to_string()).or_default() += 1;
    }

    let mut counts: Vec<CategoryCount> = groups
        .into_iter()
        .map(|(key, count)| CategoryCount { key, count })
        .collect();

    // Stable sort keeps first-seen order among ties
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Count rows that did and did not take part in hostilities
///
/// **Public** - any other value, including missing, is in neither count
pub fn hostility_counts(table: &EventTable) -> HostilityCounts {
    table
        .iter()
        .fold(HostilityCounts::default(), |mut acc, event| {
            match event.took_part_in_the_hostilities.as_deref() {
                Some(HOSTILITY_YES) => acc.yes += 1,
                Some(HOSTILITY_NO) => acc.no += 1,
                _ => {}
            }
            acc
        })
}

/// Sum of counts in a frequency table
pub fn total_count(counts: &[CategoryCount]) -> usize {
    counts.iter().map(|c| c.count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::EventRecord;

    fn hostility_table(values: &[Option<&str>]) -> EventTable {
        EventTable::new(
            values
                .iter()
                .map(|v| EventRecord {
                    took_part_in_the_hostilities: v.map(String::from),
                    ..Default::default()
                })
                .collect(),
        )
    }

    #[test]
    fn test_value_counts_order() {
        let table = hostility_table(&[Some("Yes"), Some("No"), Some("Yes"), Some("Yes")]);
        let counts = value_counts(&table, Category::TookPartInTheHostilities);

        assert_eq!(
            counts,
            vec![CategoryCount::new("Yes", 3), CategoryCount::new("No", 1)]
        );
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let counts = count_values(vec![Some("b"), Some("a"), Some("a"), Some("b"), Some("c")]);
        let keys: Vec<&str> = counts.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_missing_values_skipped() {
        let table = hostility_table(&[Some("Yes"), None, Some("Unknown")]);
        let counts = value_counts(&table, Category::TookPartInTheHostilities);
        assert_eq!(total_count(&counts), 2);
    }

    #[test]
    fn test_value_counts_empty() {
        let counts = value_counts(&EventTable::default(), Category::Citizenship);
        assert!(counts.is_empty());
    }

    #[test]
    fn test_hostility_partition() {
        let table = hostility_table(&[Some("Yes"), Some("No"), None, Some("Unknown"), Some("Yes")]);
        let counts = hostility_counts(&table);

        assert_eq!(counts, HostilityCounts { yes: 2, no: 1 });
        assert!(counts.yes + counts.no <= table.len());
    }
}
