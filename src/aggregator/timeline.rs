//! Time-series aggregation of events per calendar month.

use crate::parser::schema::EventTable;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of events in one (year, month)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelinePoint {
    /// "<month>-<year>", e.g. "March-2021"
    pub label: String,
    pub year: i32,
    pub month: String,

    /// 1 = January
    pub month_index: u32,
    pub count: usize,
}

/// Count events per (year, month), in chronological order
///
/// **Public** - line chart of events over time
///
/// Ordering is by (year, month index), never by month name.
/// Events without a date are not counted.
pub fn events_over_time(table: &EventTable) -> Vec<TimelinePoint> {
    let mut buckets: BTreeMap<(i32, u32), (String, usize)> = BTreeMap::new();

    for event in table.iter() {
        if let (Some(year), Some(month_index), Some(month)) =
            (event.year, event.month_index(), event.month.as_deref())
        {
            buckets
                .entry((year, month_index))
                .or_insert_with(|| (month.to_string(), 0))
                .1 += 1;
        }
    }

    debug!("Timeline spans {} months", buckets.len());

    buckets
        .into_iter()
        .map(|((year, month_index), (month, count))| TimelinePoint {
            label: format!("{}-{}", month, year),
            year,
            month,
            month_index,
            count,
        })
        .collect()
}
