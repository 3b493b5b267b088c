//! Aggregation of event records into derived summary tables.
//!
//! This module transforms the normalized event table into:
//! - Frequency tables (value counts per column)
//! - Grouped statistics (count, mean, distinct count)
//! - Composite-key counts for single-label charts
//! - A chronological time series

pub mod composite;
pub mod frequency;
pub mod grouped;
pub mod timeline;

// Re-export main types and functions
pub use composite::{composite_label, label_rows, split_label, CompositeCount};
pub use frequency::{hostility_counts, total_count, value_counts, CategoryCount, HostilityCounts};
pub use grouped::{
    district_by_gender, group_distinct, group_mean, group_mean_age, group_size,
    group_value_counts, GroupDistinct, GroupMean, GroupedCount,
};
pub use timeline::{events_over_time, TimelinePoint};
