//! Conflict Dashboard
//!
//! Aggregation pipeline for conflict-event CSV datasets: loads one upload,
//! normalizes it into a typed event table and derives the summary tables
//! (value counts, grouped statistics, composite-key counts, time series)
//! that feed each dashboard chart.
//!
//! ## Getting Started
//!
//! ```bash
//! conflict-dash report --input events.csv --output report.json --summary
//! ```
//!
//! As a library:
//!
//! ```ignore
//! let mut session = DashboardSession::new();
//! let tables = session.upload(std::fs::File::open("events.csv")?)?;
//! println!("{} events", tables.event_count);
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod utils;

pub use pipeline::{DashboardSession, DerivedTables, Pipeline};
