//! Pipeline orchestration and per-user session state.

pub mod dashboard;
pub mod session;

pub use dashboard::{gender_options, ChartKind, ChartSpec, DerivedTables, EmptyResultWarning, Pipeline};
pub use session::DashboardSession;
