//! Per-user dashboard session.
//!
//! Holds the current upload (raw table, normalized table, derived tables)
//! for one user. An upload or selection change builds the new state fully
//! before swapping it in; on error the previous state is left untouched.

use super::dashboard::{DerivedTables, Pipeline};
use crate::parser::{normalize, read_raw_table, EventTable, RawTable};
use crate::utils::error::PipelineError;
use log::info;
use std::io::Read;

#[derive(Debug, Clone)]
struct SessionState {
    raw: RawTable,
    events: EventTable,
    derived: DerivedTables,
}

/// One user's dashboard state
#[derive(Debug, Default)]
pub struct DashboardSession {
    pipeline: Pipeline,
    state: Option<SessionState>,
}

impl DashboardSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a new CSV and recompute everything
    ///
    /// **Public** - replaces the previous upload wholesale
    ///
    /// The gender selection resets to the first gender of the new data.
    pub fn upload<R: Read>(&mut self, reader: R) -> Result<&DerivedTables, PipelineError> {
        let raw = read_raw_table(reader)?;
        self.upload_raw(raw)
    }

    /// Same as `upload`, for a table that has already been read
    pub fn upload_raw(&mut self, raw: RawTable) -> Result<&DerivedTables, PipelineError> {
        let events = normalize(&raw)?;
        let derived = self.pipeline.recompute(&events, None)?;

        info!("Upload accepted: {} events", events.len());

        let state = self.state.insert(SessionState { raw, events, derived });
        Ok(&state.derived)
    }

    /// Change the gender selection and recompute
    ///
    /// Returns None when nothing has been uploaded yet.
    pub fn select_gender(&mut self, gender: &str) -> Result<Option<&DerivedTables>, PipelineError> {
        let Some(state) = self.state.as_mut() else {
            return Ok(None);
        };

        state.derived = self.pipeline.recompute(&state.events, Some(gender))?;
        Ok(Some(&state.derived))
    }

    pub fn derived(&self) -> Option<&DerivedTables> {
        self.state.as_ref().map(|s| &s.derived)
    }

    /// The upload as read, before normalization
    pub fn raw(&self) -> Option<&RawTable> {
        self.state.as_ref().map(|s| &s.raw)
    }

    pub fn events(&self) -> Option<&EventTable> {
        self.state.as_ref().map(|s| &s.events)
    }
}
