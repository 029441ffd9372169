//! Stats module - the descriptive report functions
//!
//! Each report is a pure function over a filtered dataset: same rows in,
//! identical report out. All of them fail with an empty-dataset error on
//! zero rows instead of producing nonsense, and callers run them
//! independently so one failure never blocks the others.

mod duration;
mod station;
mod time;
mod user;

use serde::Serialize;

pub(crate) use duration::{DurationParts, DurationReport, duration_report};
pub(crate) use station::{RouteCount, StationReport, station_report};
pub(crate) use time::{TimeReport, time_report};
pub(crate) use user::{BirthYearStats, UserReport, user_report};

/// One row of a frequency table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct CountEntry {
    pub(crate) name: String,
    pub(crate) count: u64,
}

impl CountEntry {
    pub(crate) fn new(name: &str, count: u64) -> Self {
        CountEntry {
            name: name.to_string(),
            count,
        }
    }
}
