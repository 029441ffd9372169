//! Popular stations and trips

use serde::Serialize;

use crate::core::{Counter, Dataset};
use crate::error::AppError;

use super::CountEntry;

const TOP_N: usize = 5;

/// One row of the (start, end) route frequency table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct RouteCount {
    pub(crate) from: String,
    pub(crate) to: String,
    pub(crate) count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct StationReport {
    pub(crate) popular_start: String,
    pub(crate) top_starts: Vec<CountEntry>,
    pub(crate) popular_end: String,
    pub(crate) top_ends: Vec<CountEntry>,
    pub(crate) popular_trip: (String, String),
    pub(crate) top_trips: Vec<RouteCount>,
}

/// Top-5 tables are sorted descending by count; ties keep first-seen input
/// order, and the popular station/trip follows the same rule.
pub(crate) fn station_report(dataset: &Dataset) -> Result<StationReport, AppError> {
    if dataset.is_empty() {
        return Err(AppError::empty(
            "station",
            format!("city={}", dataset.city.display_name()),
        ));
    }
    let trips = &dataset.trips;

    let starts = Counter::from_iter(trips.iter().map(|t| t.start_station.as_str()));
    let ends = Counter::from_iter(trips.iter().map(|t| t.end_station.as_str()));
    let routes = Counter::from_iter(
        trips
            .iter()
            .map(|t| (t.start_station.as_str(), t.end_station.as_str())),
    );

    let top_starts: Vec<CountEntry> = starts
        .top(TOP_N)
        .into_iter()
        .map(|(name, count)| CountEntry::new(name, count))
        .collect();
    let top_ends: Vec<CountEntry> = ends
        .top(TOP_N)
        .into_iter()
        .map(|(name, count)| CountEntry::new(name, count))
        .collect();
    let top_trips: Vec<RouteCount> = routes
        .top(TOP_N)
        .into_iter()
        .map(|((from, to), count)| RouteCount {
            from: from.to_string(),
            to: to.to_string(),
            count,
        })
        .collect();

    let no_rows = || {
        AppError::empty(
            "station",
            format!("city={}", dataset.city.display_name()),
        )
    };
    let popular_start = starts.mode_first().ok_or_else(no_rows)?.to_string();
    let popular_end = ends.mode_first().ok_or_else(no_rows)?.to_string();
    let popular_trip = routes
        .mode_first()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .ok_or_else(no_rows)?;

    Ok(StationReport {
        popular_start,
        top_starts,
        popular_end,
        top_ends,
        popular_trip,
        top_trips,
    })
}
