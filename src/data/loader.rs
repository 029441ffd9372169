//! CSV trip loading
//!
//! Reads a city's CSV into typed trips, parses start timestamps, derives the
//! calendar fields, and hands the rows to the filter. Any malformed row
//! aborts the load with file and row context.

use std::path::Path;

use chrono::{Datelike, NaiveDateTime};
use serde::Deserialize;

use crate::core::{City, Dataset, FilterSpec, Trip, apply_filter};
use crate::data::registry::city_info;
use crate::error::AppError;

const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One CSV row as shipped in the source datasets. Washington has no Gender
/// or Birth Year columns, hence the defaults; extra columns (End Time, the
/// unnamed index) are ignored.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type")]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

/// Load a city's trips, filtered by `spec`, in original row order.
pub(crate) fn load_city(
    city: City,
    spec: &FilterSpec,
    data_dir: &Path,
) -> Result<Dataset, AppError> {
    let info = city_info(city);
    let path = data_dir.join(info.file);
    let file = std::fs::File::open(&path).map_err(|source| AppError::Io {
        path: path.clone(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let mut trips = Vec::new();
    for (idx, result) in reader.deserialize::<RawTrip>().enumerate() {
        // 1-based row number counting the header line
        let row = idx + 2;
        let raw = result.map_err(|e| AppError::Parse {
            path: info.file.to_string(),
            row,
            message: e.to_string(),
        })?;
        trips.push(to_trip(raw, info.file, row)?);
    }

    Ok(Dataset {
        city,
        trips: apply_filter(trips, spec),
    })
}

fn to_trip(raw: RawTrip, file: &str, row: usize) -> Result<Trip, AppError> {
    let start_time =
        NaiveDateTime::parse_from_str(&raw.start_time, START_TIME_FORMAT).map_err(|_| {
            AppError::Parse {
                path: file.to_string(),
                row,
                message: format!(
                    "invalid start time \"{}\" (expected YYYY-MM-DD HH:MM:SS)",
                    raw.start_time
                ),
            }
        })?;

    if !raw.trip_duration.is_finite() || raw.trip_duration < 0.0 {
        return Err(AppError::Parse {
            path: file.to_string(),
            row,
            message: format!("invalid trip duration {}", raw.trip_duration),
        });
    }

    Ok(Trip {
        start_time,
        month: start_time.month(),
        weekday: start_time.weekday(),
        duration_secs: raw.trip_duration,
        start_station: raw.start_station,
        end_station: raw.end_station,
        user_type: raw.user_type,
        gender: raw.gender,
        birth_year: raw.birth_year.map(|y| y as i32),
    })
}
