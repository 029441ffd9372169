//! Most frequent times of travel

use chrono::Weekday;
use serde::Serialize;

use crate::core::{Counter, Dataset, FilterSpec, month_name, weekday_name};
use crate::error::AppError;

const WEEKDAY_ORDER: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Popular month/day appear only when the corresponding filter is off;
/// filtering to a single month and then reporting its mode would be noise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct TimeReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) popular_month: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) popular_day: Option<&'static str>,
    /// Hour of day, 0-23
    pub(crate) popular_hour: u32,
}

pub(crate) fn time_report(dataset: &Dataset, spec: &FilterSpec) -> Result<TimeReport, AppError> {
    if dataset.is_empty() {
        return Err(AppError::empty(
            "time",
            format!("city={}, {}", dataset.city.display_name(), spec.describe()),
        ));
    }
    let trips = &dataset.trips;

    // Mode ties break to the lowest month / earliest weekday / lowest hour.
    let popular_month = if spec.month.is_none() {
        let months = Counter::from_iter(trips.iter().map(|t| t.month));
        months.mode_min().copied().map(month_name)
    } else {
        None
    };

    let popular_day = if spec.day.is_none() {
        let days = Counter::from_iter(trips.iter().map(|t| t.weekday.num_days_from_monday()));
        days.mode_min()
            .map(|&i| weekday_name(WEEKDAY_ORDER[i as usize]))
    } else {
        None
    };

    let hours = Counter::from_iter(trips.iter().map(|t| t.start_hour()));
    let popular_hour = hours.mode_min().copied().ok_or_else(|| {
        AppError::empty(
            "time",
            format!("city={}, {}", dataset.city.display_name(), spec.describe()),
        )
    })?;

    Ok(TimeReport {
        popular_month,
        popular_day,
        popular_hour,
    })
}
