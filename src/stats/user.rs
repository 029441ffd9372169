//! User demographics

use serde::Serialize;

use crate::core::{Counter, Dataset};
use crate::data::city_info;
use crate::error::AppError;

use super::CountEntry;

const NOT_SPECIFIED: &str = "Not specified";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct BirthYearStats {
    pub(crate) earliest: i32,
    pub(crate) most_common: i32,
    pub(crate) most_recent: i32,
}

/// Gender and birth-year sections are `None` for cities whose dataset does
/// not carry them (Washington); user types are always present. Missing
/// values land in a "Not specified" bucket instead of being dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct UserReport {
    pub(crate) user_types: Vec<CountEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) genders: Option<Vec<CountEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) birth_years: Option<BirthYearStats>,
}

pub(crate) fn user_report(dataset: &Dataset) -> Result<UserReport, AppError> {
    if dataset.is_empty() {
        return Err(AppError::empty(
            "user",
            format!("city={}", dataset.city.display_name()),
        ));
    }
    let trips = &dataset.trips;

    let user_types = Counter::from_iter(
        trips
            .iter()
            .map(|t| t.user_type.as_deref().unwrap_or(NOT_SPECIFIED)),
    )
    .sorted()
    .into_iter()
    .map(|(name, count)| CountEntry::new(name, count))
    .collect();

    if !city_info(dataset.city).has_demographics {
        return Ok(UserReport {
            user_types,
            genders: None,
            birth_years: None,
        });
    }

    let genders = Counter::from_iter(
        trips
            .iter()
            .map(|t| t.gender.as_deref().unwrap_or(NOT_SPECIFIED)),
    )
    .sorted()
    .into_iter()
    .map(|(name, count)| CountEntry::new(name, count))
    .collect();

    let years = Counter::from_iter(trips.iter().filter_map(|t| t.birth_year));
    // a demographic city with no birth-year values at all reports the
    // section unavailable rather than inventing numbers
    let birth_years = years.mode_min().copied().map(|most_common| {
        let mut years = trips.iter().filter_map(|t| t.birth_year);
        let first = years.next().unwrap_or(most_common);
        let (earliest, most_recent) =
            years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y)));
        BirthYearStats {
            earliest,
            most_common,
            most_recent,
        }
    });

    Ok(UserReport {
        user_types,
        genders: Some(genders),
        birth_years,
    })
}
