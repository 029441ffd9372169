//! Core data types for the trip analysis pipeline
//!
//! A `Dataset` is built once per run from a city identity and a `FilterSpec`
//! and is read-only afterwards.

use chrono::{NaiveDateTime, Timelike, Weekday};

use crate::error::AppError;

/// Cities with a backing trip dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum City {
    Chicago,
    NewYork,
    Washington,
}

impl City {
    pub(crate) fn parse(input: &str) -> Result<Self, AppError> {
        match input.trim().to_lowercase().as_str() {
            "chicago" => Ok(City::Chicago),
            "new york" | "new-york" | "new_york" | "nyc" => Ok(City::NewYork),
            "washington" => Ok(City::Washington),
            _ => Err(AppError::InvalidCity {
                input: input.to_string(),
            }),
        }
    }

    pub(crate) fn display_name(self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYork => "New York",
            City::Washington => "Washington",
        }
    }
}

/// Months covered by the source datasets (January through June only)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    /// 1-based calendar index (January = 1)
    pub(crate) fn index(self) -> u32 {
        match self {
            Month::January => 1,
            Month::February => 2,
            Month::March => 3,
            Month::April => 4,
            Month::May => 5,
            Month::June => 6,
        }
    }

    pub(crate) fn name(self) -> &'static str {
        MONTH_NAMES[self.index() as usize - 1]
    }

    pub(crate) fn parse(input: &str) -> Result<Self, AppError> {
        match input.trim().to_lowercase().as_str() {
            "january" => Ok(Month::January),
            "february" => Ok(Month::February),
            "march" => Ok(Month::March),
            "april" => Ok(Month::April),
            "may" => Ok(Month::May),
            "june" => Ok(Month::June),
            _ => Err(AppError::InvalidMonth {
                input: input.to_string(),
            }),
        }
    }
}

/// Month names for rendering derived month values (full calendar, since the
/// derived field is 1-12 even though only 1-6 occur in the source data)
pub(crate) const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub(crate) fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month as usize - 1)
        .copied()
        .unwrap_or("Unknown")
}

pub(crate) fn parse_weekday(input: &str) -> Result<Weekday, AppError> {
    match input.trim().to_lowercase().as_str() {
        "monday" => Ok(Weekday::Mon),
        "tuesday" => Ok(Weekday::Tue),
        "wednesday" => Ok(Weekday::Wed),
        "thursday" => Ok(Weekday::Thu),
        "friday" => Ok(Weekday::Fri),
        "saturday" => Ok(Weekday::Sat),
        "sunday" => Ok(Weekday::Sun),
        _ => Err(AppError::InvalidDay {
            input: input.to_string(),
        }),
    }
}

pub(crate) fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// One bike-share ride with its load-time derived calendar fields
#[derive(Debug, Clone)]
pub(crate) struct Trip {
    pub(crate) start_time: NaiveDateTime,
    /// Derived: calendar month of `start_time`, 1-based
    pub(crate) month: u32,
    /// Derived: weekday of `start_time`
    pub(crate) weekday: Weekday,
    pub(crate) duration_secs: f64,
    pub(crate) start_station: String,
    pub(crate) end_station: String,
    pub(crate) user_type: Option<String>,
    pub(crate) gender: Option<String>,
    pub(crate) birth_year: Option<i32>,
}

impl Trip {
    pub(crate) fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }
}

/// Optional month/day restrictions applied before analysis.
/// `None` means "all" and imposes no restriction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct FilterSpec {
    pub(crate) month: Option<Month>,
    pub(crate) day: Option<Weekday>,
}

impl FilterSpec {
    pub(crate) fn new(month: Option<Month>, day: Option<Weekday>) -> Self {
        Self { month, day }
    }

    pub(crate) fn matches(&self, trip: &Trip) -> bool {
        if let Some(month) = self.month
            && trip.month != month.index()
        {
            return false;
        }
        if let Some(day) = self.day
            && trip.weekday != day
        {
            return false;
        }
        true
    }

    /// Human-readable form for error context and report headers
    pub(crate) fn describe(&self) -> String {
        let month = self.month.map_or("all", Month::name);
        let day = self.day.map_or("all", weekday_name);
        format!("month={month}, day={day}")
    }
}

/// Filtered trips for one city, in original row order
#[derive(Debug)]
pub(crate) struct Dataset {
    pub(crate) city: City,
    pub(crate) trips: Vec<Trip>,
}

impl Dataset {
    pub(crate) fn len(&self) -> usize {
        self.trips.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}
