//! Core module - filtering, frequency tables, and paging over trip data

mod filter;
mod freq;
mod pager;
mod types;

pub(crate) use filter::apply_filter;
pub(crate) use freq::Counter;
pub(crate) use pager::Pager;
pub(crate) use types::{
    City, Dataset, FilterSpec, Month, Trip, month_name, parse_weekday, weekday_name,
};

#[cfg(test)]
pub(crate) use types::testutil;
