//! Row filtering
//!
//! Month and day restrictions compose with AND; original row order is
//! preserved and an empty result is valid.

use super::types::{FilterSpec, Trip};

/// Keep only trips matching `spec`. The identity when both fields are `None`.
pub(crate) fn apply_filter(trips: Vec<Trip>, spec: &FilterSpec) -> Vec<Trip> {
    if spec.month.is_none() && spec.day.is_none() {
        return trips;
    }
    trips.into_iter().filter(|t| spec.matches(t)).collect()
}
