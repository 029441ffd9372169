//! Total and mean trip duration

use serde::Serialize;

use crate::core::Dataset;
use crate::error::AppError;

/// Integer floor decomposition of a second count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct DurationParts {
    pub(crate) days: i64,
    pub(crate) hours: i64,
    pub(crate) minutes: i64,
    pub(crate) seconds: i64,
}

impl DurationParts {
    pub(crate) fn from_secs(total: i64) -> Self {
        DurationParts {
            days: total / 86_400,
            hours: total % 86_400 / 3_600,
            minutes: total % 3_600 / 60,
            seconds: total % 60,
        }
    }

    pub(crate) fn total_secs(&self) -> i64 {
        self.days * 86_400 + self.hours * 3_600 + self.minutes * 60 + self.seconds
    }
}

/// Durations are summed as floats first and truncated at the aggregation
/// boundary, then decomposed. The mean is decomposed the same way but only
/// its minutes and seconds are surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct DurationReport {
    pub(crate) trip_count: usize,
    pub(crate) total: DurationParts,
    pub(crate) mean: DurationParts,
}

pub(crate) fn duration_report(dataset: &Dataset) -> Result<DurationReport, AppError> {
    if dataset.is_empty() {
        return Err(AppError::empty(
            "duration",
            format!("city={}", dataset.city.display_name()),
        ));
    }

    let sum: f64 = dataset.trips.iter().map(|t| t.duration_secs).sum();
    let count = dataset.len();
    let mean = sum / count as f64;

    Ok(DurationReport {
        trip_count: count,
        total: DurationParts::from_secs(sum as i64),
        mean: DurationParts::from_secs(mean as i64),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testutil::trip;
    use crate::core::{City, Trip};

    fn dataset(durations: &[f64]) -> Dataset {
        let trips: Vec<Trip> = durations
            .iter()
            .map(|&d| trip("2017-05-01 09:00:00", d, "A", "B"))
            .collect();
        Dataset {
            city: City::Chicago,
            trips,
        }
    }

    #[test]
    fn decomposes_all_components() {
        // 1d 2h 3m 4s
        let parts = DurationParts::from_secs(93_784);
        assert_eq!(
            parts,
            DurationParts {
                days: 1,
                hours: 2,
                minutes: 3,
                seconds: 4
            }
        );
        assert_eq!(parts.total_secs(), 93_784);
    }

    #[test]
    fn total_decomposition_identity_holds() {
        let durations = [600.0, 612.5, 901.1, 86_400.0, 59.9];
        let report = duration_report(&dataset(&durations)).unwrap();
        let sum: f64 = durations.iter().sum();
        assert_eq!(report.total.total_secs(), sum as i64);
    }

    #[test]
    fn sum_first_then_truncate() {
        // fractional parts add up to a whole second: 0.5 + 0.5
        let report = duration_report(&dataset(&[10.5, 10.5])).unwrap();
        assert_eq!(report.total.total_secs(), 21);
    }

    #[test]
    fn mean_reconstructs_within_one_second() {
        let durations = [305.0, 610.7, 425.3, 99.9];
        let report = duration_report(&dataset(&durations)).unwrap();
        let true_mean: f64 = durations.iter().sum::<f64>() / durations.len() as f64;
        let reconstructed = (report.mean.minutes * 60 + report.mean.seconds) as f64;
        assert!((reconstructed - true_mean).abs() <= 1.0);
    }

    #[test]
    fn counts_trips() {
        let report = duration_report(&dataset(&[1.0, 2.0, 3.0])).unwrap();
        assert_eq!(report.trip_count, 3);
    }

    #[test]
    fn empty_dataset_is_an_error_not_a_division_by_zero() {
        let err = duration_report(&dataset(&[])).unwrap_err();
        assert!(matches!(err, AppError::EmptyDataset { .. }));
        assert!(err.to_string().contains("duration report"));
    }

    #[test]
    fn report_is_pure() {
        let ds = dataset(&[12.0, 34.0]);
        assert_eq!(duration_report(&ds).unwrap(), duration_report(&ds).unwrap());
    }
}
