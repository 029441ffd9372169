use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path} row {row}: {message}")]
    Parse {
        path: String,
        row: usize,
        message: String,
    },

    #[error("no city given (use --city chicago, \"new york\", or washington)")]
    MissingCity,

    #[error("unknown city \"{input}\" (expected chicago, new york, or washington)")]
    InvalidCity { input: String },

    #[error("invalid month \"{input}\" (expected january through june)")]
    InvalidMonth { input: String },

    #[error("invalid day \"{input}\" (expected monday through sunday)")]
    InvalidDay { input: String },

    #[error("{report} report needs at least one trip ({context} matched no rows)")]
    EmptyDataset {
        report: &'static str,
        context: String,
    },
}

impl AppError {
    pub(crate) fn empty(report: &'static str, context: String) -> Self {
        AppError::EmptyDataset { report, context }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_carries_row_context() {
        let e = AppError::Parse {
            path: "chicago.csv".to_string(),
            row: 12,
            message: "invalid start time \"not-a-date\"".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "chicago.csv row 12: invalid start time \"not-a-date\""
        );
    }

    #[test]
    fn invalid_city_display() {
        let e = AppError::InvalidCity {
            input: "boston".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "unknown city \"boston\" (expected chicago, new york, or washington)"
        );
    }

    #[test]
    fn invalid_month_display() {
        let e = AppError::InvalidMonth {
            input: "july".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "invalid month \"july\" (expected january through june)"
        );
    }

    #[test]
    fn empty_dataset_display() {
        let e = AppError::empty("duration", "city=Chicago, month=January, day=all".to_string());
        assert_eq!(
            e.to_string(),
            "duration report needs at least one trip (city=Chicago, month=January, day=all matched no rows)"
        );
    }
}
