//! JSON rendering for `--json`

use serde::Serialize;

/// Pretty JSON for a single report
pub(super) fn report_json<T: Serialize>(report: &T) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "null".to_string())
}

pub(crate) fn print_json<T: Serialize>(report: &T) {
    println!("{}", report_json(report));
}
