mod format;
mod json;
mod table;

pub(crate) use json::print_json;
pub(crate) use table::{
    print_duration_report, print_raw_page, print_station_report, print_time_report,
    print_user_report,
};
