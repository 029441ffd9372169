//! Console rendering of reports

use crate::core::{Trip, month_name, weekday_name};
use crate::stats::{CountEntry, DurationReport, StationReport, TimeReport, UserReport};

use super::format::{
    create_styled_table, format_clock_hour, format_count, format_duration, format_mean_duration,
    header_cell, right_cell,
};

pub(crate) fn print_time_report(report: &TimeReport, use_color: bool) {
    println!("\nMost Frequent Times of Travel");
    let mut table = create_styled_table();
    table.set_header(vec![header_cell("Metric", use_color), header_cell("Value", use_color)]);
    if let Some(month) = report.popular_month {
        table.add_row(vec!["Most popular month".to_string(), month.to_string()]);
    }
    if let Some(day) = report.popular_day {
        table.add_row(vec!["Most popular day".to_string(), day.to_string()]);
    }
    table.add_row(vec![
        "Most popular start hour".to_string(),
        format_clock_hour(report.popular_hour),
    ]);
    println!("{table}");
}

fn print_count_table(title: &str, entries: &[CountEntry], use_color: bool) {
    println!("\n{title}");
    let mut table = create_styled_table();
    table.set_header(vec![header_cell("Name", use_color), header_cell("Trips", use_color)]);
    for entry in entries {
        table.add_row(vec![
            comfy_table::Cell::new(&entry.name),
            right_cell(&format_count(entry.count)),
        ]);
    }
    println!("{table}");
}

pub(crate) fn print_station_report(report: &StationReport, use_color: bool) {
    println!("\nMost Popular Stations and Trip");
    println!("Most popular start station: {}", report.popular_start);
    println!("Most popular end station:   {}", report.popular_end);
    println!(
        "Most popular trip:          {} -> {}",
        report.popular_trip.0, report.popular_trip.1
    );

    print_count_table("Top start stations", &report.top_starts, use_color);
    print_count_table("Top end stations", &report.top_ends, use_color);

    println!("\nTop trips");
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("From", use_color),
        header_cell("To", use_color),
        header_cell("Trips", use_color),
    ]);
    for route in &report.top_trips {
        table.add_row(vec![
            comfy_table::Cell::new(&route.from),
            comfy_table::Cell::new(&route.to),
            right_cell(&format_count(route.count)),
        ]);
    }
    println!("{table}");
}

pub(crate) fn print_duration_report(report: &DurationReport, use_color: bool) {
    println!("\nTrip Duration");
    let mut table = create_styled_table();
    table.set_header(vec![header_cell("Metric", use_color), header_cell("Value", use_color)]);
    table.add_row(vec![
        "Total travel time".to_string(),
        format_duration(&report.total),
    ]);
    table.add_row(vec![
        "Average travel time".to_string(),
        format_mean_duration(&report.mean),
    ]);
    table.add_row(vec!["Trips".to_string(), format_count(report.trip_count as u64)]);
    println!("{table}");
}

pub(crate) fn print_user_report(report: &UserReport, use_color: bool) {
    println!("\nUser Stats");
    print_count_table("User types", &report.user_types, use_color);

    match &report.genders {
        Some(genders) => print_count_table("Gender", genders, use_color),
        None => println!("\nGender\n  Data not available for this city."),
    }

    match &report.birth_years {
        Some(years) => {
            println!("\nYear of birth");
            let mut table = create_styled_table();
            table.set_header(vec![
                header_cell("Earliest", use_color),
                header_cell("Most common", use_color),
                header_cell("Most recent", use_color),
            ]);
            table.add_row(vec![
                right_cell(&years.earliest.to_string()),
                right_cell(&years.most_common.to_string()),
                right_cell(&years.most_recent.to_string()),
            ]);
            println!("{table}");
        }
        None => println!("\nYear of birth\n  Data not available for this city."),
    }
}

pub(crate) fn print_raw_page(page: &[Trip], page_number: usize, use_color: bool) {
    println!("\nRaw data, page {page_number}");
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Start Time", use_color),
        header_cell("Month", use_color),
        header_cell("Day", use_color),
        header_cell("Duration (s)", use_color),
        header_cell("Start Station", use_color),
        header_cell("End Station", use_color),
        header_cell("User Type", use_color),
    ]);
    for trip in page {
        table.add_row(vec![
            trip.start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
            month_name(trip.month).to_string(),
            weekday_name(trip.weekday).to_string(),
            format!("{:.0}", trip.duration_secs),
            trip.start_station.clone(),
            trip.end_station.clone(),
            trip.user_type.clone().unwrap_or_else(|| "Not specified".to_string()),
        ]);
    }
    println!("{table}");
}
