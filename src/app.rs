//! Command handlers and the interactive shell
//!
//! Reports are computed independently: when the whole suite runs, one
//! failing report is printed as an error and the rest still appear.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::core::{
    City, Dataset, FilterSpec, Month, Pager, Trip, month_name, parse_weekday, weekday_name,
};
use crate::data::load_city;
use crate::error::AppError;
use crate::output::{
    print_duration_report, print_json, print_raw_page, print_station_report, print_time_report,
    print_user_report,
};
use crate::stats::{duration_report, station_report, time_report, user_report};

pub(crate) fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    let data_dir = resolve_data_dir(cli, config);
    let use_color = cli.use_color();

    if matches!(cli.command, Some(Commands::Interactive)) {
        return run_interactive(&data_dir, use_color);
    }

    let city = match cli.city.as_deref() {
        Some(raw) => City::parse(raw)?,
        None => return Err(AppError::MissingCity),
    };
    let month = cli.month.as_deref().map(Month::parse).transpose()?;
    let day = cli.day.as_deref().map(parse_weekday).transpose()?;
    let spec = FilterSpec::new(month, day);

    let dataset = load_city(city, &spec, &data_dir)?;

    match &cli.command {
        Some(Commands::Time) => {
            let report = time_report(&dataset, &spec)?;
            if cli.json {
                print_json(&report);
            } else {
                print_time_report(&report, use_color);
            }
        }
        Some(Commands::Stations) => {
            let report = station_report(&dataset)?;
            if cli.json {
                print_json(&report);
            } else {
                print_station_report(&report, use_color);
            }
        }
        Some(Commands::Durations) => {
            let report = duration_report(&dataset)?;
            if cli.json {
                print_json(&report);
            } else {
                print_duration_report(&report, use_color);
            }
        }
        Some(Commands::Users) => {
            let report = user_report(&dataset)?;
            if cli.json {
                print_json(&report);
            } else {
                print_user_report(&report, use_color);
            }
        }
        Some(Commands::Raw { pages }) => run_raw(&dataset, *pages, cli.json, use_color),
        None => run_all(&dataset, &spec, cli.json, use_color),
        Some(Commands::Interactive) => unreachable!(), // handled above
    }

    Ok(())
}

fn resolve_data_dir(cli: &Cli, config: &Config) -> PathBuf {
    cli.data_dir
        .clone()
        .or_else(|| std::env::var_os("BIKESTATS_DATA_DIR").map(PathBuf::from))
        .or_else(|| config.data_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Run the full report suite. Each report stands alone: failures go to
/// stderr (or an "error" field in JSON) without stopping the rest.
fn run_all(dataset: &Dataset, spec: &FilterSpec, json: bool, use_color: bool) {
    let time = time_report(dataset, spec);
    let stations = station_report(dataset);
    let durations = duration_report(dataset);
    let users = user_report(dataset);

    if json {
        let mut out = serde_json::Map::new();
        out.insert("time".to_string(), report_value(time));
        out.insert("stations".to_string(), report_value(stations));
        out.insert("durations".to_string(), report_value(durations));
        out.insert("users".to_string(), report_value(users));
        print_json(&serde_json::Value::Object(out));
        return;
    }

    match time {
        Ok(report) => print_time_report(&report, use_color),
        Err(e) => eprintln!("{e}"),
    }
    match stations {
        Ok(report) => print_station_report(&report, use_color),
        Err(e) => eprintln!("{e}"),
    }
    match durations {
        Ok(report) => print_duration_report(&report, use_color),
        Err(e) => eprintln!("{e}"),
    }
    match users {
        Ok(report) => print_user_report(&report, use_color),
        Err(e) => eprintln!("{e}"),
    }
}

fn report_value<T: Serialize>(result: Result<T, AppError>) -> serde_json::Value {
    match result {
        Ok(report) => serde_json::to_value(&report).unwrap_or(serde_json::Value::Null),
        Err(e) => serde_json::json!({ "error": e.to_string() }),
    }
}

/// Row shape for raw-data JSON output
#[derive(Serialize)]
struct RawRow<'a> {
    start_time: String,
    month: &'static str,
    day: &'static str,
    duration_secs: f64,
    start_station: &'a str,
    end_station: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_type: Option<&'a str>,
}

impl<'a> RawRow<'a> {
    fn from_trip(trip: &'a Trip) -> Self {
        RawRow {
            start_time: trip.start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
            month: month_name(trip.month),
            day: weekday_name(trip.weekday),
            duration_secs: trip.duration_secs,
            start_station: &trip.start_station,
            end_station: &trip.end_station,
            user_type: trip.user_type.as_deref(),
        }
    }
}

fn run_raw(dataset: &Dataset, pages: Option<usize>, json: bool, use_color: bool) {
    let limit = pages.unwrap_or(usize::MAX);
    let mut pager = Pager::new(&dataset.trips);

    if json {
        let mut out: Vec<Vec<RawRow<'_>>> = Vec::new();
        while out.len() < limit {
            let page = pager.next_page();
            if page.is_empty() {
                break;
            }
            out.push(page.iter().map(RawRow::from_trip).collect());
        }
        print_json(&out);
        return;
    }

    if dataset.is_empty() {
        println!("No trips matched the current filter.");
        return;
    }
    let mut page_number = 0;
    while page_number < limit {
        let page = pager.next_page();
        if page.is_empty() {
            break;
        }
        page_number += 1;
        print_raw_page(page, page_number, use_color);
    }
}

// --- interactive shell ---
//
// The prompt/retry loops live here at the boundary; the core only exposes
// validate-or-reject parsers.

fn prompt(question: &str) -> Option<String> {
    print!("{question}\n> ");
    io::stdout().flush().ok();
    let mut buf = String::new();
    match io::stdin().read_line(&mut buf) {
        Ok(0) | Err(_) => None, // EOF or broken input ends the session
        Ok(_) => Some(buf.trim().to_string()),
    }
}

fn prompt_parse<T>(
    question: &str,
    parse: impl Fn(&str) -> Result<T, AppError>,
) -> Option<T> {
    loop {
        let input = prompt(question)?;
        match parse(&input) {
            Ok(value) => return Some(value),
            Err(e) => println!("{e}"),
        }
    }
}

fn prompt_choice(question: &str, options: &[&str]) -> Option<String> {
    loop {
        let input = prompt(question)?.to_lowercase();
        if options.contains(&input.as_str()) {
            return Some(input);
        }
        println!("Please enter one of: {}", options.join(", "));
    }
}

fn run_interactive(data_dir: &Path, use_color: bool) -> Result<(), AppError> {
    println!("Hello! Let's explore some US bikeshare data!");
    loop {
        let Some(city) = prompt_parse(
            "Which city would you like to see? (chicago, new york, washington)",
            City::parse,
        ) else {
            break;
        };

        let Some(kind) = prompt_choice(
            "Filter the data by month, day, both, or none?",
            &["month", "day", "both", "none"],
        ) else {
            break;
        };

        let month = if kind == "month" || kind == "both" {
            match prompt_parse("Which month? (january through june)", Month::parse) {
                Some(m) => Some(m),
                None => break,
            }
        } else {
            None
        };
        let day = if kind == "day" || kind == "both" {
            match prompt_parse("Which day? (monday through sunday)", parse_weekday) {
                Some(d) => Some(d),
                None => break,
            }
        } else {
            None
        };

        let spec = FilterSpec::new(month, day);
        match load_city(city, &spec, data_dir) {
            Ok(dataset) => {
                run_all(&dataset, &spec, false, use_color);
                if view_raw_loop(&dataset, use_color).is_none() {
                    break;
                }
            }
            // a failed load surfaces here and the user can try again
            Err(e) => eprintln!("{e}"),
        }

        match prompt_choice("Would you like to restart? (yes/no)", &["yes", "no", "y", "n"]) {
            Some(answer) if answer.starts_with('y') => continue,
            _ => break,
        }
    }
    println!("Goodbye!");
    Ok(())
}

fn view_raw_loop(dataset: &Dataset, use_color: bool) -> Option<()> {
    let mut pager = Pager::new(&dataset.trips);
    let mut page_number = 0;
    loop {
        if pager.exhausted() {
            if page_number > 0 {
                println!("No more raw data.");
            }
            return Some(());
        }
        let question = if page_number == 0 {
            "View the first 5 rows of raw data? (yes/no)"
        } else {
            "View the next 5 rows? (yes/no)"
        };
        let answer = prompt_choice(question, &["yes", "no", "y", "n"])?;
        if answer.starts_with('n') {
            return Some(());
        }
        page_number += 1;
        print_raw_page(pager.next_page(), page_number, use_color);
    }
}
