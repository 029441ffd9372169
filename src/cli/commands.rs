//! CLI subcommand definitions

use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Most frequent times of travel
    Time,
    /// Most popular stations and trip
    Stations,
    /// Total and average trip duration
    Durations,
    /// User type, gender, and birth-year breakdown
    Users,
    /// Page through raw rows, five at a time
    Raw {
        /// Maximum number of pages to print (all pages when omitted)
        #[arg(long, value_name = "N")]
        pages: Option<usize>,
    },
    /// Prompt-driven session: pick filters, see every report, page raw data
    Interactive,
}
