mod app;
mod cli;
mod config;
mod core;
mod data;
mod error;
mod output;
mod stats;

use clap::Parser;

use cli::Cli;
use config::Config;

fn main() {
    let config = Config::load();
    let cli = Cli::parse().with_config(&config);

    if let Err(e) = app::run(&cli, &config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
