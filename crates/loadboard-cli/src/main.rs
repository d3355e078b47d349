//! Loadboard - route-loading KPI report
//!
//! Reads the daily fleet programming sheet and prints how many routes are
//! loaded, how many remain and how far the operation is from its goals.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
