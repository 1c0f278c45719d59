//! Fleet Checker - heterogeneous vehicle fleet manager
//!
//! A CLI tool that manages a fleet of land, air, and water vehicles
//! persisted to a flat file.

mod cli;
mod commands;
mod config;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
