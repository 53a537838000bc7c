use clap::Parser;
use colored::Colorize;

use habitr::cli::args::Cli;
use habitr::cli::commands;
use habitr::config::Config;
use habitr::error::HabitrError;
use habitr::storage::HabitStore;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), HabitrError> {
    let cli = Cli::parse();

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("{}: {}", "warning".yellow().bold(), e);
        Config::default()
    });
    config.general.color.apply();

    let format = cli.output.unwrap_or(config.general.default_output);
    let store = HabitStore::open()?;

    let output = commands::dispatch(&store, &config, cli.command, format)?;

    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}
