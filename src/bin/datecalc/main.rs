mod cli;
mod commands;
mod logging;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use calendar_calc::CalcConfig;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<Vec<String>> {
    let config = match &cli.config {
        Some(path) => CalcConfig::from_file(path)
            .with_context(|| format!("failed to load config: {}", path.display()))?,
        None => CalcConfig::default(),
    };
    tracing::debug!(?config, command = ?cli.command, "starting");
    let clock = config.clock()?;

    match &cli.command {
        Command::DateDiff(args) => commands::date_diff(args),
        Command::AgeDiff(args) => commands::age_diff(args),
        Command::Age(args) => commands::age(args, &config, &clock),
        Command::DDay(args) => commands::dday(args, &clock),
        Command::TimeAdd(args) => commands::time_add(args),
        Command::TimeDiff(args) => commands::time_diff(args),
    }
}
