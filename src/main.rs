mod cli;
mod config;
mod day_cmd;
mod logging;
mod molad_cmd;
mod year_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::LuachConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Day(args) => {
            let config = LuachConfig::load(&cli.config)?;
            day_cmd::run(args, &config)
        }
        Command::Molad(args) => molad_cmd::run(args),
        Command::Year(args) => year_cmd::run(args),
    }
}
