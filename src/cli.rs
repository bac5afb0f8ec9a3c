use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Luach Hebrew calendar tool.
#[derive(Parser)]
#[command(
    name = "luach",
    version,
    about = "Hebrew calendar, holidays, molad and Daf Yomi"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file. Defaults apply when it does not exist.
    #[arg(short, long, global = true, default_value = "luach.toml")]
    pub config: PathBuf,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Describe a single day: dates, occasion, Omer, Chanukah and Daf Yomi.
    Day(DayArgs),
    /// Show the molad of a month and the Kiddush Levana window.
    Molad(MoladArgs),
    /// Summarise a Jewish year.
    Year(YearArgs),
}

/// Arguments for the `day` subcommand.
#[derive(clap::Args)]
pub struct DayArgs {
    /// Gregorian date (YYYY-MM-DD). Defaults to today.
    #[arg(short, long, conflicts_with = "hebrew")]
    pub date: Option<NaiveDate>,

    /// Jewish date as year-month-day, months numbered from Nissan = 1.
    #[arg(long, value_parser = parse_hebrew_date)]
    pub hebrew: Option<HebrewDate>,

    /// Use the Israel holiday schedule (overrides the config file).
    #[arg(long)]
    pub israel: bool,

    /// Include modern Israeli holidays (overrides the config file).
    #[arg(long)]
    pub modern: bool,
}

/// Arguments for the `molad` subcommand.
#[derive(clap::Args)]
pub struct MoladArgs {
    /// Jewish year.
    #[arg(short, long)]
    pub year: i32,

    /// Jewish month, numbered from Nissan = 1 (Adar II = 13).
    #[arg(short, long)]
    pub month: u8,
}

/// Arguments for the `year` subcommand.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Jewish year.
    #[arg(short, long)]
    pub year: i32,
}

/// A Jewish date as typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HebrewDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

/// Parses `Y-M-D` into a [`HebrewDate`]. Range checks happen in the calendar.
pub fn parse_hebrew_date(s: &str) -> Result<HebrewDate, String> {
    let parts: Vec<&str> = s.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(format!("expected Y-M-D, got {s:?}"));
    };
    let year = year
        .parse()
        .map_err(|e| format!("invalid year {year:?}: {e}"))?;
    let month = month
        .parse()
        .map_err(|e| format!("invalid month {month:?}: {e}"))?;
    let day = day.parse().map_err(|e| format!("invalid day {day:?}: {e}"))?;
    Ok(HebrewDate { year, month, day })
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_hebrew_date_accepts_y_m_d() {
        assert_eq!(
            parse_hebrew_date("5785-7-10").unwrap(),
            HebrewDate {
                year: 5785,
                month: 7,
                day: 10
            }
        );
    }

    #[test]
    fn parse_hebrew_date_rejects_bad_input() {
        assert!(parse_hebrew_date("5785-7").is_err());
        assert!(parse_hebrew_date("5785-7-10-1").is_err());
        assert!(parse_hebrew_date("5785-x-10").is_err());
        assert!(parse_hebrew_date("5785-7-300").is_err());
    }

    #[test]
    fn day_flags() {
        let cli = Cli::parse_from(["luach", "-vv", "day", "--date", "2024-10-12", "--israel"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, PathBuf::from("luach.toml"));
        let Command::Day(args) = cli.command else {
            panic!("expected day");
        };
        assert_eq!(args.date, NaiveDate::from_ymd_opt(2024, 10, 12));
        assert!(args.israel);
        assert!(!args.modern);
        assert!(args.hebrew.is_none());
    }

    #[test]
    fn date_and_hebrew_conflict() {
        let result = Cli::try_parse_from([
            "luach", "day", "--date", "2024-10-12", "--hebrew", "5785-7-10",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn molad_args() {
        let cli = Cli::parse_from(["luach", "molad", "--year", "5784", "--month", "7"]);
        let Command::Molad(args) = cli.command else {
            panic!("expected molad");
        };
        assert_eq!((args.year, args.month), (5784, 7));
    }
}
