//! Year command: summary of a Jewish year.

use std::fmt::Write;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use luach_calendar::{JewishDate, JewishMonth, last_month_of_jewish_year};

use crate::cli::YearArgs;
use crate::day_cmd::weekday_name;

/// Run the year command.
pub fn run(args: YearArgs) -> Result<()> {
    let _cmd = info_span!("year", year = args.year).entered();
    let rosh_hashana = JewishDate::from_jewish(args.year, JewishMonth::Tishrei, 1)
        .with_context(|| format!("unsupported Jewish year {}", args.year))?;
    info!(date = %rosh_hashana.naive_date(), "Rosh Hashana");
    print!("{}", render(&rosh_hashana)?);
    Ok(())
}

/// Renders the year containing `rosh_hashana`.
pub fn render(rosh_hashana: &JewishDate) -> Result<String> {
    let year = rosh_hashana.jewish_year();
    let mut out = String::new();
    writeln!(out, "Year:          {year}")?;
    writeln!(
        out,
        "Leap year:     {}",
        if rosh_hashana.is_jewish_leap_year() { "yes" } else { "no" }
    )?;
    writeln!(out, "Months:        {}", last_month_of_jewish_year(year)?.number())?;
    writeln!(out, "Days:          {}", rosh_hashana.days_in_jewish_year())?;
    writeln!(out, "Kviah:         {:?}", rosh_hashana.kviah())?;
    writeln!(
        out,
        "Rosh Hashana:  {} ({})",
        rosh_hashana.naive_date(),
        weekday_name(rosh_hashana.day_of_week())
    )?;
    Ok(out)
}
