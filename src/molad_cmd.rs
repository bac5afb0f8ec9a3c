//! Molad command: the molad of a month and its Kiddush Levana window.

use std::fmt::Write;

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset};
use tracing::{info, info_span};

use luach_calendar::JewishMonth;
use luach_holidays::JewishCalendar;

use crate::cli::MoladArgs;
use crate::day_cmd::weekday_name;

const INSTANT_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f %:z";

/// Run the molad command.
pub fn run(args: MoladArgs) -> Result<()> {
    let _cmd = info_span!("molad", year = args.year, month = args.month).entered();
    let month = JewishMonth::try_from(args.month)?;
    let calendar = JewishCalendar::from_jewish(args.year, month, 1)
        .with_context(|| format!("invalid Jewish month {} in year {}", args.month, args.year))?;
    info!(date = %calendar.date(), "computing molad");
    print!("{}", render(&calendar)?);
    Ok(())
}

/// Renders the molad and Kiddush Levana instants of the calendar's month.
pub fn render(calendar: &JewishCalendar) -> Result<String> {
    let molad = calendar.date().molad()?;
    let mut out = String::new();
    writeln!(
        out,
        "Molad {} {}: {} {}, {}h {}m {} chalakim",
        calendar.jewish_month(),
        calendar.jewish_year(),
        weekday_name(molad.day_of_week()),
        molad.naive_date(),
        molad.molad_hours(),
        molad.molad_minutes(),
        molad.molad_chalakim()
    )?;
    writeln!(out, "Molad (IST):            {}", instant(calendar.molad_as_instant()?))?;
    writeln!(
        out,
        "Kiddush Levana from:    {} (3 days), {} (7 days)",
        instant(calendar.tchilas_zman_kidush_levana_3_days()?),
        instant(calendar.tchilas_zman_kidush_levana_7_days()?)
    )?;
    writeln!(
        out,
        "Kiddush Levana until:   {} (between molados), {} (15 days)",
        instant(calendar.sof_zman_kidush_levana_between_moldos()?),
        instant(calendar.sof_zman_kidush_levana_15_days()?)
    )?;
    Ok(out)
}

fn instant(time: DateTime<FixedOffset>) -> String {
    time.format(INSTANT_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_tishrei_5784() {
        let calendar = JewishCalendar::from_jewish(5784, JewishMonth::Tishrei, 1).unwrap();
        let text = render(&calendar).unwrap();
        assert!(text.starts_with("Molad Tishrei 5784: Friday 2023-09-15, 5h 49m 0 chalakim"), "{text}");
        assert!(text.contains("2023-09-15 05:28:03.504 +02:00"), "{text}");
        assert!(text.contains("2023-09-18 05:28:03.504 +02:00 (3 days)"), "{text}");
        assert!(text.contains("2023-09-30 05:28:03.504 +02:00 (15 days)"), "{text}");
    }

    #[test]
    fn adar_ii_needs_a_leap_year() {
        let args = MoladArgs {
            year: 5785,
            month: 13,
        };
        assert!(run(args).is_err());
    }

    #[test]
    fn month_out_of_range() {
        let args = MoladArgs {
            year: 5785,
            month: 0,
        };
        assert!(run(args).is_err());
    }
}
