//! Day command: describe one day of the calendar.

use std::fmt::Write;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{info, info_span};

use luach_calendar::JewishMonth;
use luach_daf_yomi::{DafYomi, MasechtaNames};
use luach_holidays::JewishCalendar;

use crate::cli::DayArgs;
use crate::config::LuachConfig;

const WEEKDAYS: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Shabbos",
];

/// Name of a day of week numbered 1 (Sunday) to 7 (Shabbos).
pub fn weekday_name(day_of_week: u8) -> &'static str {
    WEEKDAYS[usize::from(day_of_week - 1) % 7]
}

/// Run the day command.
pub fn run(args: DayArgs, config: &LuachConfig) -> Result<()> {
    let _cmd = info_span!("day").entered();
    let calendar = resolve(&args, config)?;
    info!(date = %calendar.date(), "describing day");
    let names = config.masechta_names()?;
    print!("{}", render(&calendar, &names)?);
    Ok(())
}

/// Builds the calendar for the requested date. CLI flags switch schedules on
/// but never off.
fn resolve(args: &DayArgs, config: &LuachConfig) -> Result<JewishCalendar> {
    let calendar = if let Some(hebrew) = args.hebrew {
        let month = JewishMonth::try_from(hebrew.month)?;
        JewishCalendar::from_jewish(hebrew.year, month, hebrew.day).with_context(|| {
            format!(
                "invalid Jewish date {}-{}-{}",
                hebrew.year, hebrew.month, hebrew.day
            )
        })?
    } else {
        let date = args.date.unwrap_or_else(|| Local::now().date_naive());
        JewishCalendar::from_naive_date(date)
            .with_context(|| format!("unsupported Gregorian date {date}"))?
    };
    Ok(calendar
        .with_in_israel(args.israel || config.calendar.in_israel)
        .with_modern_holidays(args.modern || config.calendar.use_modern_holidays))
}

/// Renders the plain-text description of a day.
pub fn render(calendar: &JewishCalendar, names: &MasechtaNames) -> Result<String> {
    let mut out = String::new();
    writeln!(
        out,
        "Date:        {} ({}, {})",
        calendar.date(),
        calendar.naive_date(),
        weekday_name(calendar.day_of_week())
    )?;

    let occasions = calendar.occasions();
    let occasions = if occasions.is_empty() {
        "none".to_string()
    } else {
        occasions
            .iter()
            .map(|o| o.name())
            .collect::<Vec<_>>()
            .join(", ")
    };
    writeln!(out, "Occasions:   {occasions}")?;

    if let Some(day) = calendar.day_of_omer() {
        writeln!(out, "Omer:        day {day}")?;
    }
    if let Some(day) = calendar.day_of_chanukah() {
        writeln!(out, "Chanukah:    day {day}")?;
    }
    writeln!(out, "Rosh Chodesh: {}", yes_no(calendar.is_rosh_chodesh()))?;

    let bavli = match calendar.daf_yomi_bavli() {
        Ok(daf) => format!(
            "{} {}",
            daf.bavli_name(names).unwrap_or("?"),
            daf.daf()
        ),
        Err(e) => e.to_string(),
    };
    writeln!(out, "Bavli:       {bavli}")?;

    let yerushalmi = match calendar.daf_yomi_yerushalmi() {
        Ok(Some(daf)) => format!(
            "{} {}",
            daf.yerushalmi_name(names).unwrap_or("?"),
            daf.daf()
        ),
        Ok(None) => "no daf today".to_string(),
        Err(e) => e.to_string(),
    };
    writeln!(out, "Yerushalmi:  {yerushalmi}")?;
    Ok(out)
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::cli::HebrewDate;

    fn args() -> DayArgs {
        DayArgs {
            date: None,
            hebrew: None,
            israel: false,
            modern: false,
        }
    }

    #[test]
    fn weekday_names() {
        assert_eq!(weekday_name(1), "Sunday");
        assert_eq!(weekday_name(7), "Shabbos");
    }

    #[test]
    fn render_yom_kippur() {
        let calendar = JewishCalendar::from_gregorian(2024, 10, 12).unwrap();
        let text = render(&calendar, &MasechtaNames::default()).unwrap();
        assert!(text.contains("10 Tishrei 5785 (2024-10-12, Shabbos)"), "{text}");
        assert!(text.contains("Occasions:   Yom Kippur"), "{text}");
        assert!(text.contains("Yerushalmi:  no daf today"), "{text}");
        assert!(!text.contains("Omer"), "{text}");
    }

    #[test]
    fn render_elul_10_5777() {
        let calendar = JewishCalendar::from_jewish(5777, JewishMonth::Elul, 10).unwrap();
        let text = render(&calendar, &MasechtaNames::default()).unwrap();
        assert!(text.contains("Bavli:       Sanhedrin 47"), "{text}");
        assert!(text.contains("Yerushalmi:  Kidushin 8"), "{text}");
        assert!(text.contains("Occasions:   none"), "{text}");
    }

    #[test]
    fn render_before_daf_yomi() {
        let calendar = JewishCalendar::from_gregorian(1900, 1, 1).unwrap();
        let text = render(&calendar, &MasechtaNames::default()).unwrap();
        assert!(text.contains("before the Bavli Daf Yomi cycle start"), "{text}");
    }

    #[test]
    fn resolve_hebrew_date() {
        let mut a = args();
        a.hebrew = Some(HebrewDate {
            year: 5785,
            month: 1,
            day: 20,
        });
        let calendar = resolve(&a, &LuachConfig::default()).unwrap();
        assert_eq!(calendar.jewish_month(), JewishMonth::Nissan);
        assert_eq!(calendar.day_of_omer(), Some(5));
    }

    #[test]
    fn resolve_rejects_bad_month() {
        let mut a = args();
        a.hebrew = Some(HebrewDate {
            year: 5785,
            month: 14,
            day: 1,
        });
        assert!(resolve(&a, &LuachConfig::default()).is_err());
    }

    #[test]
    fn flags_and_config_enable_schedules() {
        let mut a = args();
        a.date = NaiveDate::from_ymd_opt(2024, 10, 18);
        a.israel = true;
        let calendar = resolve(&a, &LuachConfig::default()).unwrap();
        assert!(calendar.in_israel());
        assert!(!calendar.use_modern_holidays());

        let mut config = LuachConfig::default();
        config.calendar.use_modern_holidays = true;
        let calendar = resolve(&args(), &config).unwrap();
        assert!(calendar.use_modern_holidays());
        assert!(!calendar.in_israel());
    }
}
