//! Daf Yomi Yerushalmi.
//!
//! The first cycle began on 2 February 1980 and covers 1554 daf. No daf is
//! learned on Yom Kippur or Tisha B'Av, so each cycle is 1554 days plus the
//! number of such days it spans.

use chrono::NaiveDate;
use luach_calendar::{JewishDate, JewishMonth, MAX_ABSOLUTE_DATE, MAX_JEWISH_YEAR};
use luach_holidays::{JewishCalendar, YomTov};
use tracing::debug;

use crate::daf::{Daf, YERUSHALMI_MASECHTOS};
use crate::error::DafYomiError;

/// Absolute day of 2 February 1980.
pub(crate) const CYCLE_START: i32 = 722_847;

const WHOLE_SHAS_DAFS: i32 = 1554;

const BLATT_PER_MASECHTA: [i32; YERUSHALMI_MASECHTOS] = [
    68, 37, 34, 44, 31, 59, 26, 33, 28, 20, 13, 92, 65, 71, 22, 22, 42, 26, 26, 33, 34, 22, 19, 85,
    72, 47, 40, 47, 54, 48, 44, 37, 34, 44, 9, 57, 37, 19, 13,
];

const fn total_blatt(blatt: &[i32]) -> i32 {
    let mut total = 0;
    let mut i = 0;
    while i < blatt.len() {
        total += blatt[i];
        i += 1;
    }
    total
}

// The page walk in `daf_yomi_yerushalmi` ends inside the table only if this holds.
const _: () = assert!(total_blatt(&BLATT_PER_MASECHTA) == WHOLE_SHAS_DAFS);

fn cycle_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(1980, 2, 2).expect("valid date")
}

fn jewish_year_of(absolute: i32) -> i32 {
    // cycle ends may lie past the last supported day
    JewishDate::from_absolute(absolute.min(MAX_ABSOLUTE_DATE))
        .map_or(MAX_JEWISH_YEAR, |date| date.jewish_year())
}

fn absolute_of(year: i32, month: JewishMonth, day: u8) -> Option<i32> {
    JewishDate::from_jewish(year, month, day)
        .ok()
        .map(|date| date.absolute_date())
}

/// Counts 10 Tishrei and 9 Av strictly between `start` and `end`.
///
/// Fixed dates are used even when the fast of 9 Av is postponed. A date
/// past the supported range is skipped: it lies after every requested day.
fn special_days(start: i32, end: i32) -> i32 {
    let count = (jewish_year_of(start)..=jewish_year_of(end))
        .flat_map(|year| {
            [
                absolute_of(year, JewishMonth::Tishrei, 10),
                absolute_of(year, JewishMonth::Av, 9),
            ]
        })
        .flatten()
        .filter(|&day| start < day && day < end)
        .count();
    // at most two per year
    count as i32
}

/// Returns the Daf Yomi Yerushalmi for the calendar's date.
///
/// Returns `Ok(None)` on Yom Kippur and Tisha B'Av (including a Tisha B'Av
/// postponed to 10 Av), when no daf is learned.
///
/// # Errors
///
/// Returns [`DafYomiError::BeforeCycleStart`] for dates before 2 February 1980.
#[tracing::instrument(level = "debug", skip(calendar), fields(date = %calendar.naive_date()))]
pub fn daf_yomi_yerushalmi(calendar: &JewishCalendar) -> Result<Option<Daf>, DafYomiError> {
    if matches!(calendar.yom_tov(), Some(YomTov::YomKippur | YomTov::TishaBeav)) {
        debug!("no Yerushalmi daf on this day");
        return Ok(None);
    }
    let requested = calendar.absolute_date();
    if requested < CYCLE_START {
        debug!("date precedes the first Yerushalmi cycle");
        return Err(DafYomiError::BeforeCycleStart {
            edition: "Yerushalmi",
            date: calendar.naive_date(),
            start: cycle_start(),
        });
    }

    // the first day of a cycle belongs to that cycle, not the one it ends
    let mut prev_cycle = CYCLE_START;
    let mut next_cycle = CYCLE_START;
    while requested >= next_cycle {
        prev_cycle = next_cycle;
        next_cycle += WHOLE_SHAS_DAFS;
        next_cycle += special_days(prev_cycle, next_cycle);
    }

    let mut total = requested - prev_cycle - special_days(prev_cycle, requested);
    for (masechta, &blatt) in BLATT_PER_MASECHTA.iter().enumerate() {
        if total < blatt {
            debug!(masechta, page = total + 1, "resolved Yerushalmi daf");
            // masechta < 39 and total < 92
            return Ok(Some(Daf::new(masechta as u8, (total + 1) as u16)));
        }
        total -= blatt;
    }
    unreachable!("a cycle holds exactly the pages of every tractate")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yerushalmi(year: i32, month: u8, day: u8) -> Result<Option<Daf>, DafYomiError> {
        daf_yomi_yerushalmi(&JewishCalendar::from_gregorian(year, month, day).unwrap())
    }

    #[test]
    fn page_total_is_whole_shas() {
        assert_eq!(total_blatt(&BLATT_PER_MASECHTA), WHOLE_SHAS_DAFS);
    }

    #[test]
    fn cycle_start_constant() {
        let start = JewishDate::from_gregorian(1980, 2, 2).unwrap();
        assert_eq!(start.absolute_date(), CYCLE_START);
    }

    #[test]
    fn first_day_is_berachos_1() {
        assert_eq!(yerushalmi(1980, 2, 2).unwrap(), Some(Daf::new(0, 1)));
    }

    #[test]
    fn cycle_boundaries() {
        assert_eq!(yerushalmi(1984, 5, 12).unwrap(), Some(Daf::new(38, 13)));
        assert_eq!(yerushalmi(1984, 5, 13).unwrap(), Some(Daf::new(0, 1)));
        assert_eq!(yerushalmi(2022, 11, 14).unwrap(), Some(Daf::new(0, 1)));
        assert_eq!(yerushalmi(2022, 11, 15).unwrap(), Some(Daf::new(0, 2)));
    }

    #[test]
    fn special_days_are_strictly_inside() {
        let yom_kippur = JewishDate::from_jewish(5785, JewishMonth::Tishrei, 10).unwrap();
        let abs = yom_kippur.absolute_date();
        assert_eq!(special_days(abs, abs + 1), 0);
        assert_eq!(special_days(abs - 1, abs + 1), 1);
        // one year spans one Yom Kippur and one 9 Av
        assert_eq!(special_days(abs - 1, abs + 354), 2);
    }

    #[test]
    fn special_days_near_the_end_of_the_range() {
        assert_eq!(special_days(MAX_ABSOLUTE_DATE - 10, MAX_ABSOLUTE_DATE + 2000), 0);
    }

    #[test]
    fn yom_kippur_has_no_daf() {
        assert_eq!(yerushalmi(2024, 10, 12).unwrap(), None);
    }
}
