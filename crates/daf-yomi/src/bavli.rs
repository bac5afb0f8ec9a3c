//! Daf Yomi Bavli.
//!
//! The first cycle began on 11 September 1923. Cycles 1..=7 were 2702 days
//! long; from 24 June 1975 (cycle 8) Shekalim is learned with 22 daf
//! instead of 13 and a cycle is 2711 days.

use chrono::NaiveDate;
use luach_holidays::JewishCalendar;
use tracing::debug;

use crate::daf::{BAVLI_MASECHTOS, Daf};
use crate::error::DafYomiError;
use crate::julian_day;

/// Julian day of 11 September 1923.
pub(crate) const CYCLE_START_JULIAN_DAY: i64 = 2_423_674;

/// Julian day of 24 June 1975, the first day of cycle 8.
pub(crate) const SHEKALIM_CHANGE_JULIAN_DAY: i64 = 2_442_588;

const SHORT_CYCLE_DAYS: i64 = 2702;
const LONG_CYCLE_DAYS: i64 = 2711;

const SHEKALIM: usize = 4;

/// Shekalim pages in cycles 1..=7.
const SHORT_SHEKALIM_BLATT: i64 = 13;

/// Pages per tractate, with the long Shekalim.
const BLATT_PER_MASECHTA: [i64; BAVLI_MASECHTOS] = [
    64, 157, 105, 121, 22, 88, 56, 40, 35, 31, 32, 29, 27, 122, 112, 91, 66, 49, 90, 82, 119, 119,
    176, 113, 24, 49, 76, 14, 120, 110, 142, 61, 34, 34, 28, 22, 4, 9, 5, 73,
];

/// Days in a cycle: each tractate starts at daf 2.
const fn days_per_cycle(blatt: &[i64]) -> i64 {
    let mut days = 0;
    let mut i = 0;
    while i < blatt.len() {
        days += blatt[i] - 1;
        i += 1;
    }
    days
}

// The page walk in `daf_yomi_bavli` ends inside the table only if these hold.
const _: () = assert!(days_per_cycle(&BLATT_PER_MASECHTA) == LONG_CYCLE_DAYS);
const _: () = assert!(
    LONG_CYCLE_DAYS - (BLATT_PER_MASECHTA[SHEKALIM] - SHORT_SHEKALIM_BLATT) == SHORT_CYCLE_DAYS
);

/// First page number of tractates that do not start at daf 2: Kinnim, Tamid
/// and Midos continue the page numbering of Meilah.
fn page_offset(masechta: usize) -> i64 {
    match masechta {
        36 => 21,
        37 => 24,
        38 => 32,
        _ => 0,
    }
}

fn cycle_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(1923, 9, 11).expect("valid date")
}

/// Returns the Daf Yomi Bavli for the calendar's date.
///
/// # Errors
///
/// Returns [`DafYomiError::BeforeCycleStart`] for dates before 11 September 1923.
///
/// # Example
///
/// ```
/// use luach_calendar::JewishMonth;
/// use luach_daf_yomi::daf_yomi_bavli;
/// use luach_holidays::JewishCalendar;
///
/// let cal = JewishCalendar::from_jewish(5777, JewishMonth::Elul, 10).unwrap();
/// let daf = daf_yomi_bavli(&cal).unwrap();
/// assert_eq!((daf.masechta_number(), daf.daf()), (23, 47));
/// ```
#[tracing::instrument(level = "debug", skip(calendar), fields(date = %calendar.naive_date()))]
pub fn daf_yomi_bavli(calendar: &JewishCalendar) -> Result<Daf, DafYomiError> {
    let julian = julian_day(calendar.date());
    if julian < CYCLE_START_JULIAN_DAY {
        debug!("date precedes the first Bavli cycle");
        return Err(DafYomiError::BeforeCycleStart {
            edition: "Bavli",
            date: calendar.naive_date(),
            start: cycle_start(),
        });
    }

    let (cycle, daf_no) = if julian >= SHEKALIM_CHANGE_JULIAN_DAY {
        let elapsed = julian - SHEKALIM_CHANGE_JULIAN_DAY;
        (8 + elapsed / LONG_CYCLE_DAYS, elapsed % LONG_CYCLE_DAYS)
    } else {
        let elapsed = julian - CYCLE_START_JULIAN_DAY;
        (1 + elapsed / SHORT_CYCLE_DAYS, elapsed % SHORT_CYCLE_DAYS)
    };

    let mut blatt_per_masechta = BLATT_PER_MASECHTA;
    if cycle <= 7 {
        blatt_per_masechta[SHEKALIM] = SHORT_SHEKALIM_BLATT;
    }

    // each tractate starts at daf 2, so it occupies (pages - 1) days
    let mut total = 0;
    for (masechta, &blatt) in blatt_per_masechta.iter().enumerate() {
        total += blatt - 1;
        if daf_no < total {
            let page = 1 + blatt - (total - daf_no) + page_offset(masechta);
            debug!(cycle, masechta, page, "resolved Bavli daf");
            // masechta < 40 and page < 200
            return Ok(Daf::new(masechta as u8, page as u16));
        }
    }
    unreachable!("daf_no < cycle length, which the page table sums to")
}

#[cfg(test)]
mod tests {
    use luach_calendar::JewishMonth;

    use super::*;

    fn bavli(year: i32, month: u8, day: u8) -> Result<Daf, DafYomiError> {
        daf_yomi_bavli(&JewishCalendar::from_gregorian(year, month, day).unwrap())
    }

    #[test]
    fn page_totals_match_cycle_lengths() {
        let mut short = BLATT_PER_MASECHTA;
        short[SHEKALIM] = SHORT_SHEKALIM_BLATT;
        assert_eq!(days_per_cycle(&BLATT_PER_MASECHTA), LONG_CYCLE_DAYS);
        assert_eq!(days_per_cycle(&short), SHORT_CYCLE_DAYS);
    }

    #[test]
    fn anchors_match_julian_days() {
        let start = JewishCalendar::from_gregorian(1923, 9, 11).unwrap();
        assert_eq!(julian_day(start.date()), CYCLE_START_JULIAN_DAY);
        let change = JewishCalendar::from_gregorian(1975, 6, 24).unwrap();
        assert_eq!(julian_day(change.date()), SHEKALIM_CHANGE_JULIAN_DAY);
    }

    #[test]
    fn first_day_of_first_cycle() {
        assert_eq!(bavli(1923, 9, 11).unwrap(), Daf::new(0, 2));
    }

    #[test]
    fn cycle_boundaries() {
        // last day of cycle 7 and first day of cycle 8
        assert_eq!(bavli(1975, 6, 23).unwrap(), Daf::new(39, 73));
        assert_eq!(bavli(1975, 6, 24).unwrap(), Daf::new(0, 2));
        // cycles 12, 13 and 14
        assert_eq!(bavli(1997, 9, 29).unwrap(), Daf::new(0, 2));
        assert_eq!(bavli(2012, 8, 3).unwrap(), Daf::new(0, 2));
        assert_eq!(bavli(2020, 1, 5).unwrap(), Daf::new(0, 2));
    }

    #[test]
    fn day_before_start_is_rejected() {
        let cal = JewishCalendar::from_jewish(5683, JewishMonth::Elul, 29).unwrap();
        assert!(matches!(
            daf_yomi_bavli(&cal),
            Err(DafYomiError::BeforeCycleStart { edition: "Bavli", .. })
        ));
    }
}
