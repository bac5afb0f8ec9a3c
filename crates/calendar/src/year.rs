//! Range-checked year arithmetic.
//!
//! These are the public forms of the molad and year-length functions. Each
//! rejects a year outside `1..=MAX_JEWISH_YEAR` with
//! [`CalendarError::InvalidJewishYear`], and a month the year does not have
//! with [`CalendarError::InvalidJewishMonth`].

use tracing::debug;

use crate::date::MAX_JEWISH_YEAR;
use crate::error::CalendarError;
use crate::molad;
use crate::month::{JewishMonth, Kviah};

fn check_year(year: i32) -> Result<(), CalendarError> {
    if (1..=MAX_JEWISH_YEAR).contains(&year) {
        return Ok(());
    }
    debug!(year, "Jewish year outside the supported range");
    Err(CalendarError::InvalidJewishYear {
        year,
        max: MAX_JEWISH_YEAR,
    })
}

fn check_month(year: i32, month: JewishMonth) -> Result<(), CalendarError> {
    check_year(year)?;
    let last = molad::last_month_of_jewish_year(year);
    if month > last {
        return Err(CalendarError::InvalidJewishMonth {
            month: month.number(),
            last: last.number(),
        });
    }
    Ok(())
}

/// Returns `true` if `year` is a Jewish leap year.
///
/// Years 3, 6, 8, 11, 14, 17 and 19 of each 19-year cycle are leap years.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidJewishYear`] outside `1..=MAX_JEWISH_YEAR`.
pub fn is_jewish_leap_year(year: i32) -> Result<bool, CalendarError> {
    check_year(year)?;
    Ok(molad::is_jewish_leap_year(year))
}

/// Returns the last month of `year`: Adar II in leap years, Adar otherwise.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidJewishYear`] outside `1..=MAX_JEWISH_YEAR`.
pub fn last_month_of_jewish_year(year: i32) -> Result<JewishMonth, CalendarError> {
    check_year(year)?;
    Ok(molad::last_month_of_jewish_year(year))
}

/// Returns the 1-based ordinal of `month` counted from Tishrei.
///
/// # Errors
///
/// Fails for an unsupported year, or Adar II in a common year.
pub fn jewish_month_of_year(year: i32, month: JewishMonth) -> Result<i32, CalendarError> {
    check_month(year, month)?;
    Ok(molad::jewish_month_of_year(year, month))
}

/// Chalakim from the start of the count to the molad of `month` in `year`.
///
/// # Errors
///
/// Fails for an unsupported year, or Adar II in a common year.
///
/// # Example
///
/// ```
/// use luach_calendar::{CHALAKIM_MOLAD_TOHU, JewishMonth, chalakim_since_molad_tohu};
///
/// let tohu = chalakim_since_molad_tohu(1, JewishMonth::Tishrei).unwrap();
/// assert_eq!(tohu, CHALAKIM_MOLAD_TOHU);
/// assert!(chalakim_since_molad_tohu(0, JewishMonth::Tishrei).is_err());
/// ```
pub fn chalakim_since_molad_tohu(year: i32, month: JewishMonth) -> Result<i64, CalendarError> {
    check_month(year, month)?;
    Ok(molad::chalakim_since_molad_tohu(year, month))
}

/// Days from the calendar's day zero to Rosh Hashanah of `year`, after the
/// dechiyos.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidJewishYear`] outside `1..=MAX_JEWISH_YEAR`.
pub fn jewish_calendar_elapsed_days(year: i32) -> Result<i32, CalendarError> {
    check_year(year)?;
    Ok(molad::jewish_calendar_elapsed_days(year))
}

/// Number of days in `year`: one of 353, 354, 355, 383, 384 or 385.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidJewishYear`] outside `1..=MAX_JEWISH_YEAR`.
pub fn days_in_jewish_year(year: i32) -> Result<i32, CalendarError> {
    check_year(year)?;
    Ok(molad::days_in_jewish_year(year))
}

/// Returns `true` if Cheshvan has 30 days in `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidJewishYear`] outside `1..=MAX_JEWISH_YEAR`.
pub fn is_cheshvan_long(year: i32) -> Result<bool, CalendarError> {
    check_year(year)?;
    Ok(molad::is_cheshvan_long(year))
}

/// Returns `true` if Kislev has 29 days in `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidJewishYear`] outside `1..=MAX_JEWISH_YEAR`.
pub fn is_kislev_short(year: i32) -> Result<bool, CalendarError> {
    check_year(year)?;
    Ok(molad::is_kislev_short(year))
}

/// Returns the Cheshvan/Kislev pattern of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidJewishYear`] outside `1..=MAX_JEWISH_YEAR`.
pub fn kviah(year: i32) -> Result<Kviah, CalendarError> {
    check_year(year)?;
    Ok(molad::kviah(year))
}

/// Number of days in `month` of `year` (29 or 30).
///
/// # Errors
///
/// Fails for an unsupported year, or Adar II in a common year.
pub fn days_in_jewish_month(month: JewishMonth, year: i32) -> Result<u8, CalendarError> {
    check_month(year, month)?;
    Ok(molad::days_in_jewish_month(month, year))
}

/// Days from the day before Rosh Hashanah of `year` up to the given date;
/// 1 Tishrei yields 1.
///
/// # Errors
///
/// Fails for an unsupported year, a month the year lacks, or a day past the
/// end of the month ([`CalendarError::InvalidJewishDay`]).
pub fn days_since_start_of_jewish_year(
    year: i32,
    month: JewishMonth,
    day: u8,
) -> Result<i32, CalendarError> {
    check_month(year, month)?;
    if !(1..=molad::days_in_jewish_month(month, year)).contains(&day) {
        return Err(CalendarError::InvalidJewishDay { day });
    }
    Ok(molad::days_since_start_of_jewish_year(year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_years_are_accepted() {
        assert_eq!(is_jewish_leap_year(1), Ok(false));
        assert_eq!(is_jewish_leap_year(5784), Ok(true));
        assert!(days_in_jewish_year(MAX_JEWISH_YEAR).is_ok());
        assert!(jewish_calendar_elapsed_days(MAX_JEWISH_YEAR).unwrap() > 0);
    }

    #[test]
    fn out_of_range_years_are_rejected() {
        for year in [i32::MIN, -1, 0, MAX_JEWISH_YEAR + 1, 5_900_000, i32::MAX] {
            let err = CalendarError::InvalidJewishYear {
                year,
                max: MAX_JEWISH_YEAR,
            };
            assert_eq!(is_jewish_leap_year(year), Err(err.clone()), "year {year}");
            assert_eq!(jewish_calendar_elapsed_days(year), Err(err.clone()), "year {year}");
            assert_eq!(days_in_jewish_year(year), Err(err.clone()), "year {year}");
            assert_eq!(kviah(year), Err(err.clone()), "year {year}");
            assert_eq!(
                chalakim_since_molad_tohu(year, JewishMonth::Tishrei),
                Err(err.clone()),
                "year {year}"
            );
            assert_eq!(last_month_of_jewish_year(year), Err(err), "year {year}");
        }
    }

    #[test]
    fn adar_ii_in_a_common_year_is_rejected() {
        let err = CalendarError::InvalidJewishMonth { month: 13, last: 12 };
        assert_eq!(chalakim_since_molad_tohu(5785, JewishMonth::AdarII), Err(err.clone()));
        assert_eq!(days_in_jewish_month(JewishMonth::AdarII, 5785), Err(err.clone()));
        assert_eq!(jewish_month_of_year(5785, JewishMonth::AdarII), Err(err));
        assert_eq!(days_in_jewish_month(JewishMonth::AdarII, 5784), Ok(29));
    }

    #[test]
    fn day_past_month_end_is_rejected() {
        assert_eq!(
            days_since_start_of_jewish_year(5785, JewishMonth::Elul, 30),
            Err(CalendarError::InvalidJewishDay { day: 30 })
        );
        assert_eq!(
            days_since_start_of_jewish_year(5785, JewishMonth::Cheshvan, 1),
            Ok(31)
        );
    }

    #[test]
    fn checked_and_unchecked_forms_agree() {
        for year in 5700..5800 {
            assert_eq!(days_in_jewish_year(year), Ok(molad::days_in_jewish_year(year)));
            assert_eq!(is_kislev_short(year), Ok(molad::is_kislev_short(year)));
            assert_eq!(is_cheshvan_long(year), Ok(molad::is_cheshvan_long(year)));
        }
    }
}
