//! Proleptic Gregorian date <-> absolute day count.
//!
//! Absolute day 1 is 1 January of year 1. The same count anchors every
//! Hebrew-calendar computation in this crate.

use crate::error::CalendarError;

/// Largest supported Gregorian year.
pub const MAX_GREGORIAN_YEAR: i32 = 9999;

/// Absolute day of 31 December [`MAX_GREGORIAN_YEAR`].
pub const MAX_ABSOLUTE_DATE: i32 = {
    let y = MAX_GREGORIAN_YEAR - 1;
    365 * y + y / 4 - y / 100 + y / 400 + 365
};

/// Number of days in each month of a common year (index 0 unused, index 1 = January).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns `true` if `year` is a Gregorian leap year.
pub fn is_gregorian_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in a Gregorian month.
///
/// `month` must be in 1..=12; other values yield 0.
pub fn days_in_gregorian_month(month: u8, year: i32) -> u8 {
    match month {
        2 if is_gregorian_leap_year(year) => 29,
        1..=12 => DAYS_PER_MONTH[month as usize],
        _ => 0,
    }
}

/// Validates a Gregorian year/month/day triple.
///
/// Days larger than the month length but not larger than 31 are accepted
/// here; callers clamp them to the last day of the month.
pub(crate) fn validate_gregorian_date(year: i32, month: u8, day: u8) -> Result<(), CalendarError> {
    if !(1..=MAX_GREGORIAN_YEAR).contains(&year) {
        return Err(CalendarError::InvalidGregorianYear {
            year,
            max: MAX_GREGORIAN_YEAR,
        });
    }
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidGregorianMonth { month });
    }
    if !(1..=31).contains(&day) {
        return Err(CalendarError::InvalidGregorianDay { day });
    }
    Ok(())
}

/// Validates an absolute day count.
pub(crate) fn validate_absolute(absolute: i64) -> Result<i32, CalendarError> {
    match i32::try_from(absolute) {
        Ok(abs) if (1..=MAX_ABSOLUTE_DATE).contains(&abs) => Ok(abs),
        _ => Err(CalendarError::InvalidAbsoluteDate {
            absolute,
            max: MAX_ABSOLUTE_DATE,
        }),
    }
}

/// Absolute day of an already validated date.
pub(crate) fn to_absolute(year: i32, month: u8, day: u8) -> i32 {
    let prior_months: i32 = (1..month)
        .map(|m| i32::from(days_in_gregorian_month(m, year)))
        .sum();
    let y = year - 1;
    i32::from(day) + prior_months + 365 * y + y / 4 - y / 100 + y / 400
}

/// Converts a Gregorian date to its absolute day count.
///
/// # Errors
///
/// Returns [`CalendarError`] if the year is outside `1..=9999`, the month is
/// outside `1..=12`, or the day does not exist in that month.
///
/// # Example
///
/// ```
/// use luach_calendar::gregorian_to_absolute;
///
/// assert_eq!(gregorian_to_absolute(1, 1, 1).unwrap(), 1);
/// assert_eq!(gregorian_to_absolute(2000, 1, 1).unwrap(), 730_120);
/// ```
pub fn gregorian_to_absolute(year: i32, month: u8, day: u8) -> Result<i32, CalendarError> {
    validate_gregorian_date(year, month, day)?;
    if day > days_in_gregorian_month(month, year) {
        return Err(CalendarError::InvalidGregorianDay { day });
    }
    Ok(to_absolute(year, month, day))
}

/// Converts an absolute day count to a Gregorian `(year, month, day)`.
///
/// The year is approximated as `absolute / 366` and searched forward, then
/// the month is searched forward, then the day falls out by subtraction.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidAbsoluteDate`] if `absolute` is outside
/// `1..=MAX_ABSOLUTE_DATE`.
pub fn absolute_to_gregorian(absolute: i32) -> Result<(i32, u8, u8), CalendarError> {
    let absolute = validate_absolute(i64::from(absolute))?;
    Ok(from_absolute(absolute))
}

/// Gregorian date of an already validated absolute day.
pub(crate) fn from_absolute(absolute: i32) -> (i32, u8, u8) {
    let mut year = absolute / 366;
    while absolute >= to_absolute(year + 1, 1, 1) {
        year += 1;
    }
    let mut month = 1u8;
    while absolute > to_absolute(year, month, days_in_gregorian_month(month, year)) {
        month += 1;
    }
    let day = absolute - to_absolute(year, month, 1) + 1;
    // 1..=31 by construction.
    (year, month, day as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_gregorian_leap_year(2000));
        assert!(is_gregorian_leap_year(2012));
        assert!(!is_gregorian_leap_year(1900));
        assert!(!is_gregorian_leap_year(2011));
    }

    #[test]
    fn february_lengths() {
        assert_eq!(days_in_gregorian_month(2, 2011), 28);
        assert_eq!(days_in_gregorian_month(2, 2012), 29);
        assert_eq!(days_in_gregorian_month(2, 1900), 28);
        assert_eq!(days_in_gregorian_month(13, 2012), 0);
    }

    #[test]
    fn epoch_is_day_one() {
        assert_eq!(gregorian_to_absolute(1, 1, 1).unwrap(), 1);
        assert_eq!(absolute_to_gregorian(1).unwrap(), (1, 1, 1));
    }

    #[test]
    fn max_absolute_is_last_supported_day() {
        assert_eq!(gregorian_to_absolute(9999, 12, 31).unwrap(), MAX_ABSOLUTE_DATE);
        assert_eq!(MAX_ABSOLUTE_DATE, 3_652_059);
        assert_eq!(absolute_to_gregorian(MAX_ABSOLUTE_DATE).unwrap(), (9999, 12, 31));
    }

    #[test]
    fn known_dates() {
        assert_eq!(gregorian_to_absolute(1923, 9, 11).unwrap(), 702_249);
        assert_eq!(gregorian_to_absolute(2000, 3, 1).unwrap(), 730_180);
    }

    #[test]
    fn rejects_year_zero() {
        assert_eq!(
            gregorian_to_absolute(0, 1, 1).unwrap_err(),
            CalendarError::InvalidGregorianYear { year: 0, max: 9999 }
        );
    }

    #[test]
    fn rejects_feb_29_common_year() {
        assert_eq!(
            gregorian_to_absolute(2011, 2, 29).unwrap_err(),
            CalendarError::InvalidGregorianDay { day: 29 }
        );
    }

    #[test]
    fn rejects_absolute_zero() {
        assert!(matches!(
            absolute_to_gregorian(0),
            Err(CalendarError::InvalidAbsoluteDate { absolute: 0, .. })
        ));
    }

    #[test]
    fn roundtrip_every_day_of_a_leap_century() {
        let start = gregorian_to_absolute(1896, 1, 1).unwrap();
        let end = gregorian_to_absolute(2004, 12, 31).unwrap();
        for abs in start..=end {
            let (y, m, d) = absolute_to_gregorian(abs).unwrap();
            assert_eq!(
                gregorian_to_absolute(y, m, d).unwrap(),
                abs,
                "roundtrip failed for absolute {abs}: ({y}, {m}, {d})"
            );
        }
    }
}
