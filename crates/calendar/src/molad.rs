//! Molad arithmetic, leap years, year lengths and the dechiyos.
//!
//! All times are counted in chalakim (1/1080 hour) from Molad Tohu, the
//! reference new moon of year 1. Months advance by exactly
//! [`CHALAKIM_PER_MONTH`] (29 days 12 hours 793 chalakim).
//!
//! Functions here trust their arguments: years lie in
//! `1..=MAX_JEWISH_YEAR + 1` and months exist in their year. The public,
//! range-checked forms live in `year`.

use crate::month::{JewishMonth, Kviah};

/// Chalakim in one minute.
pub const CHALAKIM_PER_MINUTE: i64 = 18;

/// Chalakim in one hour.
pub const CHALAKIM_PER_HOUR: i64 = 1080;

/// Chalakim in one day.
pub const CHALAKIM_PER_DAY: i64 = 25_920;

/// Chalakim in one mean synodic month.
pub const CHALAKIM_PER_MONTH: i64 = 765_433;

/// Molad Tohu, in chalakim from the start of the count.
pub const CHALAKIM_MOLAD_TOHU: i64 = 31_524;

/// Absolute day offset of the Hebrew calendar's day zero.
pub(crate) const JEWISH_EPOCH: i32 = -1_373_429;

/// Difference between Jewish and Gregorian year numbers in autumn.
pub(crate) const JEWISH_YEAR_OFFSET: i32 = 3760;

// Dechiyos thresholds in chalakim past the start of the molad day.
const MOLAD_ZAKEN: i32 = 19_440;
const GATRAD: i32 = 9_924;
const BETUTAKFOT: i32 = 16_789;

/// Returns `true` if `year` is a Jewish leap year.
///
/// Years 3, 6, 8, 11, 14, 17 and 19 of each 19-year cycle are leap years.
pub(crate) fn is_jewish_leap_year(year: i32) -> bool {
    (7 * i64::from(year) + 1).rem_euclid(19) < 7
}

/// Returns the last month of `year`: Adar II in leap years, Adar otherwise.
pub(crate) fn last_month_of_jewish_year(year: i32) -> JewishMonth {
    if is_jewish_leap_year(year) {
        JewishMonth::AdarII
    } else {
        JewishMonth::Adar
    }
}

/// Returns the 1-based ordinal of `month` counted from Tishrei.
pub(crate) fn jewish_month_of_year(year: i32, month: JewishMonth) -> i32 {
    let leap = is_jewish_leap_year(year);
    let (offset, months) = if leap { (6, 13) } else { (5, 12) };
    (i32::from(month.number()) + offset) % months + 1
}

/// Chalakim from the start of the count to the molad of `month` in `year`.
pub(crate) fn chalakim_since_molad_tohu(year: i32, month: JewishMonth) -> i64 {
    let month_of_year = i64::from(jewish_month_of_year(year, month));
    let y = i64::from(year - 1);
    let months_elapsed =
        235 * (y / 19) + 12 * (y % 19) + (7 * (y % 19) + 1) / 19 + (month_of_year - 1);
    CHALAKIM_MOLAD_TOHU + CHALAKIM_PER_MONTH * months_elapsed
}

/// Days from the calendar's day zero to Rosh Hashanah of `year`.
///
/// The molad of Tishrei is split into a day and the chalakim into that day,
/// then the dechiyos decide the civil day.
pub(crate) fn jewish_calendar_elapsed_days(year: i32) -> i32 {
    let chalakim = chalakim_since_molad_tohu(year, JewishMonth::Tishrei);
    let molad_day = chalakim / CHALAKIM_PER_DAY;
    let molad_parts = chalakim - molad_day * CHALAKIM_PER_DAY;
    let molad_day =
        i32::try_from(molad_day).expect("supported years keep the day count within i32");
    let molad_parts = i32::try_from(molad_parts).expect("less than one day of chalakim");
    add_dechiyos(year, molad_day, molad_parts)
}

/// Applies the four postponement rules to a raw molad day.
///
/// Molad Zaken, GaTRaD and BeTuTaKFoT share a single one-day postponement.
/// Lo ADU Rosh is then checked against that result, never the raw day.
pub(crate) fn add_dechiyos(year: i32, molad_day: i32, molad_parts: i32) -> i32 {
    let mut rosh_hashana_day = molad_day;
    if molad_parts >= MOLAD_ZAKEN
        || (molad_day % 7 == 2 && molad_parts >= GATRAD && !is_jewish_leap_year(year))
        || (molad_day % 7 == 1 && molad_parts >= BETUTAKFOT && is_jewish_leap_year(year - 1))
    {
        rosh_hashana_day += 1;
    }
    // Lo ADU Rosh: not on Sunday, Wednesday or Friday.
    if matches!(rosh_hashana_day % 7, 0 | 3 | 5) {
        rosh_hashana_day += 1;
    }
    rosh_hashana_day
}

/// Number of days in `year`: one of 353, 354, 355, 383, 384 or 385.
pub(crate) fn days_in_jewish_year(year: i32) -> i32 {
    jewish_calendar_elapsed_days(year + 1) - jewish_calendar_elapsed_days(year)
}

/// Returns `true` if Cheshvan has 30 days in `year`.
pub(crate) fn is_cheshvan_long(year: i32) -> bool {
    days_in_jewish_year(year) % 10 == 5
}

/// Returns `true` if Kislev has 29 days in `year`.
pub(crate) fn is_kislev_short(year: i32) -> bool {
    days_in_jewish_year(year) % 10 == 3
}

/// Returns the Cheshvan/Kislev pattern of `year`.
pub(crate) fn kviah(year: i32) -> Kviah {
    match days_in_jewish_year(year) % 10 {
        5 => Kviah::Shelaimim,
        3 => Kviah::Chaserim,
        _ => Kviah::Kesidran,
    }
}

/// Number of days in `month` of `year` (29 or 30).
pub(crate) fn days_in_jewish_month(month: JewishMonth, year: i32) -> u8 {
    let short = match month {
        JewishMonth::Iyar
        | JewishMonth::Tammuz
        | JewishMonth::Elul
        | JewishMonth::Teves
        | JewishMonth::AdarII => true,
        JewishMonth::Cheshvan => !is_cheshvan_long(year),
        JewishMonth::Kislev => is_kislev_short(year),
        JewishMonth::Adar => !is_jewish_leap_year(year),
        _ => false,
    };
    if short { 29 } else { 30 }
}

/// Days from the day before Rosh Hashanah of `year` up to the given date.
///
/// 1 Tishrei yields 1.
pub(crate) fn days_since_start_of_jewish_year(year: i32, month: JewishMonth, day: u8) -> i32 {
    let leap = is_jewish_leap_year(year);
    let mut elapsed = i32::from(day);
    let mut m = JewishMonth::Tishrei;
    // Elul is the last month of every year; an unreachable month stops there.
    while m != month && m != JewishMonth::Elul {
        elapsed += i32::from(days_in_jewish_month(m, year));
        m = m.next_in_year(leap);
    }
    elapsed
}

/// Absolute day of a Jewish date, without validation.
pub(crate) fn jewish_to_absolute(year: i32, month: JewishMonth, day: u8) -> i32 {
    days_since_start_of_jewish_year(year, month, day)
        + jewish_calendar_elapsed_days(year)
        + JEWISH_EPOCH
}

/// Jewish `(year, month, day)` of an absolute day, given its Gregorian year.
///
/// The Jewish year is never smaller than `gregorian_year + 3760`, so the
/// search moves forward at most once. The month search starts at Tishrei or
/// Nissan, whichever precedes the day.
pub(crate) fn absolute_to_jewish(absolute: i32, gregorian_year: i32) -> (i32, JewishMonth, u8) {
    let mut year = gregorian_year + JEWISH_YEAR_OFFSET;
    while absolute >= jewish_to_absolute(year + 1, JewishMonth::Tishrei, 1) {
        year += 1;
    }
    let leap = is_jewish_leap_year(year);
    let mut month = if absolute < jewish_to_absolute(year, JewishMonth::Nissan, 1) {
        JewishMonth::Tishrei
    } else {
        JewishMonth::Nissan
    };
    while absolute > jewish_to_absolute(year, month, days_in_jewish_month(month, year)) {
        month = month.next_in_year(leap);
    }
    let day = absolute - jewish_to_absolute(year, month, 1) + 1;
    // 1..=30 by construction.
    (year, month, day as u8)
}
