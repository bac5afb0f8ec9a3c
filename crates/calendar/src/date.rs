//! Jewish date with its paired Gregorian date.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

use crate::error::CalendarError;
use crate::gregorian::{self, MAX_GREGORIAN_YEAR, days_in_gregorian_month};
use crate::molad::{
    self, CHALAKIM_PER_DAY, CHALAKIM_PER_HOUR, CHALAKIM_PER_MINUTE, JEWISH_EPOCH,
    JEWISH_YEAR_OFFSET, days_in_jewish_month, is_jewish_leap_year, last_month_of_jewish_year,
};
use crate::month::{JewishMonth, Kviah};

/// Jewish year of the first supported day, 18 Teves 3761 (1 January 1).
pub const JEWISH_EPOCH_YEAR: i32 = 3761;

/// Largest Jewish year accepted by the constructors.
///
/// This is the year containing 31 December 9999; its months past that day
/// are rejected through the absolute-day range.
pub const MAX_JEWISH_YEAR: i32 = MAX_GREGORIAN_YEAR + JEWISH_YEAR_OFFSET + 1;

/// Unit used by [`JewishDate::forward`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateUnit {
    /// One civil day; Gregorian and Jewish fields both advance.
    Day,
    /// One Jewish month; the day of month is clamped to the new month.
    Month,
    /// One Jewish year; Adar II becomes Adar when the target year is common.
    Year,
}

/// A date held simultaneously in the Jewish and proleptic Gregorian calendars.
///
/// Both representations, the absolute day and the day of week are always
/// consistent. Every mutation validates first and then replaces all fields
/// at once; a failed mutation leaves the value unchanged.
///
/// Dates produced by [`JewishDate::molad`] also carry the molad time
/// (hours, minutes, chalakim). Those fields are metadata only: equality,
/// ordering and hashing use the absolute day alone.
///
/// # Example
///
/// ```
/// use luach_calendar::{JewishDate, JewishMonth};
///
/// let date = JewishDate::from_gregorian(2024, 10, 3).unwrap();
/// assert_eq!(date.jewish_year(), 5785);
/// assert_eq!(date.jewish_month(), JewishMonth::Tishrei);
/// assert_eq!(date.jewish_day_of_month(), 1);
///
/// let same = JewishDate::from_jewish(5785, JewishMonth::Tishrei, 1).unwrap();
/// assert_eq!(date, same);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct JewishDate {
    jewish_year: i32,
    jewish_month: JewishMonth,
    jewish_day: u8,
    gregorian_year: i32,
    gregorian_month: u8,
    gregorian_day: u8,
    absolute: i32,
    day_of_week: u8,
    molad_hours: u8,
    molad_minutes: u8,
    molad_chalakim: u8,
}

fn day_of_week(absolute: i32) -> u8 {
    // 1 = Sunday .. 7 = Shabbos
    (absolute % 7).unsigned_abs() as u8 + 1
}

fn validate_jewish_date(
    year: i32,
    month: JewishMonth,
    day: u8,
    hours: u8,
    minutes: u8,
    chalakim: u8,
) -> Result<(), CalendarError> {
    if year > MAX_JEWISH_YEAR {
        return Err(CalendarError::InvalidJewishYear {
            year,
            max: MAX_JEWISH_YEAR,
        });
    }
    let before_epoch = CalendarError::BeforeJewishEpoch {
        year,
        month: month.number(),
        day,
    };
    if year < JEWISH_EPOCH_YEAR {
        return Err(before_epoch);
    }
    let last = last_month_of_jewish_year(year);
    if month > last {
        return Err(CalendarError::InvalidJewishMonth {
            month: month.number(),
            last: last.number(),
        });
    }
    if !(1..=30).contains(&day) {
        return Err(CalendarError::InvalidJewishDay { day });
    }
    if year == JEWISH_EPOCH_YEAR
        && ((JewishMonth::Tishrei..JewishMonth::Teves).contains(&month)
            || (month == JewishMonth::Teves && day < 18))
    {
        return Err(before_epoch);
    }
    if hours > 23 || minutes > 59 || chalakim > 17 {
        return Err(CalendarError::InvalidMoladTime {
            hours,
            minutes,
            chalakim,
        });
    }
    Ok(())
}

impl JewishDate {
    /// Creates a date from a Gregorian year, month (1..=12) and day.
    ///
    /// A day past the end of the month (e.g. 31 April) is clamped to the
    /// month's last day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the year is outside `1..=9999`, the month
    /// outside `1..=12`, or the day outside `1..=31`.
    pub fn from_gregorian(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        gregorian::validate_gregorian_date(year, month, day)
            .inspect_err(|e| debug!(error = %e, "rejected Gregorian date"))?;
        let day = day.min(days_in_gregorian_month(month, year));
        Ok(Self::from_valid_gregorian(year, month, day))
    }

    /// Creates a date from a [`chrono::NaiveDate`].
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidGregorianYear`] for years outside
    /// `1..=9999`.
    pub fn from_naive_date(date: NaiveDate) -> Result<Self, CalendarError> {
        // chrono months and days are always in range
        Self::from_gregorian(date.year(), date.month() as u8, date.day() as u8)
    }

    /// Creates a date from a Jewish year, month and day of month.
    ///
    /// Day 30 of a 29-day month is clamped to the 29th.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the month does not exist in that year,
    /// the day is outside `1..=30`, or the date precedes 18 Teves 3761.
    pub fn from_jewish(year: i32, month: JewishMonth, day: u8) -> Result<Self, CalendarError> {
        Self::from_jewish_with_molad(year, month, day, 0, 0, 0)
    }

    /// Creates a date from Jewish fields plus a molad time of day.
    ///
    /// # Errors
    ///
    /// As [`from_jewish`](Self::from_jewish), and additionally
    /// [`CalendarError::InvalidMoladTime`] when hours, minutes or chalakim are
    /// outside `0..=23`, `0..=59` and `0..=17`.
    pub fn from_jewish_with_molad(
        year: i32,
        month: JewishMonth,
        day: u8,
        hours: u8,
        minutes: u8,
        chalakim: u8,
    ) -> Result<Self, CalendarError> {
        validate_jewish_date(year, month, day, hours, minutes, chalakim)
            .inspect_err(|e| debug!(error = %e, "rejected Jewish date"))?;
        let day = day.min(days_in_jewish_month(month, year));
        let absolute = gregorian::validate_absolute(i64::from(molad::jewish_to_absolute(
            year, month, day,
        )))?;
        let (gregorian_year, gregorian_month, gregorian_day) = gregorian::from_absolute(absolute);
        Ok(Self {
            jewish_year: year,
            jewish_month: month,
            jewish_day: day,
            gregorian_year,
            gregorian_month,
            gregorian_day,
            absolute,
            day_of_week: day_of_week(absolute),
            molad_hours: hours,
            molad_minutes: minutes,
            molad_chalakim: chalakim,
        })
    }

    /// Creates a date from an absolute day count (1 = 1 January 1).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidAbsoluteDate`] outside the supported range.
    pub fn from_absolute(absolute: i32) -> Result<Self, CalendarError> {
        let absolute = gregorian::validate_absolute(i64::from(absolute))?;
        Ok(Self::from_valid_absolute(absolute))
    }

    /// Creates the date on which a molad falls, with its time of day set.
    ///
    /// `molad` is counted in chalakim since the start of the molad count.
    /// The time fields are the raw offset into the day (hour 0 is 6 pm of
    /// the previous civil evening); [`molad`](Self::molad) applies the
    /// civil-clock correction.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidAbsoluteDate`] if the molad falls
    /// before 1 January 1 or after 31 December 9999.
    pub fn from_molad(molad: i64) -> Result<Self, CalendarError> {
        let conjunction_day = molad.div_euclid(CHALAKIM_PER_DAY);
        let absolute =
            gregorian::validate_absolute(conjunction_day.saturating_add(i64::from(JEWISH_EPOCH)))?;
        let mut date = Self::from_valid_absolute(absolute);
        date.set_molad_parts(molad.rem_euclid(CHALAKIM_PER_DAY));
        Ok(date)
    }

    fn from_valid_absolute(absolute: i32) -> Self {
        let (year, month, day) = gregorian::from_absolute(absolute);
        Self::from_valid_gregorian(year, month, day)
    }

    fn from_valid_gregorian(year: i32, month: u8, day: u8) -> Self {
        let absolute = gregorian::to_absolute(year, month, day);
        let (jewish_year, jewish_month, jewish_day) = molad::absolute_to_jewish(absolute, year);
        Self {
            jewish_year,
            jewish_month,
            jewish_day,
            gregorian_year: year,
            gregorian_month: month,
            gregorian_day: day,
            absolute,
            day_of_week: day_of_week(absolute),
            molad_hours: 0,
            molad_minutes: 0,
            molad_chalakim: 0,
        }
    }

    fn set_molad_parts(&mut self, parts: i64) {
        // parts < CHALAKIM_PER_DAY, so every component fits in u8
        let hours = parts / CHALAKIM_PER_HOUR;
        let rest = parts - hours * CHALAKIM_PER_HOUR;
        let minutes = rest / CHALAKIM_PER_MINUTE;
        self.molad_hours = hours as u8;
        self.molad_minutes = minutes as u8;
        self.molad_chalakim = (rest - minutes * CHALAKIM_PER_MINUTE) as u8;
    }

    // --- Setters -----------------------------------------------------------

    /// Sets the Gregorian date, recomputing the Jewish date.
    ///
    /// # Errors
    ///
    /// See [`from_gregorian`](Self::from_gregorian). On error `self` is unchanged.
    pub fn set_gregorian_date(&mut self, year: i32, month: u8, day: u8) -> Result<(), CalendarError> {
        *self = Self::from_gregorian(year, month, day)?;
        Ok(())
    }

    /// Sets the date from a [`chrono::NaiveDate`].
    ///
    /// # Errors
    ///
    /// See [`from_naive_date`](Self::from_naive_date). On error `self` is unchanged.
    pub fn set_naive_date(&mut self, date: NaiveDate) -> Result<(), CalendarError> {
        *self = Self::from_naive_date(date)?;
        Ok(())
    }

    /// Sets the Jewish date, recomputing the Gregorian date and clearing the
    /// molad time.
    ///
    /// # Errors
    ///
    /// See [`from_jewish`](Self::from_jewish). On error `self` is unchanged.
    pub fn set_jewish_date(
        &mut self,
        year: i32,
        month: JewishMonth,
        day: u8,
    ) -> Result<(), CalendarError> {
        *self = Self::from_jewish(year, month, day)?;
        Ok(())
    }

    /// Sets the Jewish date and molad time.
    ///
    /// # Errors
    ///
    /// See [`from_jewish_with_molad`](Self::from_jewish_with_molad). On error
    /// `self` is unchanged.
    pub fn set_jewish_date_with_molad(
        &mut self,
        year: i32,
        month: JewishMonth,
        day: u8,
        hours: u8,
        minutes: u8,
        chalakim: u8,
    ) -> Result<(), CalendarError> {
        *self = Self::from_jewish_with_molad(year, month, day, hours, minutes, chalakim)?;
        Ok(())
    }

    /// Changes only the Jewish year, keeping month and day.
    ///
    /// # Errors
    ///
    /// Fails when the current month does not exist in `year` (Adar II in a
    /// common year) or the result is out of range.
    pub fn set_jewish_year(&mut self, year: i32) -> Result<(), CalendarError> {
        self.set_jewish_date(year, self.jewish_month, self.jewish_day)
    }

    /// Changes only the Jewish month, keeping year and (clamped) day.
    ///
    /// # Errors
    ///
    /// Fails when `month` does not exist in the current year.
    pub fn set_jewish_month(&mut self, month: JewishMonth) -> Result<(), CalendarError> {
        self.set_jewish_date(self.jewish_year, month, self.jewish_day)
    }

    /// Changes only the Jewish day of month.
    ///
    /// # Errors
    ///
    /// Fails when `day` is outside `1..=30`.
    pub fn set_jewish_day_of_month(&mut self, day: u8) -> Result<(), CalendarError> {
        self.set_jewish_date(self.jewish_year, self.jewish_month, day)
    }

    /// Sets the date from an absolute day count.
    ///
    /// # Errors
    ///
    /// See [`from_absolute`](Self::from_absolute). On error `self` is unchanged.
    pub fn set_absolute_date(&mut self, absolute: i32) -> Result<(), CalendarError> {
        *self = Self::from_absolute(absolute)?;
        Ok(())
    }

    // --- Stepping ----------------------------------------------------------

    /// Moves the date forward by `amount` units.
    ///
    /// Day steps update both calendars one day at a time and keep the molad
    /// time fields. Month and year steps go through
    /// [`set_jewish_date`](Self::set_jewish_date).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidAmount`] for `amount == 0`, or a range
    /// error if the result would pass 31 December 9999. On error `self` is
    /// unchanged.
    pub fn forward(&mut self, unit: DateUnit, amount: u32) -> Result<(), CalendarError> {
        if amount == 0 {
            return Err(CalendarError::InvalidAmount { amount });
        }
        match unit {
            DateUnit::Day => {
                gregorian::validate_absolute(i64::from(self.absolute) + i64::from(amount))?;
                for _ in 0..amount {
                    self.step_forward();
                }
                Ok(())
            }
            DateUnit::Month => self.forward_months(amount),
            DateUnit::Year => self.forward_years(amount),
        }
    }

    /// Moves the date back by one day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::BeforeJewishEpoch`] when called on
    /// 1 January 1 (18 Teves 3761); `self` is unchanged.
    pub fn back(&mut self) -> Result<(), CalendarError> {
        if self.absolute <= 1 {
            return Err(CalendarError::BeforeJewishEpoch {
                year: JEWISH_EPOCH_YEAR,
                month: JewishMonth::Teves.number(),
                day: 17,
            });
        }

        if self.gregorian_day == 1 {
            if self.gregorian_month == 1 {
                self.gregorian_month = 12;
                self.gregorian_year -= 1;
            } else {
                self.gregorian_month -= 1;
            }
            self.gregorian_day = days_in_gregorian_month(self.gregorian_month, self.gregorian_year);
        } else {
            self.gregorian_day -= 1;
        }

        if self.jewish_day == 1 {
            let leap = self.is_jewish_leap_year();
            if self.jewish_month == JewishMonth::Tishrei {
                self.jewish_year -= 1;
            }
            self.jewish_month = self.jewish_month.previous_in_year(leap);
            self.jewish_day = days_in_jewish_month(self.jewish_month, self.jewish_year);
        } else {
            self.jewish_day -= 1;
        }

        self.day_of_week = if self.day_of_week == 1 { 7 } else { self.day_of_week - 1 };
        self.absolute -= 1;
        Ok(())
    }

    fn step_forward(&mut self) {
        if self.gregorian_day == days_in_gregorian_month(self.gregorian_month, self.gregorian_year)
        {
            self.gregorian_day = 1;
            if self.gregorian_month == 12 {
                self.gregorian_year += 1;
                self.gregorian_month = 1;
            } else {
                self.gregorian_month += 1;
            }
        } else {
            self.gregorian_day += 1;
        }

        if self.jewish_day == self.days_in_jewish_month() {
            let leap = self.is_jewish_leap_year();
            if self.jewish_month == JewishMonth::Elul {
                self.jewish_year += 1;
            }
            self.jewish_month = self.jewish_month.next_in_year(leap);
            self.jewish_day = 1;
        } else {
            self.jewish_day += 1;
        }

        self.day_of_week = if self.day_of_week == 7 { 1 } else { self.day_of_week + 1 };
        self.absolute += 1;
    }

    fn forward_months(&mut self, amount: u32) -> Result<(), CalendarError> {
        let (mut year, mut month, mut day) = (self.jewish_year, self.jewish_month, self.jewish_day);
        for _ in 0..amount {
            if month == JewishMonth::Elul {
                year += 1;
                if year > MAX_JEWISH_YEAR {
                    return Err(CalendarError::InvalidJewishYear {
                        year,
                        max: MAX_JEWISH_YEAR,
                    });
                }
            }
            month = month.next_in_year(is_jewish_leap_year(year));
            // each intermediate month clamps the day, as a sequence of single steps would
            day = day.min(days_in_jewish_month(month, year));
        }
        self.set_jewish_date(year, month, day)
    }

    fn forward_years(&mut self, amount: u32) -> Result<(), CalendarError> {
        let year = i32::try_from(amount)
            .ok()
            .and_then(|n| self.jewish_year.checked_add(n))
            .map_or(MAX_JEWISH_YEAR + 1, |y| y.min(MAX_JEWISH_YEAR + 1));
        let month = if self.jewish_month == JewishMonth::AdarII && !is_jewish_leap_year(year) {
            JewishMonth::Adar
        } else {
            self.jewish_month
        };
        self.set_jewish_date(year, month, self.jewish_day)
    }

    // --- Molad -------------------------------------------------------------

    /// Chalakim from the start of the molad count to the molad of this
    /// date's month.
    pub fn chalakim_since_molad_tohu(&self) -> i64 {
        molad::chalakim_since_molad_tohu(self.jewish_year, self.jewish_month)
    }

    /// Returns the molad of this date's month.
    ///
    /// The returned date is the civil day of the molad, with
    /// [`molad_hours`](Self::molad_hours), [`molad_minutes`](Self::molad_minutes)
    /// and [`molad_chalakim`](Self::molad_chalakim) set on a 24-hour clock.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidAbsoluteDate`] when the molad falls
    /// outside the supported range (only possible for Teves 3761).
    #[tracing::instrument(level = "trace", skip(self), fields(year = self.jewish_year, month = %self.jewish_month))]
    pub fn molad(&self) -> Result<JewishDate, CalendarError> {
        let mut molad = Self::from_molad(self.chalakim_since_molad_tohu())?;
        // the molad day starts at 6 pm; hours past 6 belong to the next civil day
        if molad.molad_hours >= 6 {
            molad.forward(DateUnit::Day, 1)?;
        }
        molad.molad_hours = (molad.molad_hours + 18) % 24;
        Ok(molad)
    }

    // --- Accessors ---------------------------------------------------------

    /// Returns the Jewish year.
    pub fn jewish_year(&self) -> i32 {
        self.jewish_year
    }

    /// Returns the Jewish month.
    pub fn jewish_month(&self) -> JewishMonth {
        self.jewish_month
    }

    /// Returns the Jewish day of month (1..=30).
    pub fn jewish_day_of_month(&self) -> u8 {
        self.jewish_day
    }

    /// Returns the Gregorian year.
    pub fn gregorian_year(&self) -> i32 {
        self.gregorian_year
    }

    /// Returns the Gregorian month (1..=12).
    pub fn gregorian_month(&self) -> u8 {
        self.gregorian_month
    }

    /// Returns the Gregorian day of month (1..=31).
    pub fn gregorian_day_of_month(&self) -> u8 {
        self.gregorian_day
    }

    /// Returns the absolute day count (1 = 1 January 1).
    pub fn absolute_date(&self) -> i32 {
        self.absolute
    }

    /// Returns the day of week, 1 (Sunday) to 7 (Shabbos).
    pub fn day_of_week(&self) -> u8 {
        self.day_of_week
    }

    /// Returns the day of week as a [`chrono::Weekday`].
    pub fn weekday(&self) -> Weekday {
        match self.day_of_week {
            1 => Weekday::Sun,
            2 => Weekday::Mon,
            3 => Weekday::Tue,
            4 => Weekday::Wed,
            5 => Weekday::Thu,
            6 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }

    /// Returns the Gregorian date as a [`chrono::NaiveDate`].
    pub fn naive_date(&self) -> NaiveDate {
        // Safety: years 1..=9999 are inside chrono's range and the fields
        // always form a valid date.
        NaiveDate::from_ymd_opt(
            self.gregorian_year,
            u32::from(self.gregorian_month),
            u32::from(self.gregorian_day),
        )
        .expect("JewishDate always holds a valid Gregorian date")
    }

    /// Returns the molad hour (0..=23); zero unless set from a molad.
    pub fn molad_hours(&self) -> u8 {
        self.molad_hours
    }

    /// Returns the molad minute (0..=59).
    pub fn molad_minutes(&self) -> u8 {
        self.molad_minutes
    }

    /// Returns the molad chalakim past the minute (0..=17).
    pub fn molad_chalakim(&self) -> u8 {
        self.molad_chalakim
    }

    /// Returns `true` if the Jewish year is a leap year.
    pub fn is_jewish_leap_year(&self) -> bool {
        is_jewish_leap_year(self.jewish_year)
    }

    /// Returns the number of days in the Jewish year.
    pub fn days_in_jewish_year(&self) -> i32 {
        molad::days_in_jewish_year(self.jewish_year)
    }

    /// Returns the number of days in the Jewish month.
    pub fn days_in_jewish_month(&self) -> u8 {
        days_in_jewish_month(self.jewish_month, self.jewish_year)
    }

    /// Returns `true` if Cheshvan has 30 days this year.
    pub fn is_cheshvan_long(&self) -> bool {
        molad::is_cheshvan_long(self.jewish_year)
    }

    /// Returns `true` if Kislev has 29 days this year.
    pub fn is_kislev_short(&self) -> bool {
        molad::is_kislev_short(self.jewish_year)
    }

    /// Returns the Cheshvan/Kislev pattern of the year.
    pub fn kviah(&self) -> Kviah {
        molad::kviah(self.jewish_year)
    }

    /// Returns the day's ordinal within the Jewish year (1 Tishrei = 1).
    pub fn days_since_start_of_jewish_year(&self) -> i32 {
        molad::days_since_start_of_jewish_year(self.jewish_year, self.jewish_month, self.jewish_day)
    }

    /// Returns the number of days in `month` (1..=12) of the Gregorian year.
    pub fn last_day_of_gregorian_month(&self, month: u8) -> u8 {
        days_in_gregorian_month(month, self.gregorian_year)
    }
}

impl PartialEq for JewishDate {
    fn eq(&self, other: &Self) -> bool {
        self.absolute == other.absolute
    }
}

impl Eq for JewishDate {}

impl Hash for JewishDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.absolute.hash(state);
    }
}

impl PartialOrd for JewishDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for JewishDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.absolute.cmp(&other.absolute)
    }
}

impl fmt::Display for JewishDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.jewish_month == JewishMonth::Adar && self.is_jewish_leap_year() {
            write!(f, "{} Adar I {}", self.jewish_day, self.jewish_year)
        } else {
            write!(f, "{} {} {}", self.jewish_day, self.jewish_month, self.jewish_year)
        }
    }
}
