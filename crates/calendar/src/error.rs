//! Error types for the luach-calendar crate.

/// Error type for all fallible operations in the luach-calendar crate.
///
/// Every variant describes an out-of-domain argument. Validation happens
/// before any field of a [`JewishDate`](crate::JewishDate) is touched, so a
/// returned error always leaves the receiver unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a Gregorian year is outside the supported range.
    #[error("invalid Gregorian year: {year} (must be 1..={max})")]
    InvalidGregorianYear {
        /// The invalid year that was provided.
        year: i32,
        /// The largest supported Gregorian year.
        max: i32,
    },

    /// Returned when a Gregorian month is outside 1..=12.
    #[error("invalid Gregorian month: {month} (must be 1..=12)")]
    InvalidGregorianMonth {
        /// The invalid month that was provided.
        month: u8,
    },

    /// Returned when a Gregorian day of month is zero or larger than 31.
    #[error("invalid Gregorian day: {day} (must be 1..=31)")]
    InvalidGregorianDay {
        /// The invalid day that was provided.
        day: u8,
    },

    /// Returned when a Jewish year is past the supported range.
    #[error("invalid Jewish year: {year} (must be 1..={max})")]
    InvalidJewishYear {
        /// The invalid year that was provided.
        year: i32,
        /// The largest supported Jewish year.
        max: i32,
    },

    /// Returned when a Jewish month is not valid for the year it is used in.
    ///
    /// Adar II (13) only exists in leap years.
    #[error("invalid Jewish month: {month} (must be 1..={last})")]
    InvalidJewishMonth {
        /// The invalid month number.
        month: u8,
        /// The last month of the year in question (12 or 13).
        last: u8,
    },

    /// Returned when a Jewish day of month is zero or larger than 30.
    #[error("invalid Jewish day: {day} (must be 1..=30)")]
    InvalidJewishDay {
        /// The invalid day that was provided.
        day: u8,
    },

    /// Returned for Jewish dates earlier than 18 Teves 3761 (1 January 1).
    #[error("Jewish date {day}/{month}/{year} is before 18 Teves 3761, the first supported day")]
    BeforeJewishEpoch {
        /// Jewish year of the rejected date.
        year: i32,
        /// Jewish month number of the rejected date.
        month: u8,
        /// Day of month of the rejected date.
        day: u8,
    },

    /// Returned when an absolute day count is outside the supported range.
    #[error("invalid absolute date: {absolute} (must be 1..={max})")]
    InvalidAbsoluteDate {
        /// The rejected absolute day (may be saturated for huge inputs).
        absolute: i64,
        /// The largest supported absolute day.
        max: i32,
    },

    /// Returned when a molad time component is out of range.
    #[error(
        "invalid molad time {hours}h {minutes}m {chalakim}p (hours 0..=23, minutes 0..=59, chalakim 0..=17)"
    )]
    InvalidMoladTime {
        /// Hours component.
        hours: u8,
        /// Minutes component.
        minutes: u8,
        /// Chalakim component.
        chalakim: u8,
    },

    /// Returned when a stepping operation is asked to move zero units.
    #[error("invalid step amount: {amount} (must be >= 1)")]
    InvalidAmount {
        /// The rejected amount.
        amount: u32,
    },
}
