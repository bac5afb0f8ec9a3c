//! Jewish months and year classifications.

use std::fmt;

use crate::error::CalendarError;

/// A Jewish month, numbered from Nissan as in the biblical count.
///
/// The civil year starts at Tishrei (7). In leap years the twelfth month is
/// Adar I and a thirteenth month, Adar II, follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum JewishMonth {
    /// Nissan (1).
    Nissan = 1,
    /// Iyar (2).
    Iyar = 2,
    /// Sivan (3).
    Sivan = 3,
    /// Tammuz (4).
    Tammuz = 4,
    /// Av (5).
    Av = 5,
    /// Elul (6).
    Elul = 6,
    /// Tishrei (7).
    Tishrei = 7,
    /// Cheshvan (8).
    Cheshvan = 8,
    /// Kislev (9).
    Kislev = 9,
    /// Teves (10).
    Teves = 10,
    /// Shevat (11).
    Shevat = 11,
    /// Adar (12), Adar I in a leap year.
    Adar = 12,
    /// Adar II (13), leap years only.
    AdarII = 13,
}

impl JewishMonth {
    /// All months in numeric order.
    pub const ALL: [JewishMonth; 13] = [
        JewishMonth::Nissan,
        JewishMonth::Iyar,
        JewishMonth::Sivan,
        JewishMonth::Tammuz,
        JewishMonth::Av,
        JewishMonth::Elul,
        JewishMonth::Tishrei,
        JewishMonth::Cheshvan,
        JewishMonth::Kislev,
        JewishMonth::Teves,
        JewishMonth::Shevat,
        JewishMonth::Adar,
        JewishMonth::AdarII,
    ];

    /// Returns the month number (Nissan = 1 .. Adar II = 13).
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Returns the month with the given number, or `None` outside 1..=13.
    pub fn from_number(number: u8) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(usize::from(i)))
            .copied()
    }

    /// Returns the month that follows this one within a year's sequence.
    ///
    /// Elul is followed by Tishrei (the year number changes there, which the
    /// caller tracks). Adar is followed by Adar II only in a leap year.
    pub fn next_in_year(self, leap_year: bool) -> Self {
        match self {
            JewishMonth::Nissan => JewishMonth::Iyar,
            JewishMonth::Iyar => JewishMonth::Sivan,
            JewishMonth::Sivan => JewishMonth::Tammuz,
            JewishMonth::Tammuz => JewishMonth::Av,
            JewishMonth::Av => JewishMonth::Elul,
            JewishMonth::Elul => JewishMonth::Tishrei,
            JewishMonth::Tishrei => JewishMonth::Cheshvan,
            JewishMonth::Cheshvan => JewishMonth::Kislev,
            JewishMonth::Kislev => JewishMonth::Teves,
            JewishMonth::Teves => JewishMonth::Shevat,
            JewishMonth::Shevat => JewishMonth::Adar,
            JewishMonth::Adar if leap_year => JewishMonth::AdarII,
            JewishMonth::Adar | JewishMonth::AdarII => JewishMonth::Nissan,
        }
    }

    /// Returns the month that precedes this one within a year's sequence.
    ///
    /// The inverse of [`next_in_year`](Self::next_in_year): Tishrei is
    /// preceded by Elul of the previous year, Nissan by Adar II in a leap
    /// year and by Adar otherwise.
    pub fn previous_in_year(self, leap_year: bool) -> Self {
        match self {
            JewishMonth::Nissan if leap_year => JewishMonth::AdarII,
            JewishMonth::Nissan | JewishMonth::AdarII => JewishMonth::Adar,
            JewishMonth::Iyar => JewishMonth::Nissan,
            JewishMonth::Sivan => JewishMonth::Iyar,
            JewishMonth::Tammuz => JewishMonth::Sivan,
            JewishMonth::Av => JewishMonth::Tammuz,
            JewishMonth::Elul => JewishMonth::Av,
            JewishMonth::Tishrei => JewishMonth::Elul,
            JewishMonth::Cheshvan => JewishMonth::Tishrei,
            JewishMonth::Kislev => JewishMonth::Cheshvan,
            JewishMonth::Teves => JewishMonth::Kislev,
            JewishMonth::Shevat => JewishMonth::Teves,
            JewishMonth::Adar => JewishMonth::Shevat,
        }
    }

    /// Returns the plain transliterated name of the month.
    pub fn name(self) -> &'static str {
        match self {
            JewishMonth::Nissan => "Nissan",
            JewishMonth::Iyar => "Iyar",
            JewishMonth::Sivan => "Sivan",
            JewishMonth::Tammuz => "Tammuz",
            JewishMonth::Av => "Av",
            JewishMonth::Elul => "Elul",
            JewishMonth::Tishrei => "Tishrei",
            JewishMonth::Cheshvan => "Cheshvan",
            JewishMonth::Kislev => "Kislev",
            JewishMonth::Teves => "Teves",
            JewishMonth::Shevat => "Shevat",
            JewishMonth::Adar => "Adar",
            JewishMonth::AdarII => "Adar II",
        }
    }
}

impl TryFrom<u8> for JewishMonth {
    type Error = CalendarError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::from_number(number).ok_or(CalendarError::InvalidJewishMonth {
            month: number,
            last: JewishMonth::AdarII.number(),
        })
    }
}

impl From<JewishMonth> for u8 {
    fn from(month: JewishMonth) -> Self {
        month.number()
    }
}

impl fmt::Display for JewishMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Length pattern of Cheshvan and Kislev in a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kviah {
    /// Both Cheshvan and Kislev have 29 days (353 or 383 day year).
    Chaserim,
    /// Cheshvan has 29 days and Kislev 30 (354 or 384 day year).
    Kesidran,
    /// Both Cheshvan and Kislev have 30 days (355 or 385 day year).
    Shelaimim,
}
