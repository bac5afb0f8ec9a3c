//! `JewishCalendar`: a date plus location flags, with occasion predicates.

use chrono::NaiveDate;
use luach_calendar::{CalendarError, DateUnit, JewishDate, JewishMonth};

use crate::yom_tov::{YomTov, classify};

/// A [`JewishDate`] viewed through the holiday calendar.
///
/// Whether a day is a holiday depends on location (the diaspora keeps a
/// second festival day) and on whether the modern Israeli commemorations
/// are wanted. Both are plain flags set with the builder methods.
///
/// # Example
///
/// ```
/// use luach_holidays::{JewishCalendar, YomTov};
/// use luach_calendar::JewishMonth;
///
/// let cal = JewishCalendar::from_jewish(5785, JewishMonth::Nissan, 16).unwrap();
/// assert_eq!(cal.yom_tov(), Some(YomTov::Pesach));
/// assert_eq!(cal.day_of_omer(), Some(1));
///
/// let cal = cal.with_in_israel(true);
/// assert_eq!(cal.yom_tov(), Some(YomTov::CholHamoedPesach));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JewishCalendar {
    date: JewishDate,
    in_israel: bool,
    use_modern_holidays: bool,
}

impl JewishCalendar {
    /// Wraps a date with diaspora rules and no modern holidays.
    pub fn new(date: JewishDate) -> Self {
        Self {
            date,
            in_israel: false,
            use_modern_holidays: false,
        }
    }

    /// Creates a calendar for a Gregorian date.
    ///
    /// # Errors
    ///
    /// See [`JewishDate::from_gregorian`].
    pub fn from_gregorian(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        JewishDate::from_gregorian(year, month, day).map(Self::new)
    }

    /// Creates a calendar for a Jewish date.
    ///
    /// # Errors
    ///
    /// See [`JewishDate::from_jewish`].
    pub fn from_jewish(year: i32, month: JewishMonth, day: u8) -> Result<Self, CalendarError> {
        JewishDate::from_jewish(year, month, day).map(Self::new)
    }

    /// Creates a calendar for a [`chrono::NaiveDate`].
    ///
    /// # Errors
    ///
    /// See [`JewishDate::from_naive_date`].
    pub fn from_naive_date(date: NaiveDate) -> Result<Self, CalendarError> {
        JewishDate::from_naive_date(date).map(Self::new)
    }

    /// Sets whether Israel rules apply.
    pub fn with_in_israel(mut self, in_israel: bool) -> Self {
        self.in_israel = in_israel;
        self
    }

    /// Sets whether Yom HaShoah, Yom HaZikaron, Yom HaAtzmaut and Yom
    /// Yerushalayim are reported.
    pub fn with_modern_holidays(mut self, use_modern_holidays: bool) -> Self {
        self.use_modern_holidays = use_modern_holidays;
        self
    }

    /// Returns `true` if Israel rules apply.
    pub fn in_israel(&self) -> bool {
        self.in_israel
    }

    /// Returns `true` if modern holidays are reported.
    pub fn use_modern_holidays(&self) -> bool {
        self.use_modern_holidays
    }

    /// Returns the underlying date.
    pub fn date(&self) -> &JewishDate {
        &self.date
    }

    /// Returns the underlying date for mutation.
    pub fn date_mut(&mut self) -> &mut JewishDate {
        &mut self.date
    }

    // --- Date forwarding -----------------------------------------------------

    /// Returns the Jewish year.
    pub fn jewish_year(&self) -> i32 {
        self.date.jewish_year()
    }

    /// Returns the Jewish month.
    pub fn jewish_month(&self) -> JewishMonth {
        self.date.jewish_month()
    }

    /// Returns the Jewish day of month.
    pub fn jewish_day_of_month(&self) -> u8 {
        self.date.jewish_day_of_month()
    }

    /// Returns the Gregorian year.
    pub fn gregorian_year(&self) -> i32 {
        self.date.gregorian_year()
    }

    /// Returns the Gregorian month (1..=12).
    pub fn gregorian_month(&self) -> u8 {
        self.date.gregorian_month()
    }

    /// Returns the Gregorian day of month.
    pub fn gregorian_day_of_month(&self) -> u8 {
        self.date.gregorian_day_of_month()
    }

    /// Returns the day of week, 1 (Sunday) to 7 (Shabbos).
    pub fn day_of_week(&self) -> u8 {
        self.date.day_of_week()
    }

    /// Returns the absolute day count.
    pub fn absolute_date(&self) -> i32 {
        self.date.absolute_date()
    }

    /// Returns the Gregorian date as a [`chrono::NaiveDate`].
    pub fn naive_date(&self) -> NaiveDate {
        self.date.naive_date()
    }

    /// Returns `true` if the Jewish year is a leap year.
    pub fn is_jewish_leap_year(&self) -> bool {
        self.date.is_jewish_leap_year()
    }

    /// Sets the Gregorian date.
    ///
    /// # Errors
    ///
    /// See [`JewishDate::set_gregorian_date`].
    pub fn set_gregorian_date(&mut self, year: i32, month: u8, day: u8) -> Result<(), CalendarError> {
        self.date.set_gregorian_date(year, month, day)
    }

    /// Sets the Jewish date.
    ///
    /// # Errors
    ///
    /// See [`JewishDate::set_jewish_date`].
    pub fn set_jewish_date(
        &mut self,
        year: i32,
        month: JewishMonth,
        day: u8,
    ) -> Result<(), CalendarError> {
        self.date.set_jewish_date(year, month, day)
    }

    /// Moves the date forward.
    ///
    /// # Errors
    ///
    /// See [`JewishDate::forward`].
    pub fn forward(&mut self, unit: DateUnit, amount: u32) -> Result<(), CalendarError> {
        self.date.forward(unit, amount)
    }

    /// Moves the date back one day.
    ///
    /// # Errors
    ///
    /// See [`JewishDate::back`].
    pub fn back(&mut self) -> Result<(), CalendarError> {
        self.date.back()
    }

    // --- Occasions -----------------------------------------------------------

    /// Returns the occasion of the day, if any.
    ///
    /// At most one occasion is returned; Rosh Chodesh is reported separately
    /// through [`is_rosh_chodesh`](Self::is_rosh_chodesh) and
    /// [`occasions`](Self::occasions).
    pub fn yom_tov(&self) -> Option<YomTov> {
        classify(&self.date, self.in_israel, self.use_modern_holidays)
    }

    /// Returns every occasion of the day, including Rosh Chodesh.
    pub fn occasions(&self) -> Vec<YomTov> {
        let mut occasions: Vec<YomTov> = self.yom_tov().into_iter().collect();
        if self.is_rosh_chodesh() {
            occasions.push(YomTov::RoshChodesh);
        }
        occasions
    }

    /// Returns `true` on a festival or festive day.
    ///
    /// Erev days are excluded, except Hoshana Rabba and the last day of
    /// Chol Hamoed Pesach. Fasts other than Yom Kippur are excluded.
    pub fn is_yom_tov(&self) -> bool {
        let Some(yom_tov) = self.yom_tov() else {
            return false;
        };
        let festive_erev = yom_tov == YomTov::HoshanaRabba
            || (yom_tov == YomTov::CholHamoedPesach && self.jewish_day_of_month() == 20);
        if self.is_erev_yom_tov() && !festive_erev {
            return false;
        }
        !(self.is_taanis() && yom_tov != YomTov::YomKippur)
    }

    /// Returns `true` on a festival day on which work is forbidden.
    pub fn is_yom_tov_assur_bemelacha(&self) -> bool {
        matches!(
            self.yom_tov(),
            Some(
                YomTov::Pesach
                    | YomTov::Shavuos
                    | YomTov::Succos
                    | YomTov::SheminiAtzeres
                    | YomTov::SimchasTorah
                    | YomTov::RoshHashana
                    | YomTov::YomKippur
            )
        )
    }

    /// Returns `true` on Shabbos or a festival day on which work is forbidden.
    pub fn is_assur_bemelacha(&self) -> bool {
        self.day_of_week() == 7 || self.is_yom_tov_assur_bemelacha()
    }

    /// Returns `true` if candles are lit this evening for the coming day.
    pub fn has_candle_lighting(&self) -> bool {
        self.is_tomorrow_shabbos_or_yom_tov()
    }

    /// Returns `true` if tomorrow is Shabbos or a festival day.
    pub fn is_tomorrow_shabbos_or_yom_tov(&self) -> bool {
        self.day_of_week() == 6 || self.is_erev_yom_tov() || self.is_erev_yom_tov_sheni()
    }

    /// Returns `true` on the eve of a festival (including Hoshana Rabba and
    /// the sixth day of Pesach).
    pub fn is_erev_yom_tov(&self) -> bool {
        match self.yom_tov() {
            Some(
                YomTov::ErevPesach
                | YomTov::ErevShavuos
                | YomTov::ErevRoshHashana
                | YomTov::ErevYomKippur
                | YomTov::ErevSuccos
                | YomTov::HoshanaRabba,
            ) => true,
            Some(YomTov::CholHamoedPesach) => self.jewish_day_of_month() == 20,
            _ => false,
        }
    }

    /// Returns `true` on a first festival day that is followed by a second one.
    pub fn is_erev_yom_tov_sheni(&self) -> bool {
        let day = self.jewish_day_of_month();
        match self.jewish_month() {
            JewishMonth::Tishrei if day == 1 => true,
            _ if self.in_israel => false,
            JewishMonth::Nissan => day == 15 || day == 21,
            JewishMonth::Tishrei => day == 15 || day == 22,
            JewishMonth::Sivan => day == 6,
            _ => false,
        }
    }

    /// Returns `true` during the ten days from Rosh Hashanah to Yom Kippur.
    pub fn is_aseres_yemei_teshuva(&self) -> bool {
        self.jewish_month() == JewishMonth::Tishrei && self.jewish_day_of_month() <= 10
    }

    /// Returns `true` on the intermediate days of Pesach.
    pub fn is_cholhamoed_pesach(&self) -> bool {
        self.yom_tov() == Some(YomTov::CholHamoedPesach)
    }

    /// Returns `true` on the intermediate days of Succos, Hoshana Rabba included.
    pub fn is_cholhamoed_succos(&self) -> bool {
        matches!(
            self.yom_tov(),
            Some(YomTov::CholHamoedSuccos | YomTov::HoshanaRabba)
        )
    }

    /// Returns `true` on the intermediate days of Pesach or Succos.
    pub fn is_cholhamoed(&self) -> bool {
        self.is_cholhamoed_pesach() || self.is_cholhamoed_succos()
    }

    /// Returns `true` on a public fast day, Yom Kippur included.
    pub fn is_taanis(&self) -> bool {
        matches!(
            self.yom_tov(),
            Some(
                YomTov::SeventeenOfTammuz
                    | YomTov::TishaBeav
                    | YomTov::YomKippur
                    | YomTov::FastOfGedalyah
                    | YomTov::TenthOfTeves
                    | YomTov::FastOfEsther
            )
        )
    }

    /// Returns `true` on the first day of a month (not Tishrei) or the 30th.
    pub fn is_rosh_chodesh(&self) -> bool {
        let day = self.jewish_day_of_month();
        (day == 1 && self.jewish_month() != JewishMonth::Tishrei) || day == 30
    }

    /// Returns `true` on the 29th of any month but Elul.
    pub fn is_erev_rosh_chodesh(&self) -> bool {
        self.jewish_day_of_month() == 29 && self.jewish_month() != JewishMonth::Elul
    }

    /// Returns `true` on one of the eight days of Chanukah.
    pub fn is_chanukah(&self) -> bool {
        self.yom_tov() == Some(YomTov::Chanukah)
    }

    /// Returns the day of Chanukah (1..=8), or `None` outside Chanukah.
    pub fn day_of_chanukah(&self) -> Option<u8> {
        if !self.is_chanukah() {
            return None;
        }
        let day = self.jewish_day_of_month();
        match self.jewish_month() {
            JewishMonth::Kislev => Some(day - 24),
            _ if self.date.is_kislev_short() => Some(day + 5),
            _ => Some(day + 6),
        }
    }

    /// Returns the day of the Omer count (1..=49), or `None` outside it.
    pub fn day_of_omer(&self) -> Option<u8> {
        let day = self.jewish_day_of_month();
        match self.jewish_month() {
            JewishMonth::Nissan if day >= 16 => Some(day - 15),
            JewishMonth::Iyar => Some(day + 15),
            JewishMonth::Sivan if day < 6 => Some(day + 44),
            _ => None,
        }
    }
}

impl From<JewishDate> for JewishCalendar {
    fn from(date: JewishDate) -> Self {
        Self::new(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cal(year: i32, month: JewishMonth, day: u8) -> JewishCalendar {
        JewishCalendar::from_jewish(year, month, day).unwrap()
    }

    #[test]
    fn defaults_are_diaspora_without_modern() {
        let c = cal(5785, JewishMonth::Nissan, 1);
        assert!(!c.in_israel());
        assert!(!c.use_modern_holidays());
        let c = c.with_in_israel(true).with_modern_holidays(true);
        assert!(c.in_israel());
        assert!(c.use_modern_holidays());
    }

    #[test]
    fn omer_bounds() {
        assert_eq!(cal(5785, JewishMonth::Nissan, 15).day_of_omer(), None);
        assert_eq!(cal(5785, JewishMonth::Nissan, 16).day_of_omer(), Some(1));
        assert_eq!(cal(5785, JewishMonth::Nissan, 30).day_of_omer(), Some(15));
        assert_eq!(cal(5785, JewishMonth::Iyar, 1).day_of_omer(), Some(16));
        assert_eq!(cal(5785, JewishMonth::Sivan, 5).day_of_omer(), Some(49));
        assert_eq!(cal(5785, JewishMonth::Sivan, 6).day_of_omer(), None);
    }

    #[test]
    fn rosh_chodesh() {
        assert!(cal(5785, JewishMonth::Cheshvan, 1).is_rosh_chodesh());
        assert!(cal(5785, JewishMonth::Tishrei, 30).is_rosh_chodesh());
        assert!(!cal(5785, JewishMonth::Tishrei, 1).is_rosh_chodesh());
        assert!(cal(5785, JewishMonth::Tishrei, 29).is_erev_rosh_chodesh());
        assert!(!cal(5785, JewishMonth::Elul, 29).is_erev_rosh_chodesh());
    }

    #[test]
    fn occasions_include_rosh_chodesh_on_chanukah() {
        let c = cal(5785, JewishMonth::Teves, 1);
        assert_eq!(c.occasions(), vec![YomTov::Chanukah, YomTov::RoshChodesh]);
        assert!(cal(5785, JewishMonth::Cheshvan, 5).occasions().is_empty());
    }

    #[test]
    fn erev_yom_tov_sheni() {
        assert!(cal(5785, JewishMonth::Tishrei, 1).is_erev_yom_tov_sheni());
        assert!(cal(5785, JewishMonth::Tishrei, 1).with_in_israel(true).is_erev_yom_tov_sheni());
        assert!(cal(5785, JewishMonth::Sivan, 6).is_erev_yom_tov_sheni());
        assert!(!cal(5785, JewishMonth::Sivan, 6).with_in_israel(true).is_erev_yom_tov_sheni());
    }

    #[test]
    fn aseres_yemei_teshuva() {
        assert!(cal(5785, JewishMonth::Tishrei, 10).is_aseres_yemei_teshuva());
        assert!(!cal(5785, JewishMonth::Tishrei, 11).is_aseres_yemei_teshuva());
    }

    #[test]
    fn forwarding_mutates_inner_date() {
        let mut c = cal(5784, JewishMonth::Elul, 29);
        c.forward(DateUnit::Day, 1).unwrap();
        assert_eq!(c.yom_tov(), Some(YomTov::RoshHashana));
        assert_eq!(c.date().jewish_year(), 5785);
        c.back().unwrap();
        assert_eq!(c.yom_tov(), Some(YomTov::ErevRoshHashana));
        c.date_mut().set_jewish_date(5785, JewishMonth::Tishrei, 10).unwrap();
        assert_eq!(c.yom_tov(), Some(YomTov::YomKippur));
    }
}
