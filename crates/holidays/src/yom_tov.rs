//! Occasion codes and the per-month classification rules.

use std::fmt;

use luach_calendar::{JewishDate, JewishMonth};

/// A holiday, fast or other fixed occasion.
///
/// The numeric [`code`](YomTov::code) of each variant is stable. Code 20 is
/// reserved and never produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum YomTov {
    /// 14 Nissan.
    ErevPesach = 0,
    /// First and last days of Pesach (two each in the diaspora).
    Pesach = 1,
    /// Intermediate days of Pesach.
    CholHamoedPesach = 2,
    /// 14 Iyar.
    PesachSheni = 3,
    /// 5 Sivan.
    ErevShavuos = 4,
    /// 6 Sivan, and 7 Sivan in the diaspora.
    Shavuos = 5,
    /// Fast of 17 Tammuz, postponed to Sunday when it falls on Shabbos.
    SeventeenOfTammuz = 6,
    /// Fast of 9 Av, postponed to Sunday when it falls on Shabbos.
    TishaBeav = 7,
    /// 15 Av.
    TuBeav = 8,
    /// 29 Elul.
    ErevRoshHashana = 9,
    /// 1 and 2 Tishrei.
    RoshHashana = 10,
    /// Fast of Gedalyah, 3 Tishrei or the following Sunday.
    FastOfGedalyah = 11,
    /// 9 Tishrei.
    ErevYomKippur = 12,
    /// 10 Tishrei.
    YomKippur = 13,
    /// 14 Tishrei.
    ErevSuccos = 14,
    /// First day of Succos (two in the diaspora).
    Succos = 15,
    /// Intermediate days of Succos before Hoshana Rabba.
    CholHamoedSuccos = 16,
    /// 21 Tishrei.
    HoshanaRabba = 17,
    /// 22 Tishrei (also Simchas Torah in Israel).
    SheminiAtzeres = 18,
    /// 23 Tishrei, diaspora only.
    SimchasTorah = 19,
    /// 25 Kislev through 2 or 3 Teves.
    Chanukah = 21,
    /// Fast of 10 Teves.
    TenthOfTeves = 22,
    /// 15 Shevat.
    TuBeshvat = 23,
    /// Fast of Esther, moved to Thursday when 13 Adar is Friday or Shabbos.
    FastOfEsther = 24,
    /// 14 Adar (Adar II in a leap year).
    Purim = 25,
    /// 15 Adar (Adar II in a leap year).
    ShushanPurim = 26,
    /// 14 Adar I.
    PurimKatan = 27,
    /// First day of a month, or the 30th of the previous month.
    RoshChodesh = 28,
    /// Yom HaShoah, moved away from Friday, Shabbos and Sunday.
    YomHashoah = 29,
    /// Yom HaZikaron, moved away from Thursday, Friday, Shabbos and Sunday.
    YomHazikaron = 30,
    /// Yom HaAtzmaut, the day after Yom HaZikaron.
    YomHaatzmaut = 31,
    /// 28 Iyar.
    YomYerushalayim = 32,
}

impl YomTov {
    /// Returns the stable numeric code of the occasion.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Returns the occasion with the given code, or `None` for 20 and codes past 32.
    pub fn from_code(code: u8) -> Option<Self> {
        let yom_tov = match code {
            0 => Self::ErevPesach,
            1 => Self::Pesach,
            2 => Self::CholHamoedPesach,
            3 => Self::PesachSheni,
            4 => Self::ErevShavuos,
            5 => Self::Shavuos,
            6 => Self::SeventeenOfTammuz,
            7 => Self::TishaBeav,
            8 => Self::TuBeav,
            9 => Self::ErevRoshHashana,
            10 => Self::RoshHashana,
            11 => Self::FastOfGedalyah,
            12 => Self::ErevYomKippur,
            13 => Self::YomKippur,
            14 => Self::ErevSuccos,
            15 => Self::Succos,
            16 => Self::CholHamoedSuccos,
            17 => Self::HoshanaRabba,
            18 => Self::SheminiAtzeres,
            19 => Self::SimchasTorah,
            21 => Self::Chanukah,
            22 => Self::TenthOfTeves,
            23 => Self::TuBeshvat,
            24 => Self::FastOfEsther,
            25 => Self::Purim,
            26 => Self::ShushanPurim,
            27 => Self::PurimKatan,
            28 => Self::RoshChodesh,
            29 => Self::YomHashoah,
            30 => Self::YomHazikaron,
            31 => Self::YomHaatzmaut,
            32 => Self::YomYerushalayim,
            _ => return None,
        };
        Some(yom_tov)
    }

    /// Returns a plain transliterated name.
    pub fn name(self) -> &'static str {
        match self {
            Self::ErevPesach => "Erev Pesach",
            Self::Pesach => "Pesach",
            Self::CholHamoedPesach => "Chol Hamoed Pesach",
            Self::PesachSheni => "Pesach Sheni",
            Self::ErevShavuos => "Erev Shavuos",
            Self::Shavuos => "Shavuos",
            Self::SeventeenOfTammuz => "Seventeenth of Tammuz",
            Self::TishaBeav => "Tishah B'Av",
            Self::TuBeav => "Tu B'Av",
            Self::ErevRoshHashana => "Erev Rosh Hashana",
            Self::RoshHashana => "Rosh Hashana",
            Self::FastOfGedalyah => "Fast of Gedalyah",
            Self::ErevYomKippur => "Erev Yom Kippur",
            Self::YomKippur => "Yom Kippur",
            Self::ErevSuccos => "Erev Succos",
            Self::Succos => "Succos",
            Self::CholHamoedSuccos => "Chol Hamoed Succos",
            Self::HoshanaRabba => "Hoshana Rabba",
            Self::SheminiAtzeres => "Shemini Atzeres",
            Self::SimchasTorah => "Simchas Torah",
            Self::Chanukah => "Chanukah",
            Self::TenthOfTeves => "Tenth of Teves",
            Self::TuBeshvat => "Tu B'Shvat",
            Self::FastOfEsther => "Fast of Esther",
            Self::Purim => "Purim",
            Self::ShushanPurim => "Shushan Purim",
            Self::PurimKatan => "Purim Katan",
            Self::RoshChodesh => "Rosh Chodesh",
            Self::YomHashoah => "Yom HaShoah",
            Self::YomHazikaron => "Yom HaZikaron",
            Self::YomHaatzmaut => "Yom HaAtzmaut",
            Self::YomYerushalayim => "Yom Yerushalayim",
        }
    }
}

impl fmt::Display for YomTov {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Day-of-week numbers as used by JewishDate.
const SUNDAY: u8 = 1;
const MONDAY: u8 = 2;
const TUESDAY: u8 = 3;
const WEDNESDAY: u8 = 4;
const THURSDAY: u8 = 5;
const FRIDAY: u8 = 6;
const SHABBOS: u8 = 7;

/// Classifies a date. Rosh Chodesh is not reported here; it can coincide
/// with Chanukah and is exposed through the calendar's predicates.
pub(crate) fn classify(date: &JewishDate, in_israel: bool, modern: bool) -> Option<YomTov> {
    let day = date.jewish_day_of_month();
    let dow = date.day_of_week();

    match date.jewish_month() {
        JewishMonth::Nissan => match day {
            14 => Some(YomTov::ErevPesach),
            15 | 21 => Some(YomTov::Pesach),
            16 | 22 if !in_israel => Some(YomTov::Pesach),
            16..=20 => Some(YomTov::CholHamoedPesach),
            26 if modern && dow == THURSDAY => Some(YomTov::YomHashoah),
            28 if modern && dow == MONDAY => Some(YomTov::YomHashoah),
            27 if modern && dow != SUNDAY && dow != FRIDAY => Some(YomTov::YomHashoah),
            _ => None,
        },
        JewishMonth::Iyar => {
            if modern && is_yom_hazikaron(day, dow) {
                Some(YomTov::YomHazikaron)
            } else if modern && is_yom_haatzmaut(day, dow) {
                Some(YomTov::YomHaatzmaut)
            } else if day == 14 {
                Some(YomTov::PesachSheni)
            } else if modern && day == 28 {
                Some(YomTov::YomYerushalayim)
            } else {
                None
            }
        }
        JewishMonth::Sivan => match day {
            5 => Some(YomTov::ErevShavuos),
            6 => Some(YomTov::Shavuos),
            7 if !in_israel => Some(YomTov::Shavuos),
            _ => None,
        },
        JewishMonth::Tammuz => match (day, dow) {
            (17, d) if d != SHABBOS => Some(YomTov::SeventeenOfTammuz),
            (18, SUNDAY) => Some(YomTov::SeventeenOfTammuz),
            _ => None,
        },
        JewishMonth::Av => match (day, dow) {
            (9, d) if d != SHABBOS => Some(YomTov::TishaBeav),
            (10, SUNDAY) => Some(YomTov::TishaBeav),
            (15, _) => Some(YomTov::TuBeav),
            _ => None,
        },
        JewishMonth::Elul => (day == 29).then_some(YomTov::ErevRoshHashana),
        JewishMonth::Tishrei => match (day, dow) {
            (1 | 2, _) => Some(YomTov::RoshHashana),
            (3, d) if d != SHABBOS => Some(YomTov::FastOfGedalyah),
            (4, SUNDAY) => Some(YomTov::FastOfGedalyah),
            (9, _) => Some(YomTov::ErevYomKippur),
            (10, _) => Some(YomTov::YomKippur),
            (14, _) => Some(YomTov::ErevSuccos),
            (15, _) => Some(YomTov::Succos),
            (16, _) if !in_israel => Some(YomTov::Succos),
            (16..=20, _) => Some(YomTov::CholHamoedSuccos),
            (21, _) => Some(YomTov::HoshanaRabba),
            (22, _) => Some(YomTov::SheminiAtzeres),
            (23, _) if !in_israel => Some(YomTov::SimchasTorah),
            _ => None,
        },
        JewishMonth::Cheshvan => None,
        JewishMonth::Kislev => (day >= 25).then_some(YomTov::Chanukah),
        JewishMonth::Teves => match day {
            1 | 2 => Some(YomTov::Chanukah),
            3 if date.is_kislev_short() => Some(YomTov::Chanukah),
            10 => Some(YomTov::TenthOfTeves),
            _ => None,
        },
        JewishMonth::Shevat => (day == 15).then_some(YomTov::TuBeshvat),
        JewishMonth::Adar if date.is_jewish_leap_year() => {
            (day == 14).then_some(YomTov::PurimKatan)
        }
        JewishMonth::Adar | JewishMonth::AdarII => match (day, dow) {
            (11 | 12, THURSDAY) => Some(YomTov::FastOfEsther),
            (13, d) if d != FRIDAY && d != SHABBOS => Some(YomTov::FastOfEsther),
            (14, _) => Some(YomTov::Purim),
            (15, _) => Some(YomTov::ShushanPurim),
            _ => None,
        },
    }
}

fn is_yom_hazikaron(day: u8, dow: u8) -> bool {
    matches!(
        (day, dow),
        (4, TUESDAY) | (2 | 3, WEDNESDAY) | (5, MONDAY)
    )
}

fn is_yom_haatzmaut(day: u8, dow: u8) -> bool {
    matches!(
        (day, dow),
        (5, WEDNESDAY) | (3 | 4, THURSDAY) | (6, TUESDAY)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on(year: i32, month: JewishMonth, day: u8) -> JewishDate {
        JewishDate::from_jewish(year, month, day).unwrap()
    }

    #[test]
    fn code_roundtrip() {
        for code in 0..=40u8 {
            match YomTov::from_code(code) {
                Some(yom_tov) => assert_eq!(yom_tov.code(), code),
                None => assert!(code == 20 || code > 32, "code {code} has no variant"),
            }
        }
    }

    #[test]
    fn second_day_pesach_depends_on_location() {
        let date = on(5785, JewishMonth::Nissan, 16);
        assert_eq!(classify(&date, false, false), Some(YomTov::Pesach));
        assert_eq!(classify(&date, true, false), Some(YomTov::CholHamoedPesach));
        let date = on(5785, JewishMonth::Nissan, 22);
        assert_eq!(classify(&date, false, false), Some(YomTov::Pesach));
        assert_eq!(classify(&date, true, false), None);
    }

    #[test]
    fn simchas_torah_only_in_diaspora() {
        let date = on(5785, JewishMonth::Tishrei, 23);
        assert_eq!(classify(&date, false, false), Some(YomTov::SimchasTorah));
        assert_eq!(classify(&date, true, false), None);
    }

    #[test]
    fn chanukah_third_of_teves_needs_short_kislev() {
        assert!(!on(5785, JewishMonth::Teves, 1).is_kislev_short());
        assert_eq!(classify(&on(5785, JewishMonth::Teves, 3), false, false), None);
        let short = (5700..5800)
            .find(|&y| on(y, JewishMonth::Teves, 1).is_kislev_short())
            .unwrap();
        assert_eq!(
            classify(&on(short, JewishMonth::Teves, 3), false, false),
            Some(YomTov::Chanukah)
        );
    }

    #[test]
    fn purim_katan_only_in_adar_i() {
        assert_eq!(
            classify(&on(5784, JewishMonth::Adar, 14), false, false),
            Some(YomTov::PurimKatan)
        );
        assert_eq!(
            classify(&on(5784, JewishMonth::AdarII, 14), false, false),
            Some(YomTov::Purim)
        );
        assert_eq!(
            classify(&on(5785, JewishMonth::Adar, 14), false, false),
            Some(YomTov::Purim)
        );
    }

    #[test]
    fn modern_holidays_need_flag() {
        // 28 Iyar is never moved
        let date = on(5785, JewishMonth::Iyar, 28);
        assert_eq!(classify(&date, true, false), None);
        assert_eq!(classify(&date, true, true), Some(YomTov::YomYerushalayim));
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(YomTov::TishaBeav.to_string(), "Tishah B'Av");
    }
}
