//! # luach-daf-yomi
//!
//! Daf Yomi lookups for the Babylonian (Bavli) and Jerusalem (Yerushalmi)
//! Talmud study cycles.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["JewishCalendar"] -->|"julian_day()"| B["Julian day"]
//!     B -->|"daf_yomi_bavli()"| C["Daf"]
//!     A -->|".yom_tov()"| D["Yom Kippur / Tisha B'Av?"]
//!     D -->|"daf_yomi_yerushalmi()"| E["Option of Daf"]
//!     C --> F["MasechtaNames"]
//!     E --> F
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use luach_calendar::JewishMonth;
//! use luach_daf_yomi::{DafYomi, MasechtaNames};
//! use luach_holidays::JewishCalendar;
//!
//! let cal = JewishCalendar::from_jewish(5777, JewishMonth::Elul, 10).unwrap();
//! let names = MasechtaNames::default();
//!
//! let bavli = cal.daf_yomi_bavli().unwrap();
//! assert_eq!(bavli.bavli_name(&names), Some("Sanhedrin"));
//! assert_eq!(bavli.daf(), 47);
//!
//! let yerushalmi = cal.daf_yomi_yerushalmi().unwrap().unwrap();
//! assert_eq!(yerushalmi.yerushalmi_name(&names), Some("Kidushin"));
//! assert_eq!(yerushalmi.daf(), 8);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `daf` | `Daf` value and tractate name tables |
//! | `bavli` | Bavli cycle lookup |
//! | `yerushalmi` | Yerushalmi cycle lookup |
//! | `error` | Error types |

mod bavli;
mod daf;
mod error;
mod yerushalmi;

pub use bavli::daf_yomi_bavli;
pub use daf::{BAVLI_MASECHTOS, Daf, MasechtaNames, YERUSHALMI_MASECHTOS};
pub use error::DafYomiError;
pub use yerushalmi::daf_yomi_yerushalmi;

use luach_calendar::JewishDate;
use luach_holidays::JewishCalendar;

/// Julian day number minus absolute day number.
const JULIAN_DAY_OFFSET: i64 = 1_721_425;

/// Returns the Julian day number of a date (1 January 2000 is 2 451 545).
pub fn julian_day(date: &JewishDate) -> i64 {
    i64::from(date.absolute_date()) + JULIAN_DAY_OFFSET
}

/// Daf Yomi lookups as methods on [`JewishCalendar`].
pub trait DafYomi {
    /// See [`daf_yomi_bavli`].
    ///
    /// # Errors
    ///
    /// Returns [`DafYomiError::BeforeCycleStart`] before 11 September 1923.
    fn daf_yomi_bavli(&self) -> Result<Daf, DafYomiError>;

    /// See [`daf_yomi_yerushalmi`].
    ///
    /// # Errors
    ///
    /// Returns [`DafYomiError::BeforeCycleStart`] before 2 February 1980.
    fn daf_yomi_yerushalmi(&self) -> Result<Option<Daf>, DafYomiError>;
}

impl DafYomi for JewishCalendar {
    fn daf_yomi_bavli(&self) -> Result<Daf, DafYomiError> {
        daf_yomi_bavli(self)
    }

    fn daf_yomi_yerushalmi(&self) -> Result<Option<Daf>, DafYomiError> {
        daf_yomi_yerushalmi(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn julian_day_of_j2000() {
        let date = JewishDate::from_gregorian(2000, 1, 1).unwrap();
        assert_eq!(julian_day(&date), 2_451_545);
    }
}
