//! # luach-calendar
//!
//! Hebrew calendar arithmetic anchored on an absolute day count.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Gregorian (y, m, d)"] -->|"gregorian_to_absolute()"| B["absolute day"]
//!     B -->|"absolute_to_gregorian()"| A
//!     C["molad (chalakim)"] -->|"dechiyos"| D["Rosh Hashanah"]
//!     D --> E["JewishDate"]
//!     B --> E
//!     E -->|".forward() / .back()"| E
//!     E -->|".molad()"| F["JewishDate + molad time"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use luach_calendar::{DateUnit, JewishDate, JewishMonth};
//!
//! // Gregorian -> Jewish
//! let mut date = JewishDate::from_gregorian(2024, 10, 2).unwrap();
//! assert_eq!(date.jewish_month(), JewishMonth::Elul);
//!
//! // Stepping keeps both calendars in sync
//! date.forward(DateUnit::Day, 1).unwrap();
//! assert_eq!(date.jewish_year(), 5785);
//! assert_eq!(date.gregorian_day_of_month(), 3);
//!
//! // Molad of the month, on a civil clock
//! let molad = date.molad().unwrap();
//! assert_eq!((molad.molad_hours(), molad.molad_minutes()), (3, 21));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `gregorian` | Proleptic Gregorian <-> absolute day |
//! | `month` | Month enum and year classification |
//! | `molad` | Molad arithmetic, leap years, dechiyos, month and year lengths |
//! | `year` | Range-checked public forms of the year arithmetic |
//! | `date` | `JewishDate` value type with stepping and molad |
//! | `error` | Error types |

mod date;
mod error;
mod gregorian;
mod molad;
mod month;
mod year;

pub use date::{DateUnit, JEWISH_EPOCH_YEAR, JewishDate, MAX_JEWISH_YEAR};
pub use error::CalendarError;
pub use gregorian::{
    MAX_ABSOLUTE_DATE, MAX_GREGORIAN_YEAR, absolute_to_gregorian, days_in_gregorian_month,
    gregorian_to_absolute, is_gregorian_leap_year,
};
pub use molad::{
    CHALAKIM_MOLAD_TOHU, CHALAKIM_PER_DAY, CHALAKIM_PER_HOUR, CHALAKIM_PER_MINUTE,
    CHALAKIM_PER_MONTH,
};
pub use month::{JewishMonth, Kviah};
pub use year::{
    chalakim_since_molad_tohu, days_in_jewish_month, days_in_jewish_year,
    days_since_start_of_jewish_year, is_cheshvan_long, is_jewish_leap_year, is_kislev_short,
    jewish_calendar_elapsed_days, jewish_month_of_year, kviah, last_month_of_jewish_year,
};
