//! # luach-holidays
//!
//! Holiday, fast and occasion classification for Jewish dates.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["JewishDate"] --> B["JewishCalendar"]
//!     C["in_israel / use_modern_holidays"] --> B
//!     B -->|".yom_tov()"| D["Option of YomTov"]
//!     D --> E["is_yom_tov / is_taanis / ..."]
//!     B -->|".molad_as_instant()"| F["Kiddush Levana windows"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use luach_holidays::{JewishCalendar, YomTov};
//!
//! let cal = JewishCalendar::from_gregorian(2024, 12, 26).unwrap();
//! assert_eq!(cal.yom_tov(), Some(YomTov::Chanukah));
//! assert_eq!(cal.day_of_chanukah(), Some(1));
//!
//! let window_opens = cal.tchilas_zman_kidush_levana_3_days().unwrap();
//! assert_eq!(window_opens.offset().local_minus_utc(), 7200);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `yom_tov` | Occasion codes and per-month rules |
//! | `calendar` | `JewishCalendar` and its predicates |
//! | `kiddush_levana` | Molad instant and Kiddush Levana windows |

mod calendar;
mod kiddush_levana;
mod yom_tov;

pub use calendar::JewishCalendar;
pub use yom_tov::YomTov;
