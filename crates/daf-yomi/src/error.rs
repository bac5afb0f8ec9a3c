//! Error types for the luach-daf-yomi crate.

use chrono::NaiveDate;

/// Error type for Daf Yomi lookups and name tables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DafYomiError {
    /// Returned when the requested date precedes the first cycle.
    #[error("{date} is before the {edition} Daf Yomi cycle start {start}")]
    BeforeCycleStart {
        /// `"Bavli"` or `"Yerushalmi"`.
        edition: &'static str,
        /// The requested date.
        date: NaiveDate,
        /// First day of the first cycle.
        start: NaiveDate,
    },

    /// Returned when a tractate name table has the wrong number of entries.
    #[error("{edition} name table has {found} entries (must be {expected})")]
    NameTableLength {
        /// `"Bavli"` or `"Yerushalmi"`.
        edition: &'static str,
        /// Number of tractates in the edition.
        expected: usize,
        /// Number of names supplied.
        found: usize,
    },
}
