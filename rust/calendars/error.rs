//! Error types for calendar construction and lookups.

use chrono::NaiveDate;

/// Error type for all fallible calendar operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a suspension period ends before it starts.
    #[error("invalid suspension period: end {end} is before start {start}")]
    InvalidSuspension {
        /// First day of the rejected period.
        start: NaiveDate,
        /// Last day of the rejected period.
        end: NaiveDate,
    },

    /// Returned when a string cannot be parsed as an ISO `YYYY-MM-DD` date.
    #[error("invalid date: '{value}' (expected YYYY-MM-DD)")]
    InvalidDate {
        /// The rejected input.
        value: String,
    },

    /// Returned when a year and month do not form a valid calendar month.
    #[error("invalid month: {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },

    /// Returned when rolling forward finds no business day within the scan limit.
    #[error("no business day found within {scanned} days of {from}")]
    NoBusinessDay {
        /// The date the roll started from.
        from: NaiveDate,
        /// How many days were inspected before giving up.
        scanned: u32,
    },
}
