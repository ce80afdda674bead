//! Error types for deadline computation.

use chrono::NaiveDate;

/// Error type for all fallible deadline operations.
///
/// Both variants are precondition violations on the caller's data. Nothing is retried and no
/// partially filled trace is ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeadlineError {
    /// Returned for a negative day count or unusable options.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Human readable description of the rejected value.
        reason: String,
    },

    /// Returned when the scan limit passes without a day that can be counted or rolled to.
    ///
    /// This almost always means the calendar is malformed, e.g. a suspension period that
    /// never ends or a week mask that excludes every day.
    #[error(
        "no qualifying day found within {scanned} consecutive days of the deadline starting \
         {start}; check the calendar for unterminated suspension periods"
    )]
    UnboundedCalendar {
        /// Start date of the request.
        start: NaiveDate,
        /// Number of consecutive days inspected without a qualifying one.
        scanned: u32,
    },
}
