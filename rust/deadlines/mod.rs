//! Compute judicial deadlines (*prazos*) and the audit trail that justifies them.
//!
//! A [`DeadlineRequest`] names the triggering date, a number of days and a [`CountingMode`].
//! [`compute_deadline`] walks the days after the triggering date against any calendar
//! implementing [`DateRoll`](crate::calendars::DateRoll) and returns a [`DeadlineResult`]: the
//! due date plus one [`SimulationStep`] per day visited.
//!
//! ### Example
//! Five business days from Monday 1st January 2024 skip the weekend of the 6th and 7th.
//! Counted as calendar days the count is reached on Saturday the 6th, and the due date is
//! rolled forward to the following Monday.
//! ```rust
//! # use prazos::calendars::{Cal, nd};
//! # use prazos::deadlines::{compute_deadline, CountingMode, DeadlineRequest};
//! let cal = Cal::default();
//! let business = DeadlineRequest::new(nd(2024, 1, 1), 5, CountingMode::Business);
//! assert_eq!(compute_deadline(&business, &cal).unwrap().due_date(), nd(2024, 1, 8));
//!
//! let calendar = DeadlineRequest::new(nd(2024, 1, 1), 5, CountingMode::Calendar);
//! let result = compute_deadline(&calendar, &cal).unwrap();
//! assert_eq!(result.unadjusted_due_date(), nd(2024, 1, 6));
//! assert_eq!(result.due_date(), nd(2024, 1, 8));
//! ```
//!
//! ### Timeliness
//! The [`timeliness`] functions only read a finished result.
//! ```rust
//! # use prazos::calendars::{Cal, nd};
//! # use prazos::deadlines::{compute_deadline, check_timeliness, CountingMode, DeadlineRequest, Timeliness};
//! # let request = DeadlineRequest::new(nd(2024, 1, 1), 5, CountingMode::Business);
//! # let result = compute_deadline(&request, &Cal::default()).unwrap();
//! assert_eq!(check_timeliness(&result, &nd(2024, 1, 8)), Timeliness::Timely);
//! assert_eq!(check_timeliness(&result, &nd(2024, 1, 9)), Timeliness::Late);
//! ```

mod calculator;
mod error;
mod request;
pub mod timeliness;
mod trace;

mod serde;

pub use crate::deadlines::{
    calculator::{
        compute_deadline, compute_deadline_with, compute_deadlines, DeadlineOptions,
        DEFAULT_MAX_SCAN_DAYS,
    },
    error::DeadlineError,
    request::{CountingMode, DeadlineRequest},
    timeliness::{check_timeliness, justification, Timeliness, TimelinessReport},
    trace::{DeadlineResult, SimulationStep, StepReason},
};
