//! Create business day calendars for counting procedural deadlines.
//!
//! ### Basic usage
//!
//! The `Cal` struct allows the construction of a single business day calendar, e.g. the
//! national holidays observed by every Brazilian court. The below constructs a calendar with
//! the Carnival holidays of 2024 and a Saturday/Sunday weekend.
//!
//! ```rust
//! # use prazos::calendars::{Cal, nd, DateRoll};
//! # use chrono::Weekday;
//! let cal = Cal::new(vec![nd(2024, 2, 12), nd(2024, 2, 13)], vec![Weekday::Sat, Weekday::Sun]);
//! // Carnival Monday rolls to Ash Wednesday.
//! assert_eq!(cal.roll_forward_bus_day(&nd(2024, 2, 12)).unwrap(), nd(2024, 2, 14));
//! ```
//!
//! ### Suspension periods
//!
//! Deadlines do not run during the judicial recess. A [`SuspensionPeriod`] is a closed date
//! range and every day inside it is classified as [`DayKind::Suspended`], whatever it would
//! otherwise be.
//!
//! ```rust
//! # use prazos::calendars::{Cal, nd, DateRoll, DayKind, SuspensionPeriod};
//! let recess = SuspensionPeriod::new(nd(2023, 12, 20), nd(2024, 1, 20)).unwrap();
//! let cal = Cal::default().with_suspension(recess);
//! assert_eq!(cal.classify(&nd(2024, 1, 9)), DayKind::Suspended);
//! assert_eq!(cal.classify(&nd(2024, 1, 22)), DayKind::Business);
//! ```
//!
//! ### Combination usage
//!
//! Courts observe several holiday calendars at once. These are combined with a [`UnionCal`].
//!
//! ```rust
//! # use prazos::calendars::{Cal, UnionCal, nd, DateRoll};
//! let national = Cal::try_from_iso(&["2024-11-15", "2024-11-20"]).unwrap();
//! let state = Cal::try_from_iso(&["2024-07-09"]).unwrap();
//! let court = UnionCal::new(vec![national, state]);
//! assert!(court.is_holiday(&nd(2024, 7, 9)));
//! assert!(court.is_holiday(&nd(2024, 11, 20)));
//! ```

mod cal;
mod calendar;
mod dateroll;
mod error;
mod suspension;
mod union_cal;

mod serde;

pub use crate::calendars::{
    cal::Cal,
    calendar::{nd, parse_iso_date, Calendar},
    dateroll::{DateRoll, DayKind, MAX_ROLL_DAYS},
    error::CalendarError,
    suspension::SuspensionPeriod,
    union_cal::UnionCal,
};
