use chrono::prelude::*;
use serde::{Deserialize, Serialize};

use crate::calendars::{Cal, DateRoll};

/// A business day calendar which is the union of multiple calendars.
///
/// A deadline before a state court observes national, state and municipal holidays as well as
/// the court's own closures, each commonly maintained as a separate [`Cal`].
///
/// When the union of a business day calendar is observed the following are true:
///
/// - a weekday is such if it is a weekday in all calendars.
/// - a holiday is such if it is a holiday in any calendar.
/// - a day is suspended if it is suspended in any calendar.
/// - a business day is such if it is a business day in all calendars.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnionCal {
    /// A vector of [Cal] used to determine **business** days.
    pub calendars: Vec<Cal>,
}

impl UnionCal {
    /// Create a new [UnionCal].
    ///
    /// # Examples
    /// ```rust
    /// # use prazos::calendars::{Cal, UnionCal};
    /// let national = Cal::try_from_iso(&["2024-11-15"]).unwrap();
    /// let sao_paulo = Cal::try_from_iso(&["2024-01-25", "2024-07-09"]).unwrap();
    /// let tjsp = UnionCal::new(vec![national, sao_paulo]);
    /// ```
    pub fn new(calendars: Vec<Cal>) -> Self {
        UnionCal { calendars }
    }
}

impl DateRoll for UnionCal {
    fn is_weekday(&self, date: &NaiveDate) -> bool {
        self.calendars.iter().all(|cal| cal.is_weekday(date))
    }

    fn is_holiday(&self, date: &NaiveDate) -> bool {
        self.calendars.iter().any(|cal| cal.is_holiday(date))
    }

    fn is_suspended(&self, date: &NaiveDate) -> bool {
        self.calendars.iter().any(|cal| cal.is_suspended(date))
    }

    fn holiday_name(&self, date: &NaiveDate) -> Option<&str> {
        self.calendars.iter().find_map(|cal| cal.holiday_name(date))
    }

    fn suspension_name(&self, date: &NaiveDate) -> Option<&str> {
        self.calendars.iter().find_map(|cal| cal.suspension_name(date))
    }
}
