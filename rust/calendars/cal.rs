use chrono::prelude::*;
use chrono::Weekday;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::calendars::{parse_iso_date, CalendarError, DateRoll, SuspensionPeriod};

/// A business day calendar with a singular list of holidays and suspension periods.
///
/// A business day calendar is formed of 3 components:
///
/// - `week_mask`: which defines the days of the week that are not general business days. In
///   Brazilian courts these are Saturday and Sunday, the default when the mask is omitted.
/// - `holidays`: which defines specific dates that may be exceptions to the general working week,
///   and cannot be business days. A holiday may optionally carry a name.
/// - `suspensions`: closed date ranges during which deadlines do not run at all, e.g. the
///   judicial recess.
///
/// Holidays are supplied explicitly; no recurrence rule is inferred from them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cal {
    #[serde(default)]
    pub(crate) holidays: IndexSet<NaiveDate>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub(crate) holiday_names: IndexMap<NaiveDate, String>,
    #[serde(default = "default_week_mask")]
    pub(crate) week_mask: HashSet<Weekday>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) suspensions: Vec<SuspensionPeriod>,
}

fn default_week_mask() -> HashSet<Weekday> {
    HashSet::from([Weekday::Sat, Weekday::Sun])
}

impl Default for Cal {
    fn default() -> Self {
        Cal {
            holidays: IndexSet::new(),
            holiday_names: IndexMap::new(),
            week_mask: default_week_mask(),
            suspensions: Vec::new(),
        }
    }
}

impl Cal {
    /// Create a calendar.
    ///
    /// `holidays` provide a vector of dates that cannot be business days. `week_mask` is a vector
    /// of days that are excluded from the working week.
    pub fn new(holidays: Vec<NaiveDate>, week_mask: Vec<Weekday>) -> Self {
        Cal {
            holidays: IndexSet::from_iter(holidays),
            holiday_names: IndexMap::new(),
            week_mask: HashSet::from_iter(week_mask),
            suspensions: Vec::new(),
        }
    }

    /// Create a Saturday/Sunday weekend calendar from ISO `YYYY-MM-DD` holiday strings.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] for the first string that does not parse.
    pub fn try_from_iso(holidays: &[&str]) -> Result<Self, CalendarError> {
        let dates = holidays
            .iter()
            .map(|s| parse_iso_date(s))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Cal::new(dates, default_week_mask().into_iter().collect()))
    }

    /// Add a named holiday.
    pub fn with_named_holiday(mut self, date: NaiveDate, name: impl Into<String>) -> Self {
        self.holidays.insert(date);
        self.holiday_names.insert(date, name.into());
        self
    }

    /// Add a suspension period.
    pub fn with_suspension(mut self, period: SuspensionPeriod) -> Self {
        self.suspensions.push(period);
        self
    }

    /// Holidays in the order they were supplied.
    pub fn holidays(&self) -> Vec<NaiveDate> {
        self.holidays.iter().copied().collect()
    }

    pub fn suspensions(&self) -> &[SuspensionPeriod] {
        &self.suspensions
    }

    /// Days of the week that are excluded from the working week, Monday first.
    pub fn week_mask(&self) -> Vec<Weekday> {
        let mut mask: Vec<Weekday> = self.week_mask.iter().copied().collect();
        mask.sort_by_key(|d| d.num_days_from_monday());
        mask
    }
}

impl DateRoll for Cal {
    fn is_weekday(&self, date: &NaiveDate) -> bool {
        !self.week_mask.contains(&date.weekday())
    }

    fn is_holiday(&self, date: &NaiveDate) -> bool {
        self.holidays.contains(date)
    }

    fn is_suspended(&self, date: &NaiveDate) -> bool {
        self.suspensions.iter().any(|p| p.contains(date))
    }

    fn holiday_name(&self, date: &NaiveDate) -> Option<&str> {
        self.holiday_names.get(date).map(String::as_str)
    }

    fn suspension_name(&self, date: &NaiveDate) -> Option<&str> {
        self.suspensions
            .iter()
            .filter(|p| p.contains(date))
            .find_map(|p| p.name())
    }
}
