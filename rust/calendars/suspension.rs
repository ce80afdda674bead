use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendars::CalendarError;

/// A closed range of dates during which procedural deadlines do not run.
///
/// The typical example is the end-of-year judicial recess, 20th December to 20th January,
/// during which no day is counted regardless of whether it would otherwise be a business day.
///
/// Both bounds are inclusive and `start <= end` always holds, including for periods read from
/// JSON.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SuspensionSpec")]
pub struct SuspensionPeriod {
    start: NaiveDate,
    end: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

/// Unvalidated wire form of a [`SuspensionPeriod`].
#[derive(Deserialize)]
struct SuspensionSpec {
    start: NaiveDate,
    end: NaiveDate,
    #[serde(default)]
    name: Option<String>,
}

impl TryFrom<SuspensionSpec> for SuspensionPeriod {
    type Error = CalendarError;

    fn try_from(spec: SuspensionSpec) -> Result<Self, Self::Error> {
        let period = SuspensionPeriod::new(spec.start, spec.end)?;
        Ok(match spec.name {
            Some(name) => period.named(name),
            None => period,
        })
    }
}

impl SuspensionPeriod {
    /// Create a suspension period covering `start` to `end` inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidSuspension`] if `end` is before `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CalendarError> {
        if end < start {
            return Err(CalendarError::InvalidSuspension { start, end });
        }
        Ok(Self {
            start,
            end,
            name: None,
        })
    }

    /// Attach a descriptive name, e.g. *"Recesso forense"*.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns whether `date` lies within the period, bounds included.
    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Number of calendar days covered, bounds included.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}
