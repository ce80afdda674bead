use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use std::convert::From;

use crate::calendars::{Cal, CalendarError, DateRoll, UnionCal};

/// Create a `NaiveDate` from year, month and day.
///
/// Panics if date values are invalid.
pub fn nd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("`year`, `month` `day` are invalid.")
}

/// Parse an ISO `YYYY-MM-DD` date string.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| CalendarError::InvalidDate {
        value: value.to_string(),
    })
}

/// Container for calendar types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Calendar {
    Cal(Cal),
    UnionCal(UnionCal),
}

impl From<Cal> for Calendar {
    fn from(item: Cal) -> Self {
        Calendar::Cal(item)
    }
}

impl From<UnionCal> for Calendar {
    fn from(item: UnionCal) -> Self {
        Calendar::UnionCal(item)
    }
}

impl From<Vec<Cal>> for Calendar {
    /// A single calendar is kept as is; several are combined into a [`UnionCal`].
    fn from(mut items: Vec<Cal>) -> Self {
        if items.len() == 1 {
            Calendar::Cal(items.remove(0))
        } else {
            Calendar::UnionCal(UnionCal::new(items))
        }
    }
}

impl DateRoll for Calendar {
    fn is_weekday(&self, date: &NaiveDate) -> bool {
        match self {
            Calendar::Cal(c) => c.is_weekday(date),
            Calendar::UnionCal(c) => c.is_weekday(date),
        }
    }

    fn is_holiday(&self, date: &NaiveDate) -> bool {
        match self {
            Calendar::Cal(c) => c.is_holiday(date),
            Calendar::UnionCal(c) => c.is_holiday(date),
        }
    }

    fn is_suspended(&self, date: &NaiveDate) -> bool {
        match self {
            Calendar::Cal(c) => c.is_suspended(date),
            Calendar::UnionCal(c) => c.is_suspended(date),
        }
    }

    fn holiday_name(&self, date: &NaiveDate) -> Option<&str> {
        match self {
            Calendar::Cal(c) => c.holiday_name(date),
            Calendar::UnionCal(c) => c.holiday_name(date),
        }
    }

    fn suspension_name(&self, date: &NaiveDate) -> Option<&str> {
        match self {
            Calendar::Cal(c) => c.suspension_name(date),
            Calendar::UnionCal(c) => c.suspension_name(date),
        }
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::DayKind;

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2024-02-29").unwrap(), nd(2024, 2, 29));
        assert_eq!(parse_iso_date(" 2024-02-29 ").unwrap(), nd(2024, 2, 29));
        assert!(parse_iso_date("2023-02-29").is_err());
        assert!(parse_iso_date("29/02/2024").is_err());
    }

    #[test]
    fn test_from_vec() {
        let single: Calendar = vec![Cal::default()].into();
        assert!(matches!(single, Calendar::Cal(_)));

        let double: Calendar = vec![Cal::default(), Cal::default()].into();
        assert!(matches!(double, Calendar::UnionCal(_)));
    }

    #[test]
    fn test_calendar_dispatch() {
        let cal = Cal::default().with_named_holiday(nd(2024, 5, 1), "Dia do Trabalho");
        let wrapped = Calendar::from(cal.clone());
        let union = Calendar::from(UnionCal::new(vec![cal]));
        for c in [&wrapped, &union] {
            assert_eq!(c.classify(&nd(2024, 5, 1)), DayKind::Holiday);
            assert_eq!(c.classify(&nd(2024, 5, 4)), DayKind::Weekend);
            assert_eq!(c.classify(&nd(2024, 5, 2)), DayKind::Business);
            assert_eq!(c.holiday_name(&nd(2024, 5, 1)), Some("Dia do Trabalho"));
            assert!(!c.is_suspended(&nd(2024, 5, 2)));
        }
    }
}
