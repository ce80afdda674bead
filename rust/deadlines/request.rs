use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::deadlines::DeadlineError;

/// Which days advance the deadline counter.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountingMode {
    /// *Dias úteis*: only business days are counted.
    #[default]
    Business,
    /// *Dias corridos*: every day is counted except suspended days.
    Calendar,
}

impl CountingMode {
    /// Portuguese legal name of the mode, e.g. *"dias úteis"*.
    pub fn label(&self) -> &'static str {
        match self {
            CountingMode::Business => "dias úteis",
            CountingMode::Calendar => "dias corridos",
        }
    }

    /// The label agreeing in number with `count`, e.g. *"1 dia útil"* but *"2 dias úteis"*.
    pub fn unit(&self, count: i64) -> &'static str {
        match (self, count) {
            (CountingMode::Business, 1) => "dia útil",
            (CountingMode::Calendar, 1) => "dia corrido",
            _ => self.label(),
        }
    }
}

impl fmt::Display for CountingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountingMode::Business => write!(f, "business"),
            CountingMode::Calendar => write!(f, "calendar"),
        }
    }
}

impl FromStr for CountingMode {
    type Err = DeadlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "business" | "uteis" | "úteis" => Ok(CountingMode::Business),
            "calendar" | "corridos" => Ok(CountingMode::Calendar),
            other => Err(DeadlineError::InvalidInput {
                reason: format!("unknown counting mode '{}', expected 'business' or 'calendar'", other),
            }),
        }
    }
}

/// The parameters of a single deadline computation.
///
/// `day_count` is signed so that a negative count coming from a form or a JSON document can be
/// reported as [`DeadlineError::InvalidInput`] rather than being unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeadlineRequest {
    /// Date of the triggering event, e.g. the publication of a decision.
    pub start_date: NaiveDate,
    /// Time of the triggering event. Informational only, never affects counting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveTime>,
    /// Number of days to count.
    pub day_count: i64,
    #[serde(default)]
    pub mode: CountingMode,
}

impl DeadlineRequest {
    pub fn new(start_date: NaiveDate, day_count: i64, mode: CountingMode) -> Self {
        DeadlineRequest {
            start_date,
            start_time: None,
            day_count,
            mode,
        }
    }

    /// Attach the time of the triggering event.
    pub fn at(mut self, time: NaiveTime) -> Self {
        self.start_time = Some(time);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::nd;

    #[test]
    fn test_counting_mode_from_str() {
        assert_eq!("business".parse::<CountingMode>().unwrap(), CountingMode::Business);
        assert_eq!("Calendar".parse::<CountingMode>().unwrap(), CountingMode::Calendar);
        assert_eq!("úteis".parse::<CountingMode>().unwrap(), CountingMode::Business);
        assert_eq!("corridos".parse::<CountingMode>().unwrap(), CountingMode::Calendar);
        assert!(matches!(
            "weekly".parse::<CountingMode>(),
            Err(DeadlineError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_counting_mode_unit() {
        assert_eq!(CountingMode::Business.unit(1), "dia útil");
        assert_eq!(CountingMode::Calendar.unit(1), "dia corrido");
        assert_eq!(CountingMode::Business.unit(0), "dias úteis");
        assert_eq!(CountingMode::Calendar.unit(15), "dias corridos");
    }

    #[test]
    fn test_counting_mode_display_matches_serde() {
        for mode in [CountingMode::Business, CountingMode::Calendar] {
            let js = serde_json::to_string(&mode).unwrap();
            assert_eq!(js, format!("\"{}\"", mode));
        }
    }

    #[test]
    fn test_request_json_shape() {
        let req = DeadlineRequest::new(nd(2024, 1, 1), 5, CountingMode::Business)
            .at(NaiveTime::from_hms_opt(14, 30, 0).unwrap());
        let js = serde_json::to_string(&req).unwrap();
        assert_eq!(
            js,
            r#"{"start_date":"2024-01-01","start_time":"14:30:00","day_count":5,"mode":"business"}"#
        );
    }

    #[test]
    fn test_request_json_defaults() {
        let req: DeadlineRequest =
            serde_json::from_str(r#"{"start_date": "2024-01-01", "day_count": 15}"#).unwrap();
        assert_eq!(req.mode, CountingMode::Business);
        assert_eq!(req.start_time, None);
    }
}
