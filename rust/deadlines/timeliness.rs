//! Timeliness (*tempestividade*) of a filing against a computed deadline.
//!
//! Everything here consumes a finished [`DeadlineResult`]; no counting happens in this module.

use chrono::{Datelike, NaiveDate, Weekday};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calendars::{DateRoll, DayKind};
use crate::deadlines::{DeadlineRequest, DeadlineResult, SimulationStep, StepReason};

/// Whether a filing met its deadline.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeliness {
    /// Filed on or before the due date.
    Timely,
    /// Filed after the due date.
    Late,
}

impl Timeliness {
    pub fn is_timely(&self) -> bool {
        matches!(self, Timeliness::Timely)
    }
}

impl fmt::Display for Timeliness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timeliness::Timely => write!(f, "Tempestivo"),
            Timeliness::Late => write!(f, "Intempestivo"),
        }
    }
}

/// Compare a filing date against the due date of `result`.
pub fn check_timeliness(result: &DeadlineResult, filing_date: &NaiveDate) -> Timeliness {
    if *filing_date <= result.due_date() {
        Timeliness::Timely
    } else {
        Timeliness::Late
    }
}

/// The verdict on a filing together with the dates it was based on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimelinessReport {
    pub filing_date: NaiveDate,
    pub due_date: NaiveDate,
    pub verdict: Timeliness,
    /// Calendar days between the due date and a late filing, `0` when timely.
    pub days_late: i64,
}

impl TimelinessReport {
    pub fn new(result: &DeadlineResult, filing_date: NaiveDate) -> Self {
        let verdict = check_timeliness(result, &filing_date);
        let days_late = match verdict {
            Timeliness::Timely => 0,
            Timeliness::Late => (filing_date - result.due_date()).num_days(),
        };
        TimelinessReport {
            filing_date,
            due_date: result.due_date(),
            verdict,
            days_late,
        }
    }

    /// One line summary, e.g. *"Tempestivo: protocolado em 08/01/2024, vencimento em 08/01/2024"*.
    pub fn summary(&self) -> String {
        match self.verdict {
            Timeliness::Timely => format!(
                "{}: protocolado em {}, vencimento em {}",
                self.verdict,
                br_date(&self.filing_date),
                br_date(&self.due_date)
            ),
            Timeliness::Late => format!(
                "{}: protocolado em {}, {} dia(s) após o vencimento em {}",
                self.verdict,
                br_date(&self.filing_date),
                self.days_late,
                br_date(&self.due_date)
            ),
        }
    }
}

/// Render the trace of `result` as a day-by-day justification, one line per step.
///
/// The `calendar` is only consulted for holiday and suspension names; it should be the
/// calendar the result was computed with.
pub fn justification<T: DateRoll + ?Sized>(
    request: &DeadlineRequest,
    result: &DeadlineResult,
    calendar: &T,
) -> String {
    let mut header = format!(
        "Prazo de {} {} a partir de {}",
        request.day_count,
        request.mode.unit(request.day_count),
        br_date(&request.start_date)
    );
    if let Some(time) = request.start_time {
        header += &format!(" às {}", time.format("%H:%M"));
    }

    let lines = result
        .steps()
        .iter()
        .map(|step| {
            format!(
                "{} ({}) - {}",
                br_date(&step.date),
                weekday_abbr(step.date.weekday()),
                describe_step(step, request.day_count, calendar)
            )
        })
        .join("\n");

    let mut footer = format!("Vencimento: {}", br_date(&result.due_date()));
    if result.was_rolled_forward() {
        footer += &format!(
            " (prorrogado de {})",
            br_date(&result.unadjusted_due_date())
        );
    }
    format!("{}\n{}\n{}", header, lines, footer)
}

fn describe_step<T: DateRoll + ?Sized>(step: &SimulationStep, total: i64, calendar: &T) -> String {
    match step.reason {
        StepReason::Start => "Dia do início (excluído)".to_string(),
        StepReason::Counted => format!("Dia contado ({}/{})", step.cumulative_count, total),
        StepReason::Weekend | StepReason::Holiday | StepReason::Suspended => {
            describe_kind(&step.date, step.day_kind, calendar)
        }
        StepReason::RolledForward => match step.day_kind {
            DayKind::Business => "Prorrogado - vencimento".to_string(),
            kind => format!(
                "Prorrogado ({})",
                lower_first(&describe_kind(&step.date, kind, calendar))
            ),
        },
    }
}

fn describe_kind<T: DateRoll + ?Sized>(date: &NaiveDate, kind: DayKind, calendar: &T) -> String {
    match kind {
        DayKind::Business => "Dia útil".to_string(),
        DayKind::Weekend => "Fim de semana".to_string(),
        DayKind::Holiday => match calendar.holiday_name(date) {
            Some(name) => format!("Feriado: {}", name),
            None => "Feriado".to_string(),
        },
        DayKind::Suspended => match calendar.suspension_name(date) {
            Some(name) => format!("Suspensão de prazos: {}", name),
            None => "Suspensão de prazos".to_string(),
        },
    }
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn br_date(date: &NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn weekday_abbr(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "seg",
        Weekday::Tue => "ter",
        Weekday::Wed => "qua",
        Weekday::Thu => "qui",
        Weekday::Fri => "sex",
        Weekday::Sat => "sáb",
        Weekday::Sun => "dom",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::{nd, Cal, SuspensionPeriod};
    use crate::deadlines::{compute_deadline, CountingMode};
    use chrono::NaiveTime;

    fn fixture_result() -> (DeadlineRequest, DeadlineResult) {
        let req = DeadlineRequest::new(nd(2024, 1, 1), 5, CountingMode::Calendar);
        let result = compute_deadline(&req, &Cal::default()).unwrap();
        (req, result)
    }

    #[test]
    fn test_check_timeliness() {
        let (_, result) = fixture_result();
        assert_eq!(check_timeliness(&result, &nd(2024, 1, 5)), Timeliness::Timely);
        assert_eq!(check_timeliness(&result, &nd(2024, 1, 8)), Timeliness::Timely);
        assert_eq!(check_timeliness(&result, &nd(2024, 1, 9)), Timeliness::Late);
    }

    #[test]
    fn test_report() {
        let (_, result) = fixture_result();
        let report = TimelinessReport::new(&result, nd(2024, 1, 10));
        assert_eq!(report.verdict, Timeliness::Late);
        assert_eq!(report.days_late, 2);
        assert_eq!(
            report.summary(),
            "Intempestivo: protocolado em 10/01/2024, 2 dia(s) após o vencimento em 08/01/2024"
        );

        let report = TimelinessReport::new(&result, nd(2024, 1, 8));
        assert!(report.verdict.is_timely());
        assert_eq!(report.days_late, 0);
        assert_eq!(
            report.summary(),
            "Tempestivo: protocolado em 08/01/2024, vencimento em 08/01/2024"
        );
    }

    #[test]
    fn test_justification_calendar_days() {
        let (req, result) = fixture_result();
        let req = req.at(NaiveTime::from_hms_opt(9, 15, 0).unwrap());
        let text = justification(&req, &result, &Cal::default());
        let expected = "\
Prazo de 5 dias corridos a partir de 01/01/2024 às 09:15
01/01/2024 (seg) - Dia do início (excluído)
02/01/2024 (ter) - Dia contado (1/5)
03/01/2024 (qua) - Dia contado (2/5)
04/01/2024 (qui) - Dia contado (3/5)
05/01/2024 (sex) - Dia contado (4/5)
06/01/2024 (sáb) - Dia contado (5/5)
07/01/2024 (dom) - Prorrogado (fim de semana)
08/01/2024 (seg) - Prorrogado - vencimento
Vencimento: 08/01/2024 (prorrogado de 06/01/2024)";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_justification_names_holidays_and_suspensions() {
        let cal = Cal::default()
            .with_named_holiday(nd(2024, 11, 15), "Proclamação da República")
            .with_suspension(
                SuspensionPeriod::new(nd(2024, 11, 18), nd(2024, 11, 18))
                    .unwrap()
                    .named("Correição"),
            );
        // Thursday 14th + 1 business day
        let req = DeadlineRequest::new(nd(2024, 11, 14), 1, CountingMode::Business);
        let result = compute_deadline(&req, &cal).unwrap();
        let text = justification(&req, &result, &cal);
        let expected = "\
Prazo de 1 dia útil a partir de 14/11/2024
14/11/2024 (qui) - Dia do início (excluído)
15/11/2024 (sex) - Feriado: Proclamação da República
16/11/2024 (sáb) - Fim de semana
17/11/2024 (dom) - Fim de semana
18/11/2024 (seg) - Suspensão de prazos: Correição
19/11/2024 (ter) - Dia contado (1/1)
Vencimento: 19/11/2024";
        assert_eq!(text, expected);
    }
}
