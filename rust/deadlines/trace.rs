use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendars::DayKind;
use crate::deadlines::DeadlineError;

/// Why a day appears in the simulation trace.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepReason {
    /// The triggering day, excluded from the count (*diem a quo*).
    Start,
    /// Skipped in business mode: not part of the working week.
    Weekend,
    /// Skipped in business mode: a declared holiday.
    Holiday,
    /// Skipped in any mode: inside a suspension period.
    Suspended,
    /// The day advanced the counter.
    Counted,
    /// Visited after the count was reached because the due date fell on a non-working day.
    RolledForward,
}

/// One day of the deadline simulation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SimulationStep {
    pub date: NaiveDate,
    pub is_counted: bool,
    pub reason: StepReason,
    /// Running count after this day, `0` when the day is not counted.
    pub cumulative_count: i64,
    /// Classification of the date under the calendar used.
    pub day_kind: DayKind,
}

impl SimulationStep {
    pub(crate) fn start(date: NaiveDate, day_kind: DayKind) -> Self {
        Self::not_counted(date, StepReason::Start, day_kind)
    }

    /// A day skipped while counting.
    pub(crate) fn skipped(date: NaiveDate, reason: StepReason, day_kind: DayKind) -> Self {
        Self::not_counted(date, reason, day_kind)
    }

    pub(crate) fn counted(date: NaiveDate, cumulative_count: i64, day_kind: DayKind) -> Self {
        SimulationStep {
            date,
            is_counted: true,
            reason: StepReason::Counted,
            cumulative_count,
            day_kind,
        }
    }

    pub(crate) fn rolled_forward(date: NaiveDate, day_kind: DayKind) -> Self {
        Self::not_counted(date, StepReason::RolledForward, day_kind)
    }

    fn not_counted(date: NaiveDate, reason: StepReason, day_kind: DayKind) -> Self {
        SimulationStep {
            date,
            is_counted: false,
            reason,
            cumulative_count: 0,
            day_kind,
        }
    }
}

/// The due date of a deadline and the ordered day-by-day trace that justifies it.
///
/// The trace starts with the triggering day (reason [`StepReason::Start`]), holds exactly
/// `day_count` counted steps, and ends on the due date, which is always a business day.
/// Results read from JSON are checked against the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DeadlineResultSpec")]
pub struct DeadlineResult {
    pub(crate) due_date: NaiveDate,
    pub(crate) steps: Vec<SimulationStep>,
}

/// Unvalidated wire form of a [`DeadlineResult`].
#[derive(Deserialize)]
struct DeadlineResultSpec {
    due_date: NaiveDate,
    steps: Vec<SimulationStep>,
}

impl TryFrom<DeadlineResultSpec> for DeadlineResult {
    type Error = DeadlineError;

    fn try_from(spec: DeadlineResultSpec) -> Result<Self, Self::Error> {
        let invalid = |reason: String| DeadlineError::InvalidInput { reason };

        let (first, rest) = spec
            .steps
            .split_first()
            .ok_or_else(|| invalid("deadline trace has no steps".to_string()))?;
        if first.reason != StepReason::Start {
            return Err(invalid(format!("deadline trace starts with {:?}", first.reason)));
        }

        let mut prev = first.date;
        let mut counted: i64 = 0;
        for step in rest {
            if prev.succ_opt() != Some(step.date) {
                return Err(invalid(format!("deadline trace skips from {} to {}", prev, step.date)));
            }
            let expected = match step.reason {
                StepReason::Start => {
                    return Err(invalid(format!("second start step on {}", step.date)));
                }
                StepReason::Counted => {
                    counted += 1;
                    counted
                }
                _ => 0,
            };
            if step.is_counted != (step.reason == StepReason::Counted)
                || step.cumulative_count != expected
            {
                return Err(invalid(format!("inconsistent count on {}", step.date)));
            }
            prev = step.date;
        }

        let last = spec.steps.last().unwrap_or(first);
        if last.date != spec.due_date || !last.day_kind.is_business() {
            return Err(invalid(format!(
                "due date {} is not the final business day of the trace",
                spec.due_date
            )));
        }
        Ok(DeadlineResult {
            due_date: spec.due_date,
            steps: spec.steps,
        })
    }
}

impl DeadlineResult {
    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub fn steps(&self) -> &[SimulationStep] {
        &self.steps
    }

    /// The triggering date, taken from the first step.
    pub fn start_date(&self) -> NaiveDate {
        self.steps.first().map_or(self.due_date, |s| s.date)
    }

    /// Number of counted days in the trace.
    pub fn counted_days(&self) -> usize {
        self.steps.iter().filter(|s| s.is_counted).count()
    }

    /// Whether the due date was moved by the roll-forward rule (*prorrogação*).
    pub fn was_rolled_forward(&self) -> bool {
        self.steps
            .iter()
            .any(|s| s.reason == StepReason::RolledForward)
    }

    /// The date on which the count was reached, before any roll-forward.
    ///
    /// This is the last counted day, or the start date when nothing was counted.
    pub fn unadjusted_due_date(&self) -> NaiveDate {
        self.steps
            .iter()
            .rev()
            .find(|s| s.is_counted)
            .map_or(self.start_date(), |s| s.date)
    }

    /// Steps visited by the roll-forward rule, in order, ending on the due date.
    pub fn rolled_forward_steps(&self) -> impl Iterator<Item = &SimulationStep> {
        self.steps
            .iter()
            .filter(|s| s.reason == StepReason::RolledForward)
    }
}
