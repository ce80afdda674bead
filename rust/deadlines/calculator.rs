use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::calendars::{CalendarError, DateRoll, DayKind, MAX_ROLL_DAYS};
use crate::deadlines::{
    CountingMode, DeadlineError, DeadlineRequest, DeadlineResult, SimulationStep, StepReason,
};

/// Default number of consecutive days scanned for a qualifying day before giving up.
pub const DEFAULT_MAX_SCAN_DAYS: u32 = MAX_ROLL_DAYS;

/// Tunables for [`compute_deadline_with`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineOptions {
    /// Upper bound on days inspected to find the next qualifying day.
    ///
    /// While counting, a qualifying day is one that is counted; while rolling forward, it is a
    /// business day. The bound restarts after each one, so it limits a run of non-qualifying
    /// days and never the total length of a deadline.
    pub max_scan_days: u32,
}

impl Default for DeadlineOptions {
    fn default() -> Self {
        DeadlineOptions {
            max_scan_days: DEFAULT_MAX_SCAN_DAYS,
        }
    }
}

/// Compute the due date of a deadline and its day-by-day trace.
///
/// The start date is never counted (*diem a quo*). Each following day is classified against
/// the `calendar`: suspended days are never counted, weekends and holidays are only counted in
/// [`CountingMode::Calendar`]. Once the count is reached, a due date that is not a business day
/// is rolled forward to the next one (*prorrogação*).
///
/// # Examples
/// ```rust
/// # use prazos::calendars::{Cal, nd};
/// # use prazos::deadlines::{compute_deadline, CountingMode, DeadlineRequest};
/// let request = DeadlineRequest::new(nd(2024, 1, 1), 5, CountingMode::Business);
/// let result = compute_deadline(&request, &Cal::default()).unwrap();
/// assert_eq!(result.due_date(), nd(2024, 1, 8));
/// ```
///
/// # Errors
///
/// - [`DeadlineError::InvalidInput`] if the day count is negative.
/// - [`DeadlineError::UnboundedCalendar`] if [`DEFAULT_MAX_SCAN_DAYS`] consecutive days pass
///   without a qualifying day.
pub fn compute_deadline<T: DateRoll + ?Sized>(
    request: &DeadlineRequest,
    calendar: &T,
) -> Result<DeadlineResult, DeadlineError> {
    compute_deadline_with(request, calendar, &DeadlineOptions::default())
}

/// Compute a deadline as [`compute_deadline`] with explicit [`DeadlineOptions`].
pub fn compute_deadline_with<T: DateRoll + ?Sized>(
    request: &DeadlineRequest,
    calendar: &T,
    options: &DeadlineOptions,
) -> Result<DeadlineResult, DeadlineError> {
    if request.day_count < 0 {
        return Err(DeadlineError::InvalidInput {
            reason: format!("day count must be non-negative, got {}", request.day_count),
        });
    }
    if options.max_scan_days == 0 {
        return Err(DeadlineError::InvalidInput {
            reason: "max_scan_days must be positive".to_string(),
        });
    }

    let mut walker = DayWalker::new(request.start_date, options.max_scan_days);
    let mut steps = vec![SimulationStep::start(
        request.start_date,
        calendar.classify(&request.start_date),
    )];

    // counting phase
    let mut counter: i64 = 0;
    let mut candidate = request.start_date;
    while counter < request.day_count {
        let date = walker.advance()?;
        let kind = calendar.classify(&date);
        let step = match (kind, request.mode) {
            (DayKind::Suspended, _) => SimulationStep::skipped(date, StepReason::Suspended, kind),
            (DayKind::Weekend, CountingMode::Business) => {
                SimulationStep::skipped(date, StepReason::Weekend, kind)
            }
            (DayKind::Holiday, CountingMode::Business) => {
                SimulationStep::skipped(date, StepReason::Holiday, kind)
            }
            _ => {
                counter += 1;
                candidate = date;
                walker.reset();
                SimulationStep::counted(date, counter, kind)
            }
        };
        trace!(date = %step.date, reason = ?step.reason, count = counter, "deadline step");
        steps.push(step);
    }

    // roll-forward phase
    let trail = calendar
        .roll_forward_trail(&candidate, options.max_scan_days)
        .map_err(|err| {
            let scanned = match err {
                CalendarError::NoBusinessDay { scanned, .. } => scanned,
                _ => options.max_scan_days,
            };
            warn!(
                start = %request.start_date,
                candidate = %candidate,
                scanned,
                "no business day found to roll the deadline forward to"
            );
            DeadlineError::UnboundedCalendar {
                start: request.start_date,
                scanned,
            }
        })?;
    let mut due_date = candidate;
    for (date, kind) in trail {
        trace!(date = %date, kind = ?kind, "deadline rolled forward");
        steps.push(SimulationStep::rolled_forward(date, kind));
        due_date = date;
    }

    debug!(
        start = %request.start_date,
        day_count = request.day_count,
        mode = %request.mode,
        due_date = %due_date,
        rolled_forward = due_date != candidate,
        steps = steps.len(),
        "deadline computed"
    );
    Ok(DeadlineResult { due_date, steps })
}

/// Compute several deadlines against the same calendar.
///
/// Each request is independent; one failing request does not affect the others.
pub fn compute_deadlines<'a, T, I>(
    requests: I,
    calendar: &T,
) -> Vec<Result<DeadlineResult, DeadlineError>>
where
    T: DateRoll + ?Sized,
    I: IntoIterator<Item = &'a DeadlineRequest>,
{
    requests
        .into_iter()
        .map(|request| compute_deadline(request, calendar))
        .collect()
}

/// Steps through the days after a start date, bounding each run of non-qualifying days.
struct DayWalker {
    start: NaiveDate,
    current: NaiveDate,
    /// Days inspected since the last qualifying day.
    run: u32,
    limit: u32,
}

impl DayWalker {
    fn new(start: NaiveDate, limit: u32) -> Self {
        DayWalker {
            start,
            current: start,
            run: 0,
            limit,
        }
    }

    /// Mark the current day as qualifying.
    fn reset(&mut self) {
        self.run = 0;
    }

    fn advance(&mut self) -> Result<NaiveDate, DeadlineError> {
        let next = if self.run < self.limit {
            self.current.succ_opt()
        } else {
            None
        };
        match next {
            Some(date) => {
                self.current = date;
                self.run += 1;
                Ok(date)
            }
            None => {
                warn!(
                    start = %self.start,
                    last = %self.current,
                    scanned = self.run,
                    "scan limit exhausted before the deadline was resolved"
                );
                Err(DeadlineError::UnboundedCalendar {
                    start: self.start,
                    scanned: self.run,
                })
            }
        }
    }
}
