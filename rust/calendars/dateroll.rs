use chrono::prelude::*;
use serde::{Deserialize, Serialize};

use crate::calendars::CalendarError;

/// Maximum number of days [`DateRoll::roll_forward_bus_day`] inspects before failing.
pub const MAX_ROLL_DAYS: u32 = 3650;

/// Classification of a single calendar date.
///
/// When several categories apply the reported one follows the precedence
/// `Suspended > Holiday > Weekend > Business`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// A weekday that is neither a holiday nor suspended.
    Business,
    /// A day excluded by the calendar's week mask.
    Weekend,
    /// A specific non-working date.
    Holiday,
    /// A date inside a suspension period.
    Suspended,
}

impl DayKind {
    pub fn is_business(&self) -> bool {
        matches!(self, DayKind::Business)
    }
}

/// Day classification and business day rolling over a holiday calendar.
pub trait DateRoll {
    /// Returns whether the date is part of the general working week.
    fn is_weekday(&self, date: &NaiveDate) -> bool;

    /// Returns whether the date is a specific holiday excluded from the regular working week.
    fn is_holiday(&self, date: &NaiveDate) -> bool;

    /// Returns whether the date falls within a suspension period.
    fn is_suspended(&self, date: &NaiveDate) -> bool;

    /// Name of the holiday on `date`, if the calendar records one.
    fn holiday_name(&self, _date: &NaiveDate) -> Option<&str> {
        None
    }

    /// Name of the suspension period covering `date`, if the calendar records one.
    fn suspension_name(&self, _date: &NaiveDate) -> Option<&str> {
        None
    }

    /// Classify the date as business, weekend, holiday or suspended.
    fn classify(&self, date: &NaiveDate) -> DayKind {
        if self.is_suspended(date) {
            DayKind::Suspended
        } else if self.is_holiday(date) {
            DayKind::Holiday
        } else if !self.is_weekday(date) {
            DayKind::Weekend
        } else {
            DayKind::Business
        }
    }

    /// Returns whether the date is a business day, i.e. a weekday, not a holiday and not suspended.
    fn is_bus_day(&self, date: &NaiveDate) -> bool {
        self.classify(date).is_business()
    }

    /// Returns whether the date is not a business day.
    fn is_non_bus_day(&self, date: &NaiveDate) -> bool {
        !self.is_bus_day(date)
    }

    /// Return the `date`, if a business day, or get the next business date after `date`.
    ///
    /// Fails with [`CalendarError::NoBusinessDay`] after [`MAX_ROLL_DAYS`] days without one.
    fn roll_forward_bus_day(&self, date: &NaiveDate) -> Result<NaiveDate, CalendarError> {
        let trail = self.roll_forward_trail(date, MAX_ROLL_DAYS)?;
        Ok(trail.last().map_or(*date, |(d, _)| *d))
    }

    /// The days visited when rolling `date` forward, ending on the first business day after it.
    ///
    /// Empty if `date` is already a business day. At most `max_days` days are inspected.
    fn roll_forward_trail(
        &self,
        date: &NaiveDate,
        max_days: u32,
    ) -> Result<Vec<(NaiveDate, DayKind)>, CalendarError> {
        let mut trail: Vec<(NaiveDate, DayKind)> = Vec::new();
        if self.is_bus_day(date) {
            return Ok(trail);
        }
        let mut current = *date;
        loop {
            let scanned = trail.len() as u32;
            let no_business_day = CalendarError::NoBusinessDay {
                from: *date,
                scanned,
            };
            if scanned >= max_days {
                return Err(no_business_day);
            }
            current = current.succ_opt().ok_or(no_business_day)?;
            let kind = self.classify(&current);
            trail.push((current, kind));
            if kind.is_business() {
                return Ok(trail);
            }
        }
    }

    /// Return a vector of business dates between a start and end, inclusive.
    ///
    /// Unlike a settlement calendar `start` and `end` need not be business days themselves.
    fn bus_date_range(&self, start: &NaiveDate, end: &NaiveDate) -> Vec<NaiveDate> {
        self.cal_date_range(start, end)
            .into_iter()
            .filter(|d| self.is_bus_day(d))
            .collect()
    }

    /// Return a vector of calendar dates between a start and end, inclusive.
    fn cal_date_range(&self, start: &NaiveDate, end: &NaiveDate) -> Vec<NaiveDate> {
        start.iter_days().take_while(|d| d <= end).collect()
    }

    /// Print a representation of the month of the object.
    fn print_month(&self, year: i32, month: u32) -> Result<String, CalendarError> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(CalendarError::InvalidMonth { year, month })?;
        let mut output = format!("{:>15} {}\n", MONTH_NAMES[(month - 1) as usize], year);
        output += "Do Se Te Qu Qu Se Sa\n";

        let idx_start = first.weekday().num_days_from_sunday() as usize;
        let mut arr: [String; 42] = std::array::from_fn(|_| String::from("  "));
        for (i, date) in first.iter_days().take_while(|d| d.month() == month).enumerate() {
            arr[i + idx_start] = match self.classify(&date) {
                DayKind::Business => format!("{:>2}", date.day()),
                DayKind::Weekend => " .".to_string(),
                DayKind::Holiday => " *".to_string(),
                DayKind::Suspended => " S".to_string(),
            };
        }

        for row in arr.chunks(7) {
            output += &row.join(" ");
            output += "\n";
        }
        Ok(output)
    }

    /// Print a month followed by the legend of its symbols.
    fn print_month_with_legend(&self, year: i32, month: u32) -> Result<String, CalendarError> {
        let mut output = self.print_month(year, month)?;
        output += "Legenda:\n";
        output += "'1-31': Dia útil                '.': Fim de semana\n";
        output += "   '*': Feriado                 'S': Suspensão de prazos\n";
        Ok(output)
    }
}

const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::{nd, Cal, SuspensionPeriod};

    fn fixture_hol_cal() -> Cal {
        let hols = vec![nd(2015, 9, 5), nd(2015, 9, 7)]; // Saturday and Monday
        Cal::new(hols, vec![Weekday::Sat, Weekday::Sun])
    }

    fn fixture_recess_cal() -> Cal {
        Cal::new(vec![nd(2024, 1, 25)], vec![Weekday::Sat, Weekday::Sun]).with_suspension(
            SuspensionPeriod::new(nd(2024, 1, 1), nd(2024, 1, 20)).unwrap(),
        )
    }

    #[test]
    fn test_classify() {
        let cal = fixture_hol_cal();
        assert_eq!(cal.classify(&nd(2015, 9, 4)), DayKind::Business); // Friday
        assert_eq!(cal.classify(&nd(2015, 9, 6)), DayKind::Weekend); // Sunday
        assert_eq!(cal.classify(&nd(2015, 9, 7)), DayKind::Holiday); // Monday in Hol list
        // holiday on a Saturday is reported as the holiday
        assert_eq!(cal.classify(&nd(2015, 9, 5)), DayKind::Holiday);
    }

    #[test]
    fn test_classify_suspension_takes_precedence() {
        let cal = Cal::new(vec![nd(2024, 1, 1)], vec![Weekday::Sat, Weekday::Sun])
            .with_suspension(SuspensionPeriod::new(nd(2023, 12, 20), nd(2024, 1, 20)).unwrap());
        assert_eq!(cal.classify(&nd(2024, 1, 1)), DayKind::Suspended); // holiday
        assert_eq!(cal.classify(&nd(2024, 1, 6)), DayKind::Suspended); // Saturday
        assert_eq!(cal.classify(&nd(2024, 1, 9)), DayKind::Suspended); // Tuesday
        assert_eq!(cal.classify(&nd(2024, 1, 22)), DayKind::Business);
    }

    #[test]
    fn test_is_business_day() {
        let cal = fixture_hol_cal();
        assert!(!cal.is_bus_day(&nd(2015, 9, 7))); // Monday in Hol list
        assert!(cal.is_bus_day(&nd(2015, 9, 10))); // Thursday
        assert!(!cal.is_bus_day(&nd(2024, 1, 6))); // Saturday
        assert!(cal.is_non_bus_day(&nd(2015, 9, 7)));
        assert!(!cal.is_non_bus_day(&nd(2015, 9, 10)));
    }

    #[test]
    fn test_roll_forward_bus_day() {
        let cal = fixture_hol_cal();
        assert_eq!(cal.roll_forward_bus_day(&nd(2015, 9, 7)).unwrap(), nd(2015, 9, 8));
        assert_eq!(cal.roll_forward_bus_day(&nd(2015, 9, 5)).unwrap(), nd(2015, 9, 8));
        assert_eq!(cal.roll_forward_bus_day(&nd(2015, 9, 4)).unwrap(), nd(2015, 9, 4));
    }

    #[test]
    fn test_roll_forward_bus_day_over_suspension() {
        let cal = fixture_recess_cal();
        assert_eq!(cal.roll_forward_bus_day(&nd(2024, 1, 3)).unwrap(), nd(2024, 1, 22));
    }

    #[test]
    fn test_roll_forward_trail() {
        let cal = fixture_hol_cal();
        assert!(cal.roll_forward_trail(&nd(2015, 9, 4), 10).unwrap().is_empty());
        let trail = cal.roll_forward_trail(&nd(2015, 9, 5), 10).unwrap();
        assert_eq!(
            trail,
            vec![
                (nd(2015, 9, 6), DayKind::Weekend),
                (nd(2015, 9, 7), DayKind::Holiday),
                (nd(2015, 9, 8), DayKind::Business),
            ]
        );
        assert_eq!(
            cal.roll_forward_trail(&nd(2015, 9, 5), 2).unwrap_err(),
            CalendarError::NoBusinessDay {
                from: nd(2015, 9, 5),
                scanned: 2
            }
        );
    }

    #[test]
    fn test_roll_forward_bus_day_without_business_days() {
        let all = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ];
        let cal = Cal::new(vec![], all.to_vec());
        match cal.roll_forward_bus_day(&nd(2024, 1, 1)) {
            Err(CalendarError::NoBusinessDay { from, scanned }) => {
                assert_eq!(from, nd(2024, 1, 1));
                assert_eq!(scanned, MAX_ROLL_DAYS);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_date_ranges() {
        let cal = fixture_hol_cal();
        let cal_days = cal.cal_date_range(&nd(2015, 9, 4), &nd(2015, 9, 8));
        assert_eq!(cal_days.len(), 5);
        let bus_days = cal.bus_date_range(&nd(2015, 9, 4), &nd(2015, 9, 8));
        assert_eq!(bus_days, vec![nd(2015, 9, 4), nd(2015, 9, 8)]);
        assert!(cal.cal_date_range(&nd(2015, 9, 8), &nd(2015, 9, 4)).is_empty());
    }

    #[test]
    fn test_print_month() {
        let cal = fixture_recess_cal();
        let result = cal.print_month(2024, 1).unwrap();
        let raw_output = r#"        Janeiro 2024
Do Se Te Qu Qu Se Sa
    S  S  S  S  S  S
 S  S  S  S  S  S  S
 S  S  S  S  S  S  S
 . 22 23 24  * 26  .
 . 29 30 31$$$$$$$$$
$$$$$$$$$$$$$$$$$$$$
"#;
        let expected = raw_output.replace("$", " ");
        assert_eq!(result, expected);
    }

    #[test]
    fn test_print_month_with_legend() {
        let cal = fixture_hol_cal();
        let result = cal.print_month_with_legend(2015, 9).unwrap();
        assert!(result.starts_with("       Setembro 2015\n"));
        assert!(result.contains("Legenda:"));
        assert!(result.ends_with("'S': Suspensão de prazos\n"));
    }

    #[test]
    fn test_print_month_invalid() {
        let cal = fixture_hol_cal();
        assert_eq!(
            cal.print_month(2024, 13).unwrap_err(),
            CalendarError::InvalidMonth {
                year: 2024,
                month: 13
            }
        );
    }
}
