//! Month command: print a calendar month grid.

use anyhow::{Context, Result};

use prazos::calendars::DateRoll;

use crate::cli::MonthArgs;
use crate::config::PrazosConfig;

pub fn run(args: MonthArgs) -> Result<i32> {
    let config = PrazosConfig::load(args.config.as_deref())?;
    let calendar = config.calendar(&args.calendars)?;
    let grid = calendar
        .print_month_with_legend(args.year, args.month)
        .context("failed to print month")?;
    print!("{grid}");
    Ok(0)
}
