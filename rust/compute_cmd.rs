//! Compute command: count a deadline and optionally judge a filing against it.

use anyhow::{Context, Result};
use serde_json::json;
use tracing::{info, info_span};

use prazos::deadlines::{compute_deadline_with, justification, DeadlineRequest, TimelinessReport};

use crate::cli::ComputeArgs;
use crate::config::PrazosConfig;

/// Exit code reported when the filing is late.
pub const EXIT_LATE: i32 = 2;

/// Run the compute command, returning the process exit code.
pub fn run(args: ComputeArgs) -> Result<i32> {
    let _cmd = info_span!("compute").entered();
    let config = PrazosConfig::load(args.config.as_deref())?;
    let calendar = config.calendar(&args.calendars)?;

    let mode = args.mode.unwrap_or(config.mode);
    let mut request = DeadlineRequest::new(args.start, args.days, mode);
    if let Some(time) = args.time {
        request = request.at(time);
    }
    info!(
        start = %request.start_date,
        days = request.day_count,
        mode = %request.mode,
        "computing deadline"
    );

    let result = compute_deadline_with(&request, &calendar, &config.options())
        .context("failed to compute deadline")?;
    let report = args.filed.map(|filed| TimelinessReport::new(&result, filed));

    if args.json {
        let out = json!({
            "request": request,
            "result": result,
            "timeliness": report,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&out).context("failed to serialize result")?
        );
    } else {
        println!("{}", justification(&request, &result, &calendar));
        if let Some(report) = &report {
            println!("{}", report.summary());
        }
    }

    match report {
        Some(report) if !report.verdict.is_timely() => Ok(EXIT_LATE),
        _ => Ok(0),
    }
}
