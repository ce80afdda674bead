use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};

use prazos::calendars::parse_iso_date;
use prazos::deadlines::CountingMode;

/// Judicial deadline calculator.
#[derive(Parser)]
#[command(
    name = "prazos",
    version,
    about = "Compute judicial deadlines with a day-by-day justification"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute a due date and, optionally, check a filing against it.
    Compute(ComputeArgs),
    /// Print the grid of one month of a calendar.
    Month(MonthArgs),
}

/// Arguments for the `compute` subcommand.
#[derive(clap::Args)]
pub struct ComputeArgs {
    /// Calendar JSON file. Repeat to combine several calendars.
    #[arg(long = "calendar")]
    pub calendars: Vec<PathBuf>,

    /// Date of the triggering event (YYYY-MM-DD).
    #[arg(short, long, value_parser = parse_iso_date)]
    pub start: NaiveDate,

    /// Time of the triggering event (HH:MM), shown in the justification only.
    #[arg(short, long, value_parser = parse_time)]
    pub time: Option<NaiveTime>,

    /// Number of days to count.
    #[arg(short, long, allow_negative_numbers = true)]
    pub days: i64,

    /// Counting mode: business (dias úteis) or calendar (dias corridos).
    #[arg(short, long)]
    pub mode: Option<CountingMode>,

    /// Filing date to check for timeliness (YYYY-MM-DD).
    #[arg(short, long, value_parser = parse_iso_date)]
    pub filed: Option<NaiveDate>,

    /// Print JSON instead of the justification text.
    #[arg(long)]
    pub json: bool,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Calendar JSON file. Repeat to combine several calendars.
    #[arg(long = "calendar")]
    pub calendars: Vec<PathBuf>,

    /// Year to print.
    #[arg(short, long)]
    pub year: i32,

    /// Month to print (1-12).
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: u32,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

fn parse_time(value: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use prazos::calendars::nd;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_compute() {
        let cli = Cli::parse_from([
            "prazos",
            "-vv",
            "compute",
            "--calendar",
            "a.json",
            "--calendar",
            "b.json",
            "--start",
            "2024-01-01",
            "--time",
            "14:30",
            "--days",
            "5",
            "--mode",
            "calendar",
        ]);
        assert_eq!(cli.verbose, 2);
        let Command::Compute(args) = cli.command else {
            panic!("expected compute");
        };
        assert_eq!(args.calendars.len(), 2);
        assert_eq!(args.start, nd(2024, 1, 1));
        assert_eq!(args.time, NaiveTime::from_hms_opt(14, 30, 0));
        assert_eq!(args.days, 5);
        assert_eq!(args.mode, Some(CountingMode::Calendar));
        assert_eq!(args.filed, None);
        assert!(!args.json);
    }

    #[test]
    fn test_rejects_bad_dates_and_months() {
        assert!(Cli::try_parse_from(["prazos", "compute", "--start", "01/01/2024", "--days", "1"])
            .is_err());
        assert!(Cli::try_parse_from(["prazos", "month", "--year", "2024", "--month", "13"]).is_err());
    }
}
