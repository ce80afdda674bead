use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use prazos::calendars::{Cal, Calendar};
use prazos::deadlines::{CountingMode, DeadlineOptions, DEFAULT_MAX_SCAN_DAYS};
use prazos::json::JSON;

/// Top-level `prazos` configuration.
///
/// Calendar paths are resolved against the working directory.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrazosConfig {
    /// Upper bound on days scanned after the start date.
    #[serde(default = "default_max_scan_days")]
    pub max_scan_days: u32,

    /// Counting mode used when `--mode` is not given.
    #[serde(default)]
    pub mode: CountingMode,

    /// Calendar files used when no `--calendar` is given.
    #[serde(default)]
    pub calendars: Vec<PathBuf>,
}

impl Default for PrazosConfig {
    fn default() -> Self {
        Self {
            max_scan_days: default_max_scan_days(),
            mode: CountingMode::default(),
            calendars: Vec::new(),
        }
    }
}

fn default_max_scan_days() -> u32 {
    DEFAULT_MAX_SCAN_DAYS
}

impl PrazosConfig {
    /// Read the config file at `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }

    pub fn options(&self) -> DeadlineOptions {
        DeadlineOptions {
            max_scan_days: self.max_scan_days,
        }
    }

    /// Load the calendars named on the command line, falling back to the configured ones.
    pub fn calendar(&self, cli_paths: &[PathBuf]) -> Result<Calendar> {
        let paths = if cli_paths.is_empty() {
            &self.calendars
        } else {
            cli_paths
        };
        if paths.is_empty() {
            warn!("no calendar given, using a Saturday/Sunday weekend without holidays");
            return Ok(Calendar::from(Cal::default()));
        }
        let cals = paths
            .iter()
            .map(|p| read_calendar(p))
            .collect::<Result<Vec<_>>>()?;
        Ok(Calendar::from(cals))
    }
}

fn read_calendar(path: &Path) -> Result<Cal> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read calendar file: {}", path.display()))?;
    let cal = Cal::from_json(&json)
        .with_context(|| format!("failed to parse calendar file: {}", path.display()))?;
    info!(
        path = %path.display(),
        holidays = cal.holidays().len(),
        suspensions = cal.suspensions().len(),
        "calendar loaded"
    );
    Ok(cal)
}
