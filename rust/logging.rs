use tracing_subscriber::EnvFilter;

/// Targets whose events are shown. Only the library emits events, under `prazos`.
const CRATE_TARGETS: &[&str] = &["prazos"];

/// Install the stderr subscriber for the `prazos` binary.
///
/// Without `-v` only scan-limit warnings from the calculator are shown. `-v` adds calendar
/// loading and request summaries, `-vv` the per-deadline `debug!` summary and `-vvv` every
/// counted, skipped or rolled day. A set `RUST_LOG` takes over entirely.
///
/// Logs go to stderr so that `compute --json` output on stdout stays parseable.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let default_filter = CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
