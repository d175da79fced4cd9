use tracing_subscriber::EnvFilter;

/// All workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &[
    "wellcast",
    "wellcast_calendar",
    "wellcast_curve",
    "wellcast_segment",
    "wellcast_forecast",
    "wellcast_chart",
];

fn default_filter(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize tracing for the given verbosity level.
///
/// Mapping: 0 -> warn, 1 -> info, 2 -> debug, 3+ -> trace.
///
/// `RUST_LOG` overrides the level if set. Does nothing if a global
/// subscriber is already installed.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
