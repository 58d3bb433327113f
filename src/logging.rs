use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// All workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &["daywise", "daywise_calendar", "daywise_schedule"];

/// Builds the default filter directive for a verbosity level.
///
/// Mapping:
/// - 0      -> warn
/// - 1      -> info
/// - 2      -> debug
/// - 3+     -> trace
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

/// Install a global tracing subscriber for the workspace crates.
///
/// `RUST_LOG` overrides `verbosity` if set. Fails if a global subscriber is
/// already installed.
pub fn init(verbosity: u8) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}
