// src/utils/logging.rs
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber. `RUST_LOG` picks the filter (default `info`).
///
/// Logs go to stderr because `--stdout` prints extracted records on stdout, and the
/// two streams must not mix when the output is piped into another tool.
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Logging initialized (stderr)");
}
