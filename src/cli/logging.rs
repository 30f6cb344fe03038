//! Diagnostics go to stderr so stdout only ever carries the chart.

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

/// `-v` count to default level; `RUST_LOG` wins when set.
#[must_use]
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Subscriber owned by the caller; install it with
/// `tracing::subscriber::with_default` for the span of one run.
#[must_use]
pub fn subscriber(verbose: u8) -> impl Subscriber + Send + Sync {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish()
}
