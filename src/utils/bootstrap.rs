//! Bootstrap utilities for the calculator binary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "CALCULATOR_LOG";

/// Initialize tracing with the CALCULATOR_LOG environment variable.
///
/// Falls back to `default_filter` (normally the configured filter) if
/// CALCULATOR_LOG is not set. Logs go to stderr so results on stdout stay
/// machine-readable.
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env(LOG_ENV_VAR)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
