//! Diagnostic logging setup.
//!
//! Game text owns stdout, so log lines always go to stderr and stay quiet
//! unless `BLACKJACK_LOG` asks for more, e.g. `BLACKJACK_LOG=debug`.

use tracing_subscriber::EnvFilter;

pub const ENV_LOG: &str = "BLACKJACK_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Builds the filter from `BLACKJACK_LOG`, falling back to `warn`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. A second call is a no-op.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
