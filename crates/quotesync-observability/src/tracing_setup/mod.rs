//! Tracing setup — structured logging with event helpers.

pub mod events;

use tracing_subscriber::EnvFilter;

use quotesync_core::config::ObservabilityConfig;

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV_VAR: &str = "QUOTESYNC_LOG";

/// Initialize the global tracing subscriber.
///
/// Respects `QUOTESYNC_LOG` for filtering and falls back to the configured
/// log level. Output goes to stderr so command output on stdout stays
/// clean. Calling it twice is harmless: the second call is ignored.
pub fn init_tracing(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let result = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if result.is_err() {
        tracing::debug!("quotesync: tracing subscriber already installed");
    }
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .with_test_writer()
        .try_init();
}
