use serde::{Deserialize, Serialize};

use super::defaults;

/// Remote endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Base URL of the quote server. `None` selects the in-memory mock server.
    pub endpoint_url: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Retries after the first attempt for 5xx and connection failures on
    /// reads. Creates are never retried within a pass.
    pub max_retries: u32,
    /// First retry delay in milliseconds (doubles each retry).
    pub initial_backoff_ms: u64,
    /// Upper bound on the retry delay in milliseconds.
    pub max_backoff_ms: u64,
    /// Artificial latency added by the mock server, in milliseconds.
    pub mock_latency_ms: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint_url: None,
            timeout_secs: defaults::DEFAULT_TIMEOUT_SECS,
            max_retries: defaults::DEFAULT_MAX_RETRIES,
            initial_backoff_ms: defaults::DEFAULT_INITIAL_BACKOFF_MS,
            max_backoff_ms: defaults::DEFAULT_MAX_BACKOFF_MS,
            mock_latency_ms: defaults::DEFAULT_MOCK_LATENCY_MS,
        }
    }
}
