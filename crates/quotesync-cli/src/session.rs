//! Remote endpoint lifetime across CLI runs.
//!
//! Without `endpoint_url` the CLI talks to the in-memory server. Its records
//! are saved beside the local list so the next run continues from them and
//! never hands out an id a previous run already assigned.

use std::sync::Arc;
use std::time::Duration;

use quotesync_core::config::RemoteConfig;
use quotesync_core::constants::MOCK_SERVER_KEY;
use quotesync_core::errors::QuoteResult;
use quotesync_core::models::Record;
use quotesync_core::traits::IPersistedStore;
use quotesync_sync::{Endpoint, InMemoryEndpoint};

/// Open the configured endpoint, restoring the in-memory server's records
/// from `store` when one was saved.
pub fn open_endpoint<S: IPersistedStore>(config: &RemoteConfig, store: &S) -> QuoteResult<Endpoint> {
    if config.endpoint_url.is_some() {
        return Endpoint::from_config(config);
    }

    let server = match store.load(MOCK_SERVER_KEY)? {
        Some(bytes) => match serde_json::from_slice::<Vec<Record>>(&bytes) {
            Ok(records) => {
                tracing::debug!(count = records.len(), "quotesync: restored in-memory server");
                InMemoryEndpoint::from_snapshot(records)
            }
            Err(e) => {
                tracing::warn!(
                    key = MOCK_SERVER_KEY,
                    error = %e,
                    "quotesync: saved in-memory server unreadable, starting from seed"
                );
                InMemoryEndpoint::new()
            }
        },
        None => InMemoryEndpoint::new(),
    };
    Ok(Endpoint::Memory(Arc::new(
        server.with_latency(Duration::from_millis(config.mock_latency_ms)),
    )))
}

/// Save the in-memory server's records. HTTP endpoints keep their own state.
pub fn save_endpoint<S: IPersistedStore>(endpoint: &Endpoint, store: &S) -> QuoteResult<()> {
    if let Endpoint::Memory(server) = endpoint {
        let bytes = serde_json::to_vec(&server.snapshot())?;
        store.store(MOCK_SERVER_KEY, &bytes)?;
    }
    Ok(())
}
