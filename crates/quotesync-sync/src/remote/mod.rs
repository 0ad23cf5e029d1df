//! Remote endpoints: an in-memory mock server and an HTTP client.

pub mod http;
pub mod memory;
pub mod protocol;

use std::sync::Arc;

use quotesync_core::config::RemoteConfig;
use quotesync_core::errors::QuoteResult;
use quotesync_core::models::Record;
use quotesync_core::traits::IRemoteEndpoint;

pub use http::{HttpEndpoint, HttpEndpointConfig};
pub use memory::InMemoryEndpoint;

/// The endpoint selected by configuration.
#[derive(Debug)]
pub enum Endpoint {
    Memory(Arc<InMemoryEndpoint>),
    Http(HttpEndpoint),
}

impl Endpoint {
    /// HTTP when `endpoint_url` is set, otherwise the seeded mock server.
    pub fn from_config(config: &RemoteConfig) -> QuoteResult<Self> {
        match &config.endpoint_url {
            Some(url) => Ok(Endpoint::Http(HttpEndpoint::new(
                HttpEndpointConfig::from_remote_config(url, config),
            )?)),
            None => Ok(Endpoint::Memory(Arc::new(
                InMemoryEndpoint::new()
                    .with_latency(std::time::Duration::from_millis(config.mock_latency_ms)),
            ))),
        }
    }
}

impl IRemoteEndpoint for Endpoint {
    async fn list_all(&self) -> QuoteResult<Vec<Record>> {
        match self {
            Endpoint::Memory(remote) => remote.list_all().await,
            Endpoint::Http(remote) => remote.list_all().await,
        }
    }

    async fn create(&self, text: &str, category: &str) -> QuoteResult<Record> {
        match self {
            Endpoint::Memory(remote) => remote.create(text, category).await,
            Endpoint::Http(remote) => remote.create(text, category).await,
        }
    }
}
