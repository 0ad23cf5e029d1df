//! HTTP endpoint with request timeout, and retry with exponential backoff
//! for reads.
//!
//! Wraps reqwest when the `http` feature is enabled. Without it every call
//! fails with a network error, so a build without networking still links.

use std::time::Duration;

use quotesync_core::config::RemoteConfig;
use quotesync_core::errors::{QuoteError, QuoteResult, RemoteError};
use quotesync_core::models::Record;
use quotesync_core::traits::IRemoteEndpoint;

#[cfg(feature = "http")]
use super::protocol::CreateRecordRequest;
use super::protocol::QUOTES_PATH;

/// Configuration for the HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpEndpointConfig {
    /// Base URL of the quote server, without a trailing slash.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum number of retry attempts for `list_all`.
    pub max_retries: u32,
    /// Initial backoff duration (doubles each retry).
    pub initial_backoff: Duration,
    /// Maximum backoff duration.
    pub max_backoff: Duration,
}

impl HttpEndpointConfig {
    pub fn from_remote_config(base_url: &str, config: &RemoteConfig) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.timeout_secs),
            max_retries: config.max_retries,
            initial_backoff: Duration::from_millis(config.initial_backoff_ms),
            max_backoff: Duration::from_millis(config.max_backoff_ms),
        }
    }
}

impl Default for HttpEndpointConfig {
    fn default() -> Self {
        Self::from_remote_config("", &RemoteConfig::default())
    }
}

/// Convert a string into a network error.
fn net_err(reason: impl Into<String>) -> QuoteError {
    RemoteError::Network {
        reason: reason.into(),
    }
    .into()
}

/// HTTP transport to a quote server.
#[derive(Debug)]
pub struct HttpEndpoint {
    config: HttpEndpointConfig,
    #[cfg(feature = "http")]
    client: reqwest::Client,
}

impl HttpEndpoint {
    pub fn new(config: HttpEndpointConfig) -> QuoteResult<Self> {
        #[cfg(feature = "http")]
        {
            let client = reqwest::Client::builder()
                .timeout(config.timeout)
                .gzip(true)
                .build()
                .map_err(|e| net_err(e.to_string()))?;
            Ok(Self { config, client })
        }

        #[cfg(not(feature = "http"))]
        {
            Ok(Self { config })
        }
    }

    pub fn config(&self) -> &HttpEndpointConfig {
        &self.config
    }

    fn url(&self) -> String {
        format!("{}{}", self.config.base_url, QUOTES_PATH)
    }

    /// Send one request. 4xx responses fail at once. For GET, 5xx responses
    /// and connection errors are retried with backoff; a POST is sent exactly
    /// once, since a create is not idempotent and the next pass retries it.
    #[cfg(feature = "http")]
    async fn send<T: serde::de::DeserializeOwned>(
        &self,
        method: reqwest::Method,
        body: Option<&CreateRecordRequest>,
    ) -> QuoteResult<T> {
        let url = self.url();
        let retries = if method == reqwest::Method::GET {
            self.config.max_retries
        } else {
            0
        };
        let mut backoff = self.config.initial_backoff;
        let mut last_err = String::new();

        for attempt in 0..=retries {
            if attempt > 0 {
                tracing::debug!(
                    "quotesync: retry attempt {}/{} after {:?}",
                    attempt,
                    retries,
                    backoff
                );
                tokio::time::sleep(backoff).await;
                backoff = (backoff * 2).min(self.config.max_backoff);
            }

            let mut req = self.client.request(method.clone(), &url);
            if let Some(b) = body {
                req = req.json(b);
            }

            match req.send().await {
                Ok(resp) => {
                    let status = resp.status();
                    if status.is_success() {
                        return resp.json::<T>().await.map_err(|e| {
                            RemoteError::Decode {
                                reason: e.to_string(),
                            }
                            .into()
                        });
                    }
                    if status.is_client_error() {
                        let body_text = resp.text().await.unwrap_or_default();
                        return Err(RemoteError::Rejected {
                            status: status.as_u16(),
                            reason: body_text,
                        }
                        .into());
                    }
                    last_err = format!("HTTP {status}");
                }
                Err(e) => {
                    last_err = e.to_string();
                }
            }
        }

        Err(net_err(format!(
            "{method} {url} failed after {} attempts: {last_err}",
            retries + 1
        )))
    }
}

impl IRemoteEndpoint for HttpEndpoint {
    async fn list_all(&self) -> QuoteResult<Vec<Record>> {
        #[cfg(feature = "http")]
        {
            self.send::<Vec<Record>>(reqwest::Method::GET, None).await
        }

        #[cfg(not(feature = "http"))]
        {
            Err(net_err(format!("http feature not enabled: {}", self.url())))
        }
    }

    async fn create(&self, text: &str, category: &str) -> QuoteResult<Record> {
        #[cfg(feature = "http")]
        {
            let body = CreateRecordRequest {
                text: text.to_string(),
                category: category.to_string(),
            };
            let created = self
                .send::<Record>(reqwest::Method::POST, Some(&body))
                .await?;
            if created.id.is_none() {
                return Err(RemoteError::MissingId.into());
            }
            Ok(created)
        }

        #[cfg(not(feature = "http"))]
        {
            let _ = (text, category);
            Err(net_err(format!("http feature not enabled: {}", self.url())))
        }
    }
}
