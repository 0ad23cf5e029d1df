//! Pull the complete remote record set.

use quotesync_core::errors::QuoteResult;
use quotesync_core::models::Record;
use quotesync_core::traits::IRemoteEndpoint;

/// Fetch every record the remote holds.
pub async fn pull_all<R: IRemoteEndpoint>(remote: &R) -> QuoteResult<Vec<Record>> {
    match remote.list_all().await {
        Ok(records) => {
            tracing::debug!(count = records.len(), "quotesync: pulled remote records");
            Ok(records)
        }
        Err(e) => {
            tracing::warn!("quotesync: pull failed: {e}");
            Err(e)
        }
    }
}
