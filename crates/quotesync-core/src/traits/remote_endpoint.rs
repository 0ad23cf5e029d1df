use std::future::Future;
use std::sync::Arc;

use crate::errors::QuoteResult;
use crate::models::Record;

/// The authoritative collection of records on the server side.
pub trait IRemoteEndpoint: Send + Sync {
    /// Fetch every record the endpoint holds.
    ///
    /// The returned records are owned by the caller; mutating them never
    /// affects the endpoint's own state.
    fn list_all(&self) -> impl Future<Output = QuoteResult<Vec<Record>>> + Send;

    /// Create a record and return it with its newly assigned, unique id.
    fn create(
        &self,
        text: &str,
        category: &str,
    ) -> impl Future<Output = QuoteResult<Record>> + Send;
}

impl<T: IRemoteEndpoint> IRemoteEndpoint for Arc<T> {
    fn list_all(&self) -> impl Future<Output = QuoteResult<Vec<Record>>> + Send {
        (**self).list_all()
    }

    fn create(
        &self,
        text: &str,
        category: &str,
    ) -> impl Future<Output = QuoteResult<Record>> + Send {
        (**self).create(text, category)
    }
}
