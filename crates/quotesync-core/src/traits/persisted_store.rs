use std::sync::Arc;

use crate::errors::QuoteResult;

/// Durable key-value byte store holding whole snapshots.
///
/// `store` replaces the value under `key` in full; readers never observe a
/// partially written value.
pub trait IPersistedStore: Send + Sync {
    fn load(&self, key: &str) -> QuoteResult<Option<Vec<u8>>>;
    fn store(&self, key: &str, bytes: &[u8]) -> QuoteResult<()>;
}

impl<T: IPersistedStore + ?Sized> IPersistedStore for Arc<T> {
    fn load(&self, key: &str) -> QuoteResult<Option<Vec<u8>>> {
        (**self).load(key)
    }

    fn store(&self, key: &str, bytes: &[u8]) -> QuoteResult<()> {
        (**self).store(key, bytes)
    }
}
