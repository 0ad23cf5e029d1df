use dashmap::DashMap;

use quotesync_core::errors::QuoteResult;
use quotesync_core::traits::IPersistedStore;

/// Process-local store. Used for tests and the `memory` backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IPersistedStore for MemoryStore {
    fn load(&self, key: &str) -> QuoteResult<Option<Vec<u8>>> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    fn store(&self, key: &str, bytes: &[u8]) -> QuoteResult<()> {
        self.entries.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}
