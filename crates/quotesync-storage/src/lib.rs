//! # quotesync-storage
//!
//! Persisted key-value stores and `RecordStore`, the single owner of the
//! local record list. Backends: in-memory (`MemoryStore`), one file per key
//! (`FileStore`), and SQLite (`SqliteStore`).

pub mod backends;
pub mod record_store;

use std::sync::Arc;

use quotesync_core::config::{StorageBackend, StorageConfig};
use quotesync_core::errors::{QuoteResult, StorageError};
use quotesync_core::traits::IPersistedStore;

pub use backends::{FileStore, MemoryStore, SqliteStore};
pub use record_store::{default_records, RecordStore};

/// Open the backend selected by `config`.
pub fn open_store(config: &StorageConfig) -> QuoteResult<Arc<dyn IPersistedStore>> {
    let dir = std::path::Path::new(&config.path);
    let store: Arc<dyn IPersistedStore> = match config.backend {
        StorageBackend::File => Arc::new(FileStore::open(dir)?),
        StorageBackend::Sqlite => {
            std::fs::create_dir_all(dir).map_err(|e| StorageError::Io {
                key: config.path.clone(),
                reason: e.to_string(),
            })?;
            Arc::new(SqliteStore::open(
                &dir.join(quotesync_core::config::defaults::DEFAULT_SQLITE_FILENAME),
            )?)
        }
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
    };
    tracing::debug!(backend = ?config.backend, path = %config.path, "quotesync: store opened");
    Ok(store)
}

/// Convert a rusqlite error into a storage error.
pub(crate) fn to_sqlite_err(e: rusqlite::Error) -> StorageError {
    StorageError::Sqlite {
        message: e.to_string(),
    }
}
