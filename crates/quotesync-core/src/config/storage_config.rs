use serde::{Deserialize, Serialize};

use super::defaults;

/// Which persisted-store backend to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// One file per key inside `path`.
    #[default]
    File,
    /// A SQLite database inside `path`.
    Sqlite,
    /// Process memory only. Nothing survives a restart.
    Memory,
}

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Backend kind.
    pub backend: StorageBackend,
    /// Directory holding the store's files.
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: defaults::DEFAULT_STORAGE_PATH.to_string(),
        }
    }
}
