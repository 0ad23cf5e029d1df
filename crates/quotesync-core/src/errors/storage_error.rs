/// Persisted-store errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error on key {key}: {reason}")]
    Io { key: String, reason: String },

    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("store lock poisoned")]
    LockPoisoned,
}
