//! Error types. Each subsystem owns an enum; `QuoteError` aggregates them.

mod remote_error;
mod storage_error;
mod validation_error;

pub use remote_error::RemoteError;
pub use storage_error::StorageError;
pub use validation_error::ValidationError;

/// Top-level error for every quotesync operation.
#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    #[error("remote endpoint error: {0}")]
    Remote(#[from] RemoteError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid configuration: {reason}")]
    Config { reason: String },
}

impl QuoteError {
    /// Whether this error came from the remote endpoint's transport.
    pub fn is_network(&self) -> bool {
        matches!(self, QuoteError::Remote(RemoteError::Network { .. }))
    }
}

/// Convenience alias used across the workspace.
pub type QuoteResult<T> = Result<T, QuoteError>;
