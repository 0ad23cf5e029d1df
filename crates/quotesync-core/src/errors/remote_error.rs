/// Remote endpoint errors.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("network error: {reason}")]
    Network { reason: String },

    #[error("request rejected with status {status}: {reason}")]
    Rejected { status: u16, reason: String },

    #[error("endpoint returned a created record without an id")]
    MissingId,

    #[error("could not decode endpoint response: {reason}")]
    Decode { reason: String },
}
