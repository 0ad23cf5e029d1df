//! Wire format for the HTTP endpoint.
//!
//! `GET {base}/quotes` returns a JSON array of records.
//! `POST {base}/quotes` takes a `CreateRecordRequest` and returns the created
//! record, which must carry an id.

use serde::{Deserialize, Serialize};

/// Collection path, relative to the base URL.
pub const QUOTES_PATH: &str = "/quotes";

/// Body of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRecordRequest {
    pub text: String,
    pub category: String,
}
