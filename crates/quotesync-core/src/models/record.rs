//! The record model: a quote text with its category and an optional
//! remote-assigned id.

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// A single quote.
///
/// `id` is `None` until the remote endpoint has accepted the record. Once
/// assigned it is never changed by the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub text: String,
    pub category: String,
}

impl Record {
    /// Build a local, unsynced record from user input.
    ///
    /// Both fields are trimmed; an empty text or category is rejected.
    pub fn new(text: &str, category: &str) -> Result<Self, ValidationError> {
        let record = Self {
            id: None,
            text: text.trim().to_string(),
            category: category.trim().to_string(),
        };
        record.validate()?;
        Ok(record)
    }

    /// Build a record that already carries a remote id.
    pub fn with_id(id: u64, text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            text: text.into(),
            category: category.into(),
        }
    }

    /// Check the non-empty invariants on text and category.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.text.trim().is_empty() {
            return Err(ValidationError::EmptyText);
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::EmptyCategory);
        }
        Ok(())
    }

    /// Whether the remote endpoint has assigned this record an id.
    pub fn is_synced(&self) -> bool {
        self.id.is_some()
    }

    /// Whether `other` carries the same text and category. Ids are ignored.
    pub fn same_content(&self, other: &Record) -> bool {
        self.text == other.text && self.category == other.category
    }
}
