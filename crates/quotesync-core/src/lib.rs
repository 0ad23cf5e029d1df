//! # quotesync-core
//!
//! Foundation crate for quotesync.
//! Defines the record model, sync outcome types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::QuoteConfig;
pub use errors::{QuoteError, QuoteResult};
pub use models::{Record, Severity, StatusReport, SyncOutcome, SyncReport};
pub use traits::{IPersistedStore, IRemoteEndpoint};
