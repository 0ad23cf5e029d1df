//! # quotesync-sync
//!
//! Sync engine for the local quote list: push unsynced records, pull the
//! authoritative remote set, merge with remote precedence, commit, report.
//! Includes the periodic scheduler and two remote endpoints: an in-memory
//! mock server and an HTTP client (behind the `http` feature).

pub mod engine;
pub mod remote;
pub mod scheduler;
pub mod sync;

pub use engine::{SharedRecords, SyncEngine};
pub use remote::{Endpoint, HttpEndpoint, HttpEndpointConfig, InMemoryEndpoint};
pub use scheduler::SyncScheduler;
pub use sync::{merge, MergeResult, PushResult};
