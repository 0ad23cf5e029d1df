//! # quotesync-observability
//!
//! Tracing subscriber setup and the structured events emitted around sync
//! passes.

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_with_filter};
