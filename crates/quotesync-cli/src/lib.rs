//! # quotesync-cli
//!
//! `QuoteBook`, the presentation facade over the local record list and the
//! sync engine, plain-text rendering, and the remote endpoint's lifetime
//! across runs of the `quotesync` binary.

pub mod book;
pub mod render;
pub mod session;

pub use book::QuoteBook;
