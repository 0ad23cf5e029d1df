//! The three phases of a sync pass: push, pull, merge.

pub mod merge;
pub mod pull;
pub mod push;

pub use merge::{merge, MergeResult};
pub use pull::pull_all;
pub use push::{push_unsynced, PushResult};
