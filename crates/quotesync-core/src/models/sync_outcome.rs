use serde::{Deserialize, Serialize};

/// Counts produced by a completed sync pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    /// Local records that received an id from the remote this pass.
    pub pushed: usize,
    /// Local records whose push failed; they stay unsynced for the next pass.
    pub push_failed: usize,
    /// Pulled records whose id was not known locally.
    pub added: usize,
    /// Shared ids whose text or category differed; the remote copy was kept.
    pub conflicts: usize,
    /// Size of the committed local list.
    pub total: usize,
}

impl SyncReport {
    /// Whether the pass changed nothing and found nothing to resolve.
    pub fn is_consistent(&self) -> bool {
        self.pushed == 0 && self.added == 0 && self.conflicts == 0
    }
}

/// What a call to `sync()` did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SyncOutcome {
    /// The pass ran to completion and its merge was committed.
    Completed(SyncReport),
    /// The pass aborted; the local list is untouched.
    Failed { reason: String },
    /// Another pass was already running; this request was dropped.
    Skipped,
}

impl SyncOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, SyncOutcome::Completed(_))
    }

    /// The counts, when the pass completed.
    pub fn report(&self) -> Option<&SyncReport> {
        match self {
            SyncOutcome::Completed(report) => Some(report),
            _ => None,
        }
    }
}
