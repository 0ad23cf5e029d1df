//! Structured log events for sync passes.
//!
//! Each function emits a `tracing` event with structured fields.

use quotesync_core::models::SyncReport;

/// A sync pass has started.
pub fn sync_started(unsynced: usize) {
    tracing::info!(event = "sync_started", unsynced = unsynced, "sync started");
}

/// A sync pass committed its merge.
pub fn sync_completed(report: &SyncReport) {
    tracing::info!(
        event = "sync_completed",
        pushed = report.pushed,
        push_failed = report.push_failed,
        added = report.added,
        conflicts = report.conflicts,
        total = report.total,
        "sync completed"
    );
}

/// A sync pass aborted without committing.
pub fn sync_failed(reason: &str) {
    tracing::error!(event = "sync_failed", reason = %reason, "sync failed");
}

/// A sync request was dropped because another pass was running.
pub fn sync_skipped() {
    tracing::debug!(event = "sync_skipped", "sync already in progress, request dropped");
}

/// A local record received its remote id.
pub fn record_pushed(id: u64, category: &str) {
    tracing::debug!(event = "record_pushed", id = id, category = %category, "record pushed");
}

/// A local record could not be pushed and stays unsynced.
pub fn push_failed(category: &str, error: &str) {
    tracing::warn!(
        event = "push_failed",
        category = %category,
        error = %error,
        "record push failed, will retry next pass"
    );
}

/// A shared id differed between local and remote; the remote copy was kept.
pub fn conflict_resolved(id: u64) {
    tracing::info!(event = "conflict_resolved", id = id, winner = "remote", "conflict resolved");
}

/// A persisted snapshot could not be read and was replaced by defaults.
pub fn snapshot_recovered(key: &str, error: &str) {
    tracing::warn!(
        event = "snapshot_recovered",
        key = %key,
        error = %error,
        "stored snapshot unreadable, defaults restored"
    );
}
