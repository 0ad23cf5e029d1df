use quotesync_core::errors::ValidationError;
use quotesync_core::models::*;

#[test]
fn new_record_is_trimmed_and_unsynced() {
    let record = Record::new("  Stay curious.  ", " Life ").unwrap();
    assert_eq!(record.text, "Stay curious.");
    assert_eq!(record.category, "Life");
    assert!(!record.is_synced());
}

#[test]
fn new_record_rejects_blank_fields() {
    assert_eq!(Record::new("   ", "Life"), Err(ValidationError::EmptyText));
    assert_eq!(Record::new("text", ""), Err(ValidationError::EmptyCategory));
}

#[test]
fn record_json_omits_missing_id() {
    let local = Record::new("t1", "c1").unwrap();
    let json = serde_json::to_string(&local).unwrap();
    assert_eq!(json, r#"{"text":"t1","category":"c1"}"#);

    let synced: Record =
        serde_json::from_str(r#"{"id":201,"text":"t1","category":"c1"}"#).unwrap();
    assert_eq!(synced, Record::with_id(201, "t1", "c1"));
    assert!(synced.is_synced());
}

#[test]
fn same_content_ignores_id() {
    let a = Record::with_id(1, "x", "A");
    let b = Record::new("x", "A").unwrap();
    assert!(a.same_content(&b));
    assert!(!a.same_content(&Record::with_id(1, "x", "B")));
}

// --- Status reports ---

fn completed(pushed: usize, added: usize, conflicts: usize, push_failed: usize) -> SyncOutcome {
    SyncOutcome::Completed(SyncReport {
        pushed,
        push_failed,
        added,
        conflicts,
        total: 0,
    })
}

#[test]
fn conflicts_produce_error_severity() {
    let status = StatusReport::from(&completed(0, 2, 1, 0));
    assert_eq!(status.severity, Severity::Error);
    assert_eq!(
        status.message,
        "Sync complete. 2 new quotes added from server. 1 conflicts resolved (server version kept)."
    );
}

#[test]
fn pushed_or_added_produce_success() {
    let status = StatusReport::from(&completed(1, 0, 0, 0));
    assert_eq!(status.severity, Severity::Success);
    assert_eq!(status.message, "Sync complete. 0 new quotes added from server.");
}

#[test]
fn nothing_changed_is_consistent() {
    let status = StatusReport::from(&completed(0, 0, 0, 0));
    assert_eq!(status.severity, Severity::Success);
    assert_eq!(status.message, "Sync complete. Data is consistent.");
}

#[test]
fn push_failures_without_conflicts_warn() {
    let status = StatusReport::from(&completed(0, 0, 0, 2));
    assert_eq!(status.severity, Severity::Warning);
    assert!(status.message.starts_with("Sync complete. Data is consistent."));
    assert!(status.message.contains("2 quotes could not be pushed"));
}

#[test]
fn failed_and_skipped_outcomes() {
    let failed = StatusReport::from(&SyncOutcome::Failed {
        reason: "network error".into(),
    });
    assert_eq!(failed.severity, Severity::Error);
    assert_eq!(failed.message, "Sync failed. Check logs for details.");

    let skipped = StatusReport::from(&SyncOutcome::Skipped);
    assert_eq!(skipped.severity, Severity::Info);
}

#[test]
fn outcome_serializes_with_status_tag() {
    let json = serde_json::to_value(completed(1, 0, 0, 0)).unwrap();
    assert_eq!(json["status"], "completed");
    assert_eq!(json["pushed"], 1);
    assert!(completed(0, 0, 0, 0).report().unwrap().is_consistent());
}
