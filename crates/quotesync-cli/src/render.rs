//! Plain-text rendering for terminal output.

use quotesync_core::constants::ALL_CATEGORIES;
use quotesync_core::models::{Record, Severity, StatusReport};

/// One line per record: the quoted text, its category, and its id or an
/// unsynced marker.
pub fn record_line(record: &Record) -> String {
    let tag = match record.id {
        Some(id) => format!("(ID: {id})"),
        None => "(Unsynced)".to_string(),
    };
    format!("\"{}\" ({}) {tag}", record.text, record.category)
}

/// The filtered list, or a note when it is empty.
pub fn record_list(records: &[Record], category: &str) -> String {
    if records.is_empty() {
        return if category == ALL_CATEGORIES {
            "No quotes available in the collection.".to_string()
        } else {
            format!("No quotes found for category: {category}.")
        };
    }
    records
        .iter()
        .map(record_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// A single quote as shown by `random`.
pub fn quote(record: Option<&Record>) -> String {
    match record {
        Some(r) => format!("\"{}\"\n- Category: {}", r.text, r.category),
        None => "No quotes available! Add a new one or import from JSON.".to_string(),
    }
}

/// A status message prefixed with its severity.
pub fn status(report: &StatusReport) -> String {
    let label = match report.severity {
        Severity::Info => "info",
        Severity::Success => "ok",
        Severity::Warning => "warning",
        Severity::Error => "error",
    };
    format!("[{label}] {}", report.message)
}
