//! Display-ready status derived from a sync outcome.

use serde::{Deserialize, Serialize};

use super::sync_outcome::{SyncOutcome, SyncReport};

/// How prominently presentation should show a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// A message for the user plus its severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    pub message: String,
    pub severity: Severity,
}

impl StatusReport {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    /// Shown while a pass is running.
    pub fn syncing() -> Self {
        Self::new("Syncing data... please wait.", Severity::Info)
    }

    /// Shown after a local add, before the next pass.
    pub fn local_change() -> Self {
        Self::new("New quote added locally. Sync required.", Severity::Info)
    }

    fn from_report(report: &SyncReport) -> Self {
        let added = format!(
            "Sync complete. {} new quotes added from server.",
            report.added
        );

        if report.conflicts > 0 {
            return Self::new(
                format!(
                    "{added} {} conflicts resolved (server version kept).",
                    report.conflicts
                ),
                Severity::Error,
            );
        }

        let base = if report.added > 0 || report.pushed > 0 {
            added
        } else {
            "Sync complete. Data is consistent.".to_string()
        };

        if report.push_failed > 0 {
            Self::new(
                format!(
                    "{base} {} quotes could not be pushed and will be retried.",
                    report.push_failed
                ),
                Severity::Warning,
            )
        } else {
            Self::new(base, Severity::Success)
        }
    }
}

impl From<&SyncOutcome> for StatusReport {
    fn from(outcome: &SyncOutcome) -> Self {
        match outcome {
            SyncOutcome::Completed(report) => Self::from_report(report),
            SyncOutcome::Failed { .. } => {
                Self::new("Sync failed. Check logs for details.", Severity::Error)
            }
            SyncOutcome::Skipped => Self::new("Sync already in progress.", Severity::Info),
        }
    }
}
