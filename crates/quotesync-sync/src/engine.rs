//! SyncEngine — owns the shared local record list and runs sync passes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use quotesync_core::errors::QuoteResult;
use quotesync_core::models::{SyncOutcome, SyncReport};
use quotesync_core::traits::{IPersistedStore, IRemoteEndpoint};
use quotesync_observability::events;
use quotesync_storage::RecordStore;

use crate::sync::{merge, pull_all, push_unsynced};

/// Handle to the local record list shared by the engine and presentation.
pub type SharedRecords<S> = Arc<Mutex<RecordStore<S>>>;

/// Runs sync passes against one remote endpoint.
///
/// At most one pass runs at a time. A `sync()` call made while a pass is in
/// flight returns `SyncOutcome::Skipped` without touching the list.
pub struct SyncEngine<S, R> {
    records: SharedRecords<S>,
    remote: R,
    in_flight: AtomicBool,
    last_sync_at: std::sync::Mutex<Option<DateTime<Utc>>>,
}

impl<S, R> SyncEngine<S, R>
where
    S: IPersistedStore,
    R: IRemoteEndpoint,
{
    pub fn new(records: SharedRecords<S>, remote: R) -> Self {
        Self {
            records,
            remote,
            in_flight: AtomicBool::new(false),
            last_sync_at: std::sync::Mutex::new(None),
        }
    }

    /// Run one sync pass: push, pull, merge, commit, report.
    ///
    /// Never returns an error. Failures are reported as `SyncOutcome::Failed`
    /// and leave the local list exactly as it was.
    pub async fn sync(&self) -> SyncOutcome {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            events::sync_skipped();
            return SyncOutcome::Skipped;
        };

        let mut records = self.records.lock().await;
        match self.run_pass(&mut records).await {
            Ok(report) => {
                events::sync_completed(&report);
                if let Ok(mut last) = self.last_sync_at.lock() {
                    *last = Some(Utc::now());
                }
                SyncOutcome::Completed(report)
            }
            Err(e) => {
                let reason = e.to_string();
                events::sync_failed(&reason);
                SyncOutcome::Failed { reason }
            }
        }
    }

    async fn run_pass(&self, store: &mut RecordStore<S>) -> QuoteResult<SyncReport> {
        // The pass works on a copy; the shared list changes only at commit.
        let mut working = store.records().to_vec();
        events::sync_started(store.unsynced().count());

        let push = push_unsynced(&self.remote, &mut working).await;
        if !push.is_clean() {
            tracing::warn!(
                failed = push.failed,
                "quotesync: some records stay unsynced until the next pass"
            );
        }
        let pulled = pull_all(&self.remote).await?;
        let merged = merge(&working, pulled);

        let report = SyncReport {
            pushed: push.pushed,
            push_failed: push.failed,
            added: merged.added,
            conflicts: merged.conflicts.len(),
            total: merged.records.len(),
        };
        store.replace_all(merged.records)?;
        Ok(report)
    }

    /// Whether a pass is currently running.
    pub fn is_syncing(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// When the last pass committed, if any has.
    pub fn last_sync_at(&self) -> Option<DateTime<Utc>> {
        self.last_sync_at.lock().ok().and_then(|last| *last)
    }

    /// The shared local record list.
    pub fn records(&self) -> &SharedRecords<S> {
        &self.records
    }

    /// The remote endpoint this engine syncs with.
    pub fn remote(&self) -> &R {
        &self.remote
    }
}

/// Holds the in-flight flag for the duration of a pass.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
