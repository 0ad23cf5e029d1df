//! Push unsynced local records to the remote.
//!
//! Creates are issued one at a time, in list order. A failed create leaves
//! its record unsynced and does not stop the remaining pushes. An id the
//! list already holds is refused: the record stays unsynced.

use std::collections::HashSet;

use quotesync_core::errors::RemoteError;
use quotesync_core::models::Record;
use quotesync_core::traits::IRemoteEndpoint;
use quotesync_observability::events;

/// Push every record lacking an id, writing assigned ids back in place.
pub async fn push_unsynced<R: IRemoteEndpoint>(remote: &R, records: &mut [Record]) -> PushResult {
    let mut result = PushResult::default();
    let mut known: HashSet<u64> = records.iter().filter_map(|r| r.id).collect();

    for record in records.iter_mut().filter(|r| !r.is_synced()) {
        match remote.create(&record.text, &record.category).await {
            Ok(created) => match created.id {
                Some(id) if !known.insert(id) => {
                    result.failed += 1;
                    events::push_failed(
                        &record.category,
                        &format!("remote assigned id {id}, which is already in use locally"),
                    );
                }
                Some(id) => {
                    record.id = Some(id);
                    result.pushed += 1;
                    events::record_pushed(id, &record.category);
                }
                None => {
                    result.failed += 1;
                    events::push_failed(&record.category, &RemoteError::MissingId.to_string());
                }
            },
            Err(e) => {
                result.failed += 1;
                events::push_failed(&record.category, &e.to_string());
            }
        }
    }

    result
}

/// Result of a push phase.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PushResult {
    /// Records that received an id.
    pub pushed: usize,
    /// Records that stay unsynced until the next pass.
    pub failed: usize,
}

impl PushResult {
    /// Whether every attempted push succeeded.
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}
