//! Merge pulled records into the local list with remote precedence.
//!
//! Output order: pulled records (remote order), then local records whose id
//! the pull did not return, then local records without an id. Ids are unique
//! in the output. A local record whose id an earlier local record already
//! holds loses the id and is kept as unsynced, so it is pushed again.

use std::collections::{HashMap, HashSet};

use quotesync_core::models::Record;
use quotesync_observability::events;

/// The merged list and what the merge found.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MergeResult {
    pub records: Vec<Record>,
    /// Pulled ids that were not present locally.
    pub added: usize,
    /// Shared ids whose text or category differed.
    pub conflicts: Vec<u64>,
    /// Local records stripped of a duplicated id and requeued for push.
    pub requeued: usize,
}

/// Merge `pulled` into `local`.
///
/// `local` is the list as it stood after the push phase. For every shared id
/// the pulled copy is kept, whatever the local copy says.
pub fn merge(local: &[Record], pulled: Vec<Record>) -> MergeResult {
    let mut result = MergeResult::default();

    // First holder of an id is the reference copy; later holders are requeued.
    let mut reference: HashMap<u64, &Record> = HashMap::new();
    let mut requeued: Vec<Record> = Vec::new();
    for record in local {
        let Some(id) = record.id else { continue };
        if reference.contains_key(&id) {
            tracing::warn!(
                id,
                text = %record.text,
                "quotesync: local id held by more than one record, requeueing for push"
            );
            requeued.push(Record {
                id: None,
                ..record.clone()
            });
        } else {
            reference.insert(id, record);
        }
    }
    result.requeued = requeued.len();

    let mut taken: HashSet<u64> = HashSet::with_capacity(pulled.len());

    for remote in pulled {
        let Some(id) = remote.id else {
            tracing::warn!(text = %remote.text, "quotesync: remote returned a record without id, ignoring");
            continue;
        };
        if !taken.insert(id) {
            tracing::warn!(id, "quotesync: remote returned duplicate id, keeping first");
            continue;
        }
        match reference.get(&id) {
            None => result.added += 1,
            Some(local) if !local.same_content(&remote) => {
                events::conflict_resolved(id);
                result.conflicts.push(id);
            }
            Some(_) => {}
        }
        result.records.push(remote);
    }

    // The engine never deletes: synced records the remote no longer lists
    // stay. Later holders of a duplicated id were requeued above.
    for record in local {
        if let Some(id) = record.id {
            if taken.insert(id) {
                result.records.push(record.clone());
            }
        }
    }

    result
        .records
        .extend(local.iter().filter(|r| !r.is_synced()).cloned());
    result.records.extend(requeued);

    result
}
