//! QuoteBook — what a front end needs from the local list and the engine.

use std::collections::HashSet;
use std::sync::Arc;

use rand::seq::SliceRandom;

use quotesync_core::constants::ALL_CATEGORIES;
use quotesync_core::errors::{QuoteResult, ValidationError};
use quotesync_core::models::{Record, StatusReport};
use quotesync_core::traits::{IPersistedStore, IRemoteEndpoint};
use quotesync_storage::RecordStore;
use quotesync_sync::{SharedRecords, SyncEngine};

/// Facade over the shared record list and its sync engine.
///
/// Every operation takes the list lock, so calls made while a sync pass is
/// running wait for its commit.
pub struct QuoteBook<S, R> {
    records: SharedRecords<S>,
    engine: Arc<SyncEngine<S, R>>,
}

impl<S, R> QuoteBook<S, R>
where
    S: IPersistedStore,
    R: IRemoteEndpoint,
{
    pub fn new(engine: Arc<SyncEngine<S, R>>) -> Self {
        Self {
            records: engine.records().clone(),
            engine,
        }
    }

    /// Build the engine and the book over an opened record store.
    pub fn open(store: RecordStore<S>, remote: R) -> Self {
        let records = Arc::new(tokio::sync::Mutex::new(store));
        Self::new(Arc::new(SyncEngine::new(records, remote)))
    }

    pub fn engine(&self) -> &Arc<SyncEngine<S, R>> {
        &self.engine
    }

    /// Append a quote from user input. Nothing changes if validation fails.
    pub async fn add_quote(&self, text: &str, category: &str) -> QuoteResult<StatusReport> {
        let record = self.records.lock().await.append(text, category)?;
        tracing::info!(category = %record.category, "quotesync: quote added locally");
        Ok(StatusReport::local_change())
    }

    pub async fn records(&self) -> Vec<Record> {
        self.records.lock().await.records().to_vec()
    }

    /// `"all"` followed by every distinct category, in first-seen order.
    pub async fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        categories.extend(self.records.lock().await.categories());
        categories
    }

    /// Select `category`, remember it, and return the matching records.
    pub async fn filter(&self, category: &str) -> QuoteResult<Vec<Record>> {
        let store = self.records.lock().await;
        store.set_last_filter(category)?;
        Ok(matching(store.records(), category))
    }

    /// The remembered filter, or `"all"` when none is saved or the saved
    /// category no longer has any records.
    pub async fn selected_filter(&self) -> QuoteResult<String> {
        let store = self.records.lock().await;
        let selected = match store.last_filter()? {
            Some(category) if store.categories().contains(&category) => category,
            _ => ALL_CATEGORIES.to_string(),
        };
        Ok(selected)
    }

    /// Records under the remembered filter.
    pub async fn filtered(&self) -> QuoteResult<Vec<Record>> {
        let selected = self.selected_filter().await?;
        self.filter(&selected).await
    }

    /// A uniformly random record, remembered as the last one viewed.
    pub async fn random_quote(&self) -> QuoteResult<Option<Record>> {
        let store = self.records.lock().await;
        let Some(record) = pick(store.records()) else {
            return Ok(None);
        };
        store.set_last_viewed(&record)?;
        Ok(Some(record))
    }

    pub async fn last_viewed(&self) -> QuoteResult<Option<Record>> {
        self.records.lock().await.last_viewed()
    }

    /// The whole list as a pretty-printed JSON array.
    pub async fn export_json(&self) -> QuoteResult<String> {
        let store = self.records.lock().await;
        Ok(serde_json::to_string_pretty(store.records())?)
    }

    /// Append the records in a JSON array and return how many were added.
    ///
    /// Every record is validated before anything is written. A record whose
    /// id already exists locally is dropped; two records sharing an id
    /// inside the import reject the whole import.
    pub async fn import_json(&self, bytes: &[u8]) -> QuoteResult<usize> {
        let imported: Vec<Record> = serde_json::from_slice(bytes)?;

        let mut import_ids = HashSet::new();
        for record in &imported {
            record.validate()?;
            if let Some(id) = record.id {
                if !import_ids.insert(id) {
                    return Err(ValidationError::DuplicateId { id }.into());
                }
            }
        }

        let mut store = self.records.lock().await;
        let local_ids: HashSet<u64> = store.records().iter().filter_map(|r| r.id).collect();
        let mut next = store.records().to_vec();
        let before = next.len();
        for record in imported {
            match record.id {
                Some(id) if local_ids.contains(&id) => {
                    tracing::debug!(id, "quotesync: imported id already present, skipping");
                }
                _ => next.push(record),
            }
        }
        let added = next.len() - before;
        store.replace_all(next)?;
        tracing::info!(added, "quotesync: quotes imported");
        Ok(added)
    }

    /// Run a sync pass and describe its outcome.
    pub async fn sync(&self) -> StatusReport {
        StatusReport::from(&self.engine.sync().await)
    }
}

fn matching(records: &[Record], category: &str) -> Vec<Record> {
    if category == ALL_CATEGORIES {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| r.category == category)
        .cloned()
        .collect()
}

fn pick(records: &[Record]) -> Option<Record> {
    records.choose(&mut rand::thread_rng()).cloned()
}
