//! RecordStore — owns the local record list and its persisted snapshot.
//!
//! All mutation goes through `append` and `replace_all`. Both write the
//! snapshot before the in-memory list changes, so a failed write leaves the
//! list as it was.

use quotesync_core::constants::{LAST_FILTER_KEY, LAST_VIEWED_KEY, QUOTES_KEY};
use quotesync_core::errors::QuoteResult;
use quotesync_core::models::Record;
use quotesync_core::traits::IPersistedStore;
use quotesync_observability::events;

/// Records installed on first run or when the snapshot cannot be read.
pub fn default_records() -> Vec<Record> {
    vec![Record::with_id(
        1,
        "Welcome! Add a quote or sync with server.",
        "Intro",
    )]
}

/// The local record list plus the small pieces of UI state stored beside it.
#[derive(Debug)]
pub struct RecordStore<S> {
    store: S,
    records: Vec<Record>,
}

impl<S: IPersistedStore> RecordStore<S> {
    /// Open the store and load the persisted list.
    pub fn open(store: S) -> QuoteResult<Self> {
        let mut this = Self {
            store,
            records: Vec::new(),
        };
        this.reload()?;
        Ok(this)
    }

    /// Re-read the snapshot. A missing or unreadable snapshot is replaced by
    /// the default record set, which is persisted immediately.
    pub fn reload(&mut self) -> QuoteResult<()> {
        match self.store.load(QUOTES_KEY)? {
            Some(bytes) => match serde_json::from_slice::<Vec<Record>>(&bytes) {
                Ok(records) => {
                    tracing::debug!(count = records.len(), "quotesync: loaded local records");
                    self.records = records;
                }
                Err(e) => {
                    events::snapshot_recovered(QUOTES_KEY, &e.to_string());
                    self.replace_all(default_records())?;
                }
            },
            None => {
                tracing::info!("quotesync: no stored quotes, installing defaults");
                self.replace_all(default_records())?;
            }
        }
        Ok(())
    }

    /// The current list, in order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Records the remote has not yet assigned an id.
    pub fn unsynced(&self) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(|r| !r.is_synced())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.category) {
                seen.push(record.category.clone());
            }
        }
        seen
    }

    /// Append a validated, unsynced record built from user input.
    pub fn append(&mut self, text: &str, category: &str) -> QuoteResult<Record> {
        let record = Record::new(text, category)?;
        let mut next = self.records.clone();
        next.push(record.clone());
        self.replace_all(next)?;
        Ok(record)
    }

    /// Replace the whole list, persisting it first.
    pub fn replace_all(&mut self, records: Vec<Record>) -> QuoteResult<()> {
        let bytes = serde_json::to_vec(&records)?;
        self.store.store(QUOTES_KEY, &bytes)?;
        self.records = records;
        Ok(())
    }

    /// The last selected category filter, if any was saved.
    pub fn last_filter(&self) -> QuoteResult<Option<String>> {
        Ok(self
            .store
            .load(LAST_FILTER_KEY)?
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
    }

    pub fn set_last_filter(&self, category: &str) -> QuoteResult<()> {
        self.store.store(LAST_FILTER_KEY, category.as_bytes())
    }

    /// The last quote shown to the user. An unreadable value reads as `None`.
    pub fn last_viewed(&self) -> QuoteResult<Option<Record>> {
        let Some(bytes) = self.store.load(LAST_VIEWED_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_slice(&bytes) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                tracing::warn!(key = LAST_VIEWED_KEY, error = %e, "quotesync: ignoring unreadable last viewed quote");
                Ok(None)
            }
        }
    }

    pub fn set_last_viewed(&self, record: &Record) -> QuoteResult<()> {
        let bytes = serde_json::to_vec(record)?;
        self.store.store(LAST_VIEWED_KEY, &bytes)
    }

    /// The underlying persisted store.
    pub fn backend(&self) -> &S {
        &self.store
    }
}
