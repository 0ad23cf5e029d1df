//! In-memory mock server.
//!
//! Holds an ordered record list and hands out sequential ids. Supports
//! simulated latency, server-side edits, and fault injection for tests.

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use quotesync_core::constants::MOCK_FIRST_ID;
use quotesync_core::errors::{QuoteResult, RemoteError};
use quotesync_core::models::Record;
use quotesync_core::traits::IRemoteEndpoint;

/// Records the mock server starts with.
pub fn seed_records() -> Vec<Record> {
    vec![
        Record::with_id(101, "Server quote 1: Consistency is key.", "Sync"),
        Record::with_id(102, "Server quote 2: Data integrity matters.", "Sync"),
    ]
}

#[derive(Debug)]
pub struct InMemoryEndpoint {
    records: Mutex<Vec<Record>>,
    next_id: AtomicU64,
    latency: Duration,
    fail_list: AtomicBool,
    fail_create: AtomicBool,
    fail_next_creates: AtomicUsize,
    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
}

impl InMemoryEndpoint {
    /// A server holding the two seed records, next id 103.
    pub fn new() -> Self {
        Self::with_records(seed_records(), MOCK_FIRST_ID)
    }

    /// A server with no records whose first assigned id is `first_id`.
    pub fn empty(first_id: u64) -> Self {
        Self::with_records(Vec::new(), first_id)
    }

    /// A server restored from a saved snapshot. Ids continue after the
    /// highest one held, and never below the first mock id.
    pub fn from_snapshot(records: Vec<Record>) -> Self {
        let next_id = records
            .iter()
            .filter_map(|r| r.id)
            .max()
            .map_or(MOCK_FIRST_ID, |max| (max + 1).max(MOCK_FIRST_ID));
        Self::with_records(records, next_id)
    }

    pub fn with_records(records: Vec<Record>, next_id: u64) -> Self {
        Self {
            records: Mutex::new(records),
            next_id: AtomicU64::new(next_id),
            latency: Duration::ZERO,
            fail_list: AtomicBool::new(false),
            fail_create: AtomicBool::new(false),
            fail_next_creates: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
        }
    }

    /// Delay every call by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Make every `list_all` fail with a network error while set.
    pub fn set_fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    /// Make every `create` fail with a network error while set.
    pub fn set_fail_create(&self, fail: bool) {
        self.fail_create.store(fail, Ordering::SeqCst);
    }

    /// Fail only the next `count` creates.
    pub fn fail_next_creates(&self, count: usize) {
        self.fail_next_creates.store(count, Ordering::SeqCst);
    }

    /// Edit a record on the server side. Returns false if the id is unknown.
    pub fn update(&self, id: u64, text: &str, category: &str) -> bool {
        let mut records = self.lock();
        match records.iter_mut().find(|r| r.id == Some(id)) {
            Some(record) => {
                record.text = text.to_string();
                record.category = category.to_string();
                true
            }
            None => false,
        }
    }

    /// Add a record on the server side, as another client would.
    pub fn insert(&self, text: &str, category: &str) -> Record {
        let record = Record::with_id(self.next_id.fetch_add(1, Ordering::SeqCst), text, category);
        self.lock().push(record.clone());
        record
    }

    /// Copy of everything the server holds.
    pub fn snapshot(&self) -> Vec<Record> {
        self.lock().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Record>> {
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn take_create_failure(&self) -> bool {
        if self.fail_create.load(Ordering::SeqCst) {
            return true;
        }
        self.fail_next_creates
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

impl Default for InMemoryEndpoint {
    fn default() -> Self {
        Self::new()
    }
}

fn simulated_outage() -> RemoteError {
    RemoteError::Network {
        reason: "simulated outage".to_string(),
    }
}

impl IRemoteEndpoint for InMemoryEndpoint {
    async fn list_all(&self) -> QuoteResult<Vec<Record>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(simulated_outage().into());
        }
        Ok(self.snapshot())
    }

    async fn create(&self, text: &str, category: &str) -> QuoteResult<Record> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;
        if self.take_create_failure() {
            return Err(simulated_outage().into());
        }
        Ok(self.insert(text, category))
    }
}
