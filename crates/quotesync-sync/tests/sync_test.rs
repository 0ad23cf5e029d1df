//! Sync engine tests: push, pull, merge with remote precedence, commit,
//! failure handling, and overlapping passes.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use quotesync_core::constants::QUOTES_KEY;
use quotesync_core::errors::{QuoteResult, RemoteError};
use quotesync_core::models::{Record, SyncOutcome, SyncReport};
use quotesync_core::traits::{IPersistedStore, IRemoteEndpoint};
use quotesync_storage::{MemoryStore, RecordStore};
use quotesync_sync::remote::memory::seed_records;
use quotesync_sync::{InMemoryEndpoint, SyncEngine};

// ─── Helpers ───────────────────────────────────────────────

type Engine<R> = SyncEngine<Arc<MemoryStore>, R>;

fn engine_with<R: IRemoteEndpoint>(local: Vec<Record>, remote: R) -> (Engine<R>, Arc<MemoryStore>) {
    let backend = Arc::new(MemoryStore::new());
    let mut store = RecordStore::open(backend.clone()).unwrap();
    store.replace_all(local).unwrap();
    (SyncEngine::new(Arc::new(Mutex::new(store)), remote), backend)
}

async fn local_records<R: IRemoteEndpoint>(engine: &Engine<R>) -> Vec<Record> {
    engine.records().lock().await.records().to_vec()
}

fn persisted(backend: &MemoryStore) -> Vec<Record> {
    serde_json::from_slice(&backend.load(QUOTES_KEY).unwrap().unwrap()).unwrap()
}

fn report(outcome: &SyncOutcome) -> SyncReport {
    *outcome.report().expect("sync pass should complete")
}

/// Endpoint that assigns a fixed id on create and lists a fixed set.
struct ScriptedEndpoint {
    assign_id: u64,
    listing: Vec<Record>,
}

impl IRemoteEndpoint for ScriptedEndpoint {
    async fn list_all(&self) -> QuoteResult<Vec<Record>> {
        Ok(self.listing.clone())
    }

    async fn create(&self, text: &str, category: &str) -> QuoteResult<Record> {
        Ok(Record::with_id(self.assign_id, text, category))
    }
}

/// Endpoint whose create succeeds but never returns an id.
struct IdlessEndpoint;

impl IRemoteEndpoint for IdlessEndpoint {
    async fn list_all(&self) -> QuoteResult<Vec<Record>> {
        Ok(Vec::new())
    }

    async fn create(&self, text: &str, category: &str) -> QuoteResult<Record> {
        Ok(Record {
            id: None,
            text: text.to_string(),
            category: category.to_string(),
        })
    }
}

// ─── Scenarios ─────────────────────────────────────────────

#[tokio::test]
async fn scenario_a_push_assigns_id_and_record_is_kept() {
    let remote = ScriptedEndpoint {
        assign_id: 201,
        listing: vec![],
    };
    let (engine, backend) = engine_with(vec![Record::new("t1", "c1").unwrap()], remote);

    let outcome = engine.sync().await;
    let r = report(&outcome);
    assert_eq!((r.pushed, r.added, r.conflicts), (1, 0, 0));
    assert_eq!(local_records(&engine).await, vec![Record::with_id(201, "t1", "c1")]);
    assert_eq!(persisted(&backend), vec![Record::with_id(201, "t1", "c1")]);
}

#[tokio::test]
async fn scenario_b_remote_version_wins_conflict() {
    let remote = InMemoryEndpoint::with_records(vec![Record::with_id(5, "new", "A")], 6);
    let (engine, _) = engine_with(vec![Record::with_id(5, "old", "A")], remote);

    let r = report(&engine.sync().await);
    assert_eq!((r.pushed, r.added, r.conflicts), (0, 0, 1));
    assert_eq!(local_records(&engine).await, vec![Record::with_id(5, "new", "A")]);
}

#[tokio::test]
async fn scenario_c_new_remote_record_is_added() {
    let remote = InMemoryEndpoint::with_records(
        vec![Record::with_id(7, "x", "A"), Record::with_id(8, "y", "B")],
        9,
    );
    let (engine, _) = engine_with(vec![Record::with_id(7, "x", "A")], remote);

    let r = report(&engine.sync().await);
    assert_eq!((r.pushed, r.added, r.conflicts), (0, 1, 0));
    let ids: Vec<_> = local_records(&engine).await.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![Some(7), Some(8)]);
}

#[tokio::test]
async fn scenario_d_pull_failure_leaves_list_untouched() {
    let remote = InMemoryEndpoint::empty(1);
    remote.set_fail_list(true);
    let before = vec![Record::with_id(1, "a", "A")];
    let (engine, backend) = engine_with(before.clone(), remote);

    let outcome = engine.sync().await;
    assert!(matches!(outcome, SyncOutcome::Failed { ref reason } if reason.contains("simulated outage")));
    assert_eq!(local_records(&engine).await, before);
    assert_eq!(persisted(&backend), before);
    assert!(engine.last_sync_at().is_none());
}

// ─── Properties ────────────────────────────────────────────

#[tokio::test]
async fn remote_precedence_covers_category_changes() {
    let remote = Arc::new(InMemoryEndpoint::with_records(
        vec![Record::with_id(3, "same text", "Remote")],
        4,
    ));
    let (engine, _) = engine_with(vec![Record::with_id(3, "same text", "Local")], remote.clone());

    let r = report(&engine.sync().await);
    assert_eq!(r.conflicts, 1);
    assert_eq!(local_records(&engine).await, remote.snapshot());
}

#[tokio::test]
async fn unsynced_records_survive_failed_push() {
    let remote = InMemoryEndpoint::new();
    remote.set_fail_create(true);
    let local = Record::new("keep me", "Local").unwrap();
    let (engine, _) = engine_with(vec![local.clone()], remote);

    let r = report(&engine.sync().await);
    assert_eq!((r.pushed, r.push_failed), (0, 1));
    let records = local_records(&engine).await;
    assert_eq!(records.last(), Some(&local));
    assert_eq!(records.iter().filter(|r| !r.is_synced()).count(), 1);
}

#[tokio::test]
async fn push_failure_does_not_block_other_pushes() {
    let remote = Arc::new(InMemoryEndpoint::empty(300));
    remote.fail_next_creates(1);
    let first = Record::new("first", "A").unwrap();
    let second = Record::new("second", "B").unwrap();
    let (engine, _) = engine_with(vec![first.clone(), second], remote.clone());

    let r = report(&engine.sync().await);
    assert_eq!((r.pushed, r.push_failed), (1, 1));
    assert_eq!(remote.create_calls(), 2);
    assert_eq!(
        local_records(&engine).await,
        vec![Record::with_id(300, "second", "B"), first]
    );
}

#[tokio::test]
async fn pushed_record_is_not_pushed_again() {
    let remote = Arc::new(InMemoryEndpoint::new());
    let (engine, _) = engine_with(vec![Record::new("fresh", "Mine").unwrap()], remote.clone());

    let first = report(&engine.sync().await);
    assert_eq!(first.pushed, 1);
    let records = local_records(&engine).await;
    let pushed = records.iter().find(|r| r.text == "fresh").unwrap();
    assert_eq!(pushed.id, Some(103));
    assert_eq!(records.iter().filter(|r| !r.is_synced()).count(), 0);

    let second = report(&engine.sync().await);
    assert_eq!(second.pushed, 0);
    assert_eq!(remote.create_calls(), 1);
}

#[tokio::test]
async fn resync_without_changes_is_consistent() {
    let remote = InMemoryEndpoint::new();
    let (engine, _) = engine_with(
        vec![
            Record::with_id(1, "Welcome", "Intro"),
            Record::new("local", "Mine").unwrap(),
        ],
        remote,
    );

    let first = report(&engine.sync().await);
    assert!(!first.is_consistent());
    let after_first = local_records(&engine).await;

    let second = report(&engine.sync().await);
    assert!(second.is_consistent());
    assert_eq!(local_records(&engine).await, after_first);
}

#[tokio::test]
async fn records_missing_from_remote_are_not_deleted() {
    let remote = InMemoryEndpoint::with_records(vec![Record::with_id(101, "server", "Sync")], 102);
    let (engine, _) = engine_with(
        vec![Record::with_id(1, "Welcome", "Intro"), Record::with_id(101, "server", "Sync")],
        remote,
    );

    let r = report(&engine.sync().await);
    assert!(r.is_consistent());
    assert_eq!(
        local_records(&engine).await,
        vec![Record::with_id(101, "server", "Sync"), Record::with_id(1, "Welcome", "Intro")]
    );
}

#[tokio::test]
async fn create_without_id_counts_as_push_failure() {
    let local = Record::new("orphan", "X").unwrap();
    let (engine, _) = engine_with(vec![local.clone()], IdlessEndpoint);

    let r = report(&engine.sync().await);
    assert_eq!((r.pushed, r.push_failed), (0, 1));
    assert_eq!(local_records(&engine).await, vec![local]);
}

#[tokio::test]
async fn create_returning_an_id_already_held_is_refused() {
    let kept = Record::with_id(7, "kept", "A");
    let fresh = Record::new("fresh", "B").unwrap();
    let remote = ScriptedEndpoint {
        assign_id: 7,
        listing: vec![],
    };
    let (engine, backend) = engine_with(vec![kept.clone(), fresh.clone()], remote);

    let r = report(&engine.sync().await);
    assert_eq!((r.pushed, r.push_failed), (0, 1));
    assert_eq!(local_records(&engine).await, vec![kept, fresh]);
    assert_eq!(persisted(&backend), local_records(&engine).await);
}

#[tokio::test]
async fn duplicated_local_id_is_requeued_not_dropped() {
    let first = Record::with_id(103, "first quote", "Mine");
    let second = Record::with_id(103, "second quote", "Mine");
    let mut server = seed_records();
    server.push(first.clone());
    let remote = Arc::new(InMemoryEndpoint::with_records(server, 104));
    let (engine, _) = engine_with(vec![first.clone(), second], remote.clone());

    let r = report(&engine.sync().await);
    assert_eq!(r.conflicts, 0);
    let after_first = local_records(&engine).await;
    assert!(after_first.contains(&first));
    assert!(after_first.contains(&Record::new("second quote", "Mine").unwrap()));

    report(&engine.sync().await);
    let after_second = local_records(&engine).await;
    assert!(after_second.contains(&first));
    assert!(after_second.contains(&Record::with_id(104, "second quote", "Mine")));
    assert!(after_second.iter().all(Record::is_synced));
}

#[tokio::test]
async fn pull_failure_discards_ids_assigned_this_pass() {
    let remote = Arc::new(InMemoryEndpoint::empty(50));
    remote.set_fail_list(true);
    let local = Record::new("pending", "P").unwrap();
    let (engine, _) = engine_with(vec![local.clone()], remote.clone());

    assert!(matches!(engine.sync().await, SyncOutcome::Failed { .. }));
    assert_eq!(local_records(&engine).await, vec![local]);
    assert_eq!(remote.snapshot().len(), 1);
}

#[tokio::test]
async fn pulled_records_are_independent_of_remote_state() {
    let remote = Arc::new(InMemoryEndpoint::new());
    let (engine, _) = engine_with(vec![], remote.clone());
    engine.sync().await;

    engine
        .records()
        .lock()
        .await
        .replace_all(vec![Record::with_id(101, "edited locally", "Sync")])
        .unwrap();
    assert_eq!(
        remote.snapshot()[0].text,
        "Server quote 1: Consistency is key."
    );

    let mut pulled = remote.list_all().await.unwrap();
    pulled[0].text = "mutated".into();
    assert_ne!(remote.snapshot()[0].text, "mutated");
}

#[tokio::test]
async fn server_side_edit_and_insert_arrive_on_next_pass() {
    let remote = Arc::new(InMemoryEndpoint::new());
    let (engine, _) = engine_with(vec![], remote.clone());
    assert_eq!(report(&engine.sync().await).added, 2);

    assert!(remote.update(102, "Server quote 2: revised.", "Sync"));
    assert!(!remote.update(999, "nope", "Sync"));
    remote.insert("Another client's quote", "Other");

    let r = report(&engine.sync().await);
    assert_eq!((r.added, r.conflicts, r.total), (1, 1, 3));
}

#[tokio::test]
async fn commit_failure_is_reported_and_list_kept() {
    struct ReadOnlyStore(MemoryStore);

    impl IPersistedStore for ReadOnlyStore {
        fn load(&self, key: &str) -> QuoteResult<Option<Vec<u8>>> {
            self.0.load(key)
        }

        fn store(&self, key: &str, _bytes: &[u8]) -> QuoteResult<()> {
            Err(quotesync_core::errors::StorageError::Io {
                key: key.to_string(),
                reason: "read-only".into(),
            }
            .into())
        }
    }

    let inner = MemoryStore::new();
    let before = vec![Record::with_id(9, "kept", "K")];
    inner
        .store(QUOTES_KEY, &serde_json::to_vec(&before).unwrap())
        .unwrap();
    let store = RecordStore::open(ReadOnlyStore(inner)).unwrap();
    let engine = SyncEngine::new(Arc::new(Mutex::new(store)), InMemoryEndpoint::new());

    let outcome = engine.sync().await;
    assert!(matches!(outcome, SyncOutcome::Failed { ref reason } if reason.contains("read-only")));
    assert_eq!(engine.records().lock().await.records(), before.as_slice());
}

// ─── Overlap ───────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn overlapping_sync_is_dropped() {
    let remote = InMemoryEndpoint::new().with_latency(Duration::from_millis(500));
    let (engine, _) = engine_with(vec![Record::new("slow", "S").unwrap()], remote);

    let (first, second) = tokio::join!(engine.sync(), async {
        tokio::task::yield_now().await;
        assert!(engine.is_syncing());
        engine.sync().await
    });

    assert!(first.is_completed());
    assert_eq!(second, SyncOutcome::Skipped);
    assert!(!engine.is_syncing());
    assert!(engine.last_sync_at().is_some());

    // The guard is released: a later call runs normally.
    assert!(engine.sync().await.is_completed());
}

#[tokio::test]
async fn network_errors_surface_as_failed_outcome_not_error() {
    struct DeadEndpoint;

    impl IRemoteEndpoint for DeadEndpoint {
        async fn list_all(&self) -> QuoteResult<Vec<Record>> {
            Err(RemoteError::Network {
                reason: "unreachable".into(),
            }
            .into())
        }

        async fn create(&self, _text: &str, _category: &str) -> QuoteResult<Record> {
            Err(RemoteError::Network {
                reason: "unreachable".into(),
            }
            .into())
        }
    }

    let local = vec![Record::new("a", "A").unwrap(), Record::with_id(2, "b", "B")];
    let (engine, _) = engine_with(local.clone(), DeadEndpoint);
    let outcome = engine.sync().await;
    assert!(matches!(outcome, SyncOutcome::Failed { .. }));
    assert_eq!(local_records(&engine).await, local);
}
