//! Backend tests: every store honours load/store, file-backed stores survive
//! close + reopen.

use quotesync_core::config::{StorageBackend, StorageConfig};
use quotesync_core::models::Record;
use quotesync_core::traits::IPersistedStore;
use quotesync_storage::{open_store, FileStore, MemoryStore, RecordStore, SqliteStore};

fn exercise(store: &dyn IPersistedStore) {
    assert_eq!(store.load("quotes").unwrap(), None);
    store.store("quotes", b"[1]").unwrap();
    assert_eq!(store.load("quotes").unwrap().as_deref(), Some(&b"[1]"[..]));
    store.store("quotes", b"[2]").unwrap();
    assert_eq!(store.load("quotes").unwrap().as_deref(), Some(&b"[2]"[..]));
    assert_eq!(store.load("other").unwrap(), None);
}

#[test]
fn memory_store_load_store() {
    let store = MemoryStore::new();
    exercise(&store);
    assert_eq!(store.len(), 1);
}

#[test]
fn sqlite_store_load_store() {
    let store = SqliteStore::open_in_memory().unwrap();
    exercise(&store);
    assert_eq!(store.key_count().unwrap(), 1);
}

#[test]
fn file_store_load_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    exercise(&store);
}

#[test]
fn file_store_keeps_keys_inside_its_directory() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(&dir.path().join("data")).unwrap();
    store.store("../escape", b"x").unwrap();
    assert!(!dir.path().join("escape.json").exists());
    assert_eq!(store.load("../escape").unwrap().as_deref(), Some(&b"x"[..]));
}

#[test]
fn file_store_overwrite_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    store.store("quotes", b"[1]").unwrap();
    store.store("quotes", b"[1,2]").unwrap();

    assert_eq!(store.load("quotes").unwrap().unwrap(), b"[1,2]");
    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["quotes.json".to_string()]);
}

#[test]
fn file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut records = RecordStore::open(FileStore::open(dir.path()).unwrap()).unwrap();
        records.append("persisted", "Disk").unwrap();
        records.set_last_filter("Disk").unwrap();
    }
    let reopened = RecordStore::open(FileStore::open(dir.path()).unwrap()).unwrap();
    assert_eq!(reopened.len(), 2);
    assert_eq!(
        reopened.records()[1],
        Record::new("persisted", "Disk").unwrap()
    );
    assert_eq!(reopened.last_filter().unwrap().as_deref(), Some("Disk"));
}

#[test]
fn sqlite_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.db");
    {
        let mut records = RecordStore::open(SqliteStore::open(&path).unwrap()).unwrap();
        records
            .replace_all(vec![Record::with_id(42, "answer", "Meaning")])
            .unwrap();
    }
    let reopened = RecordStore::open(SqliteStore::open(&path).unwrap()).unwrap();
    assert_eq!(
        reopened.records(),
        &[Record::with_id(42, "answer", "Meaning")]
    );
}

#[test]
fn open_store_selects_configured_backend() {
    let dir = tempfile::tempdir().unwrap();
    for backend in [
        StorageBackend::File,
        StorageBackend::Sqlite,
        StorageBackend::Memory,
    ] {
        let config = StorageConfig {
            backend,
            path: dir.path().join(format!("{backend:?}")).display().to_string(),
        };
        let store = open_store(&config).unwrap();
        exercise(store.as_ref());
    }
}
