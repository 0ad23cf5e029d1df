//! SQLite-backed key-value store: a single `kv` table.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection, OptionalExtension};

use quotesync_core::errors::{QuoteResult, StorageError};
use quotesync_core::traits::IPersistedStore;

use crate::to_sqlite_err;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS kv (
        key        TEXT PRIMARY KEY NOT NULL,
        value      BLOB NOT NULL,
        updated_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
";

/// A single connection behind a mutex. Writes are serialized.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open a store backed by a file on disk.
    pub fn open(path: &Path) -> QuoteResult<Self> {
        let conn = Connection::open(path).map_err(to_sqlite_err)?;
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA busy_timeout = 5000;
            ",
        )
        .map_err(to_sqlite_err)?;
        Self::initialize(conn)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> QuoteResult<Self> {
        let conn = Connection::open_in_memory().map_err(to_sqlite_err)?;
        Self::initialize(conn)
    }

    fn initialize(conn: Connection) -> QuoteResult<Self> {
        conn.execute_batch(SCHEMA).map_err(to_sqlite_err)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn with_conn<F, T>(&self, f: F) -> QuoteResult<T>
    where
        F: FnOnce(&Connection) -> QuoteResult<T>,
    {
        let guard = self.conn.lock().map_err(|_| StorageError::LockPoisoned)?;
        f(&guard)
    }

    /// Number of keys stored.
    pub fn key_count(&self) -> QuoteResult<usize> {
        self.with_conn(|conn| {
            let count: i64 = conn
                .query_row("SELECT COUNT(*) FROM kv", [], |row| row.get(0))
                .map_err(to_sqlite_err)?;
            Ok(count as usize)
        })
    }
}

impl IPersistedStore for SqliteStore {
    fn load(&self, key: &str) -> QuoteResult<Option<Vec<u8>>> {
        self.with_conn(|conn| {
            let value = conn
                .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                    row.get::<_, Vec<u8>>(0)
                })
                .optional()
                .map_err(to_sqlite_err)?;
            Ok(value)
        })
    }

    fn store(&self, key: &str, bytes: &[u8]) -> QuoteResult<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO kv (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                                updated_at = datetime('now')",
                params![key, bytes],
            )
            .map_err(to_sqlite_err)?;
            Ok(())
        })
    }
}
