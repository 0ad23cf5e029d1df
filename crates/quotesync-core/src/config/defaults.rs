// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_STORAGE_PATH: &str = "quotesync-data";
pub const DEFAULT_SQLITE_FILENAME: &str = "quotesync.db";

// --- Remote ---
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_INITIAL_BACKOFF_MS: u64 = 500;
pub const DEFAULT_MAX_BACKOFF_MS: u64 = 5_000;
pub const DEFAULT_MOCK_LATENCY_MS: u64 = 0;

// --- Sync ---
pub const DEFAULT_SYNC_INTERVAL_SECS: u64 = 30;
pub const DEFAULT_SYNC_ON_START: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
