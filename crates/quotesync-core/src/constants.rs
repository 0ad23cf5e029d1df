/// quotesync version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Persisted-store key holding the serialized local record list.
pub const QUOTES_KEY: &str = "quotes";

/// Persisted-store key holding the last selected category filter.
pub const LAST_FILTER_KEY: &str = "lastFilterCategory";

/// Persisted-store key holding the last quote shown to the user.
pub const LAST_VIEWED_KEY: &str = "lastViewedQuote";

/// Persisted-store key holding the in-memory server's records between runs.
pub const MOCK_SERVER_KEY: &str = "mockServerQuotes";

/// Pseudo-category that matches every record.
pub const ALL_CATEGORIES: &str = "all";

/// First id handed out by the in-memory endpoint after its seed records.
pub const MOCK_FIRST_ID: u64 = 103;
