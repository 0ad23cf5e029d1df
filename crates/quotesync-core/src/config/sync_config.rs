use serde::{Deserialize, Serialize};

use super::defaults;

/// Sync scheduling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Seconds between periodic sync passes.
    pub interval_secs: u64,
    /// Run one pass as soon as the scheduler starts.
    pub sync_on_start: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            interval_secs: defaults::DEFAULT_SYNC_INTERVAL_SECS,
            sync_on_start: defaults::DEFAULT_SYNC_ON_START,
        }
    }
}
