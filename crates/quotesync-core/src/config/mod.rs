//! Configuration, loaded from TOML. Every section falls back to defaults.

pub mod defaults;
mod observability_config;
mod remote_config;
mod storage_config;
mod sync_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{QuoteError, QuoteResult};

pub use observability_config::ObservabilityConfig;
pub use remote_config::RemoteConfig;
pub use storage_config::{StorageBackend, StorageConfig};
pub use sync_config::SyncConfig;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteConfig {
    pub storage: StorageConfig,
    pub remote: RemoteConfig,
    pub sync: SyncConfig,
    pub observability: ObservabilityConfig,
}

impl QuoteConfig {
    /// Parse a TOML document. Missing sections and fields take their defaults.
    pub fn from_toml(source: &str) -> QuoteResult<Self> {
        toml::from_str(source).map_err(|e| QuoteError::Config {
            reason: e.to_string(),
        })
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> QuoteResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| QuoteError::Config {
            reason: format!("cannot read {}: {e}", path.display()),
        })?;
        Self::from_toml(&source)
    }
}
