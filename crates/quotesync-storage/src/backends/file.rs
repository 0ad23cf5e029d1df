//! One file per key inside a directory. Writes go to a temp file that is
//! synced to disk and then renamed over the target, so a reader sees either
//! the old or the new value, never a partial one.

use std::fs::File;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use quotesync_core::errors::{QuoteResult, StorageError};
use quotesync_core::traits::IPersistedStore;

#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) the store directory.
    pub fn open(dir: &Path) -> QuoteResult<Self> {
        std::fs::create_dir_all(dir).map_err(|e| StorageError::Io {
            key: dir.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are fixed identifiers; anything outside [A-Za-z0-9_-] is replaced
        // so a key can never escape the directory.
        let safe: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{safe}.json"))
    }
}

impl IPersistedStore for FileStore {
    fn load(&self, key: &str) -> QuoteResult<Option<Vec<u8>>> {
        match std::fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io {
                key: key.to_string(),
                reason: e.to_string(),
            }
            .into()),
        }
    }

    fn store(&self, key: &str, bytes: &[u8]) -> QuoteResult<()> {
        let target = self.path_for(key);
        let tmp = target.with_extension("json.tmp");
        let io_err = |e: std::io::Error| StorageError::Io {
            key: key.to_string(),
            reason: e.to_string(),
        };
        let mut file = File::create(&tmp).map_err(io_err)?;
        file.write_all(bytes).map_err(io_err)?;
        // Flush to disk before the rename makes the new value visible.
        file.sync_all().map_err(io_err)?;
        drop(file);
        std::fs::rename(&tmp, &target).map_err(io_err)?;
        Ok(())
    }
}
