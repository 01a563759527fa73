//! Filesystem-backed key-value storage.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LadleError, Result};

use super::Storage;

/// Key-value storage rooted at a data directory, one file per key.
///
/// Writes use the write-to-temp-then-rename pattern so a crash or power
/// loss mid-write never leaves a partially written value behind.
#[derive(Debug, Clone)]
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    /// Create storage rooted at the given directory.
    ///
    /// The directory is created lazily on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The storage root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The file backing a key.
    pub fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl Storage for FsStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(|e| LadleError::StorageRead {
            key: key.to_string(),
            message: e.to_string(),
        })?;

        Ok(Some(content))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(|e| LadleError::StorageWrite {
            key: key.to_string(),
            message: e.to_string(),
        })?;

        let path = self.key_path(key);

        // Atomic write: write to temp file, then rename
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, value)
            .and_then(|()| fs::rename(&temp_path, &path))
            .map_err(|e| LadleError::StorageWrite {
                key: key.to_string(),
                message: e.to_string(),
            })
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let path = self.key_path(key);

        if !path.exists() {
            return Ok(false);
        }

        fs::remove_file(&path).map_err(|e| LadleError::StorageWrite {
            key: key.to_string(),
            message: e.to_string(),
        })?;

        Ok(true)
    }
}
