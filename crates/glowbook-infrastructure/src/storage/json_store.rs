//! Atomic JSON file storage.
//!
//! Writes go to a temporary file in the target directory, are flushed to
//! disk, and then renamed over the destination, so a crash mid-write
//! never leaves a half-written file behind. An exclusive lock file guards
//! against concurrent processes touching the same state.

use glowbook_core::{GlowbookError, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// A single JSON document on disk with atomic replace semantics.
///
/// Absent files read as `None`; `save` creates parent directories on
/// demand. Vault files are small, so reads and writes run inline on the
/// calling task.
pub struct JsonFile<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T> JsonFile<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Creates a handle for the JSON document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    /// The on-disk location of this document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the document, returning `None` when the file does not exist.
    pub fn load(&self) -> Result<Option<T>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let value = serde_json::from_str(&content)?;
        Ok(Some(value))
    }

    /// Saves the document atomically under an exclusive lock.
    pub fn save(&self, value: &T) -> Result<()> {
        let _lock = FileLock::acquire(&self.path)?;
        self.write_atomic(value)
    }

    /// Deletes the document if it exists.
    pub fn remove(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    fn write_atomic(&self, value: &T) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(value)?;

        // Write to a dot-prefixed sibling, then rename into place.
        let tmp_path = self.tmp_path();
        {
            let mut tmp = File::create(&tmp_path)?;
            tmp.write_all(json.as_bytes())?;
            tmp.sync_all()?;
        }
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "json_store".to_string());
        self.path.with_file_name(format!(".{}.tmp", file_name))
    }
}

/// An exclusive advisory lock tied to a data file.
///
/// The lock lives in a `.lock` sibling of the data file and is released
/// (and the lock file removed) on drop.
pub struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    /// Acquires the lock for the given data file, blocking until it is
    /// available.
    pub fn acquire(data_path: &Path) -> Result<Self> {
        let lock_path = data_path.with_extension("lock");
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive().map_err(|e| {
                GlowbookError::storage(format!(
                    "Failed to acquire lock on {}: {}",
                    lock_path.display(),
                    e
                ))
            })?;
        }

        Ok(Self { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // The advisory lock releases with the file handle; the lock file
        // itself is best-effort cleanup.
        let _ = fs::remove_file(&self.lock_path);
    }
}
