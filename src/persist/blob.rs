//! Blob store boundary
//!
//! The core never talks to the filesystem directly; it reads and writes
//! named string blobs through [`BlobStore`]. `FileBlobStore` is the
//! production implementation (one file per key under a data directory).
//! `MemoryBlobStore` backs tests and can simulate write failures.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::errors::{PersistError, PersistResult};

/// Named raw-string blob storage.
pub trait BlobStore {
    /// Read the blob stored under `key`, if any.
    fn get(&self, key: &str) -> PersistResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous content.
    fn set(&self, key: &str, value: &str) -> PersistResult<()>;
}

/// File-backed blob store: one `<key>.json` file per key.
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    /// Open a blob store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> PersistResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| PersistError::io(dir.display().to_string(), e))?;
        Ok(Self { dir })
    }

    /// Directory this store writes under.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> PersistResult<Option<String>> {
        let path = self.blob_path(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| PersistError::io(key, e))
    }

    fn set(&self, key: &str, value: &str) -> PersistResult<()> {
        // Write to a sibling temp file, then rename, so readers never
        // observe a half-written blob.
        let path = self.blob_path(key);
        let tmp = self.dir.join(format!("{}.json.tmp", key));

        fs::write(&tmp, value).map_err(|e| PersistError::io(key, e))?;
        fs::rename(&tmp, &path).map_err(|e| PersistError::io(key, e))?;
        Ok(())
    }
}

#[derive(Default)]
struct MemoryInner {
    blobs: HashMap<String, String>,
    fail_writes: bool,
}

/// In-memory blob store.
///
/// Handles are cheap clones over shared state, so a test can keep one
/// handle for inspection while the bridge owns another. Write failures
/// can be switched on to exercise the store's rollback path.
#[derive(Clone, Default)]
pub struct MemoryBlobStore {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryBlobStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `set` fail with a rejected-write error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.borrow_mut().fail_writes = fail;
    }

    /// Inspect the raw blob currently stored under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().blobs.get(key).cloned()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> PersistResult<Option<String>> {
        Ok(self.inner.borrow().blobs.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PersistResult<()> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_writes {
            return Err(PersistError::write_rejected(key, "writes disabled"));
        }
        inner.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_get_missing_is_none() {
        let dir = TempDir::new().unwrap();
        let store = FileBlobStore::open(dir.path()).unwrap();

        assert!(store.get("directory").unwrap().is_none());
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = FileBlobStore::open(dir.path()).unwrap();

        store.set("directory", "[1,2,3]").unwrap();
        assert_eq!(store.get("directory").unwrap().unwrap(), "[1,2,3]");
    }

    #[test]
    fn test_file_store_overwrites() {
        let dir = TempDir::new().unwrap();
        let store = FileBlobStore::open(dir.path()).unwrap();

        store.set("directory", "old").unwrap();
        store.set("directory", "new").unwrap();
        assert_eq!(store.get("directory").unwrap().unwrap(), "new");
    }

    #[test]
    fn test_file_store_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("data").join("blobs");

        let store = FileBlobStore::open(&nested).unwrap();
        store.set("directory", "x").unwrap();

        assert!(nested.join("directory.json").exists());
    }

    #[test]
    fn test_memory_store_shared_handles() {
        let store = MemoryBlobStore::new();
        let handle = store.clone();

        store.set("directory", "payload").unwrap();
        assert_eq!(handle.raw("directory").unwrap(), "payload");
    }

    #[test]
    fn test_memory_store_fail_writes() {
        let store = MemoryBlobStore::new();
        store.set("directory", "first").unwrap();

        store.set_fail_writes(true);
        assert!(store.set("directory", "second").is_err());

        // Prior content is untouched
        assert_eq!(store.raw("directory").unwrap(), "first");
    }
}
