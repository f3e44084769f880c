//! Single-file JSON backend.
//!
//! The whole mapping is one JSON object on disk. Writes go to a sibling temp
//! file which is then renamed over the original, so a reader never observes
//! a half-written store. A `.lock` file next to the store serializes writers
//! across processes. A store file that no longer parses is moved aside to
//! `<file>.corrupt` on the next write so counting can continue.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::error::StoreError;
use super::traits::KvStore;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".lock");
        PathBuf::from(name)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn corrupt_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".corrupt");
        PathBuf::from(name)
    }

    fn write_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }

    fn acquire(&self, exclusive: bool) -> Result<File, StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
            }
        }
        let lock = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.lock_path())
            .map_err(|e| self.write_error(e))?;
        let locked = if exclusive {
            FileExt::lock_exclusive(&lock)
        } else {
            FileExt::lock_shared(&lock)
        };
        locked.map_err(|e| self.write_error(e))?;
        Ok(lock)
    }

    fn load_map(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|e| StoreError::Decode {
            key: self.path.display().to_string(),
            source: e,
        })
    }

    fn persist_map(&self, map: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(map).map_err(|e| StoreError::Encode {
            key: self.path.display().to_string(),
            source: e,
        })?;
        let temp = self.temp_path();
        let written = File::create(&temp).and_then(|mut file| {
            file.write_all(content.as_bytes())?;
            file.sync_all()
        });
        if let Err(e) = written.and_then(|_| fs::rename(&temp, &self.path)) {
            let _ = fs::remove_file(&temp);
            return Err(self.write_error(e));
        }
        tracing::trace!(path = %self.path.display(), keys = map.len(), "store persisted");
        Ok(())
    }

    fn update<F>(&self, mutate: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let _lock = self.acquire(true)?;
        let mut map = match self.load_map() {
            Ok(map) => map,
            Err(e @ StoreError::Decode { .. }) => {
                let aside = self.corrupt_path();
                tracing::warn!(
                    error = %e,
                    moved_to = %aside.display(),
                    "store file unreadable, starting from an empty store"
                );
                if let Err(e) = fs::rename(&self.path, &aside) {
                    tracing::warn!(error = %e, "failed to move corrupt store aside");
                }
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        mutate(&mut map);
        self.persist_map(&map)
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let _lock = self.acquire(false)?;
        Ok(self.load_map()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.update(|map| {
            map.insert(key.to_string(), value.to_string());
        })
    }
}
