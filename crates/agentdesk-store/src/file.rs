// SPDX-FileCopyrightText: 2026 Agentdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON-file store backend.
//!
//! The whole key space is one JSON object on disk, loaded at open and
//! rewritten on every mutation. Writes go through a temp file plus atomic
//! rename so a crash mid-write never leaves a truncated document.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use agentdesk_core::{DeskError, PersistentStore};
use tracing::warn;

/// Durable key-value store backed by a single JSON document.
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Opens the store at `path`, loading any existing document.
    ///
    /// A missing file starts empty; an unreadable or malformed document is
    /// logged and also starts empty rather than failing startup.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, DeskError> {
        let path = path.into();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(storage_err)?;
        }
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<BTreeMap<String, String>>(&raw) {
                Ok(map) => map,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "store document malformed, starting empty");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "store document unreadable, starting empty");
                BTreeMap::new()
            }
        };
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), DeskError> {
        let raw = serde_json::to_string_pretty(entries).map_err(storage_err)?;
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, raw).map_err(storage_err)?;
        std::fs::rename(&tmp, &self.path).map_err(storage_err)?;
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>, DeskError> {
        self.entries
            .lock()
            .map_err(|_| DeskError::Internal("store lock poisoned".into()))
    }
}

fn storage_err(e: impl std::error::Error + Send + Sync + 'static) -> DeskError {
    DeskError::Storage {
        source: Box::new(e),
    }
}

impl PersistentStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DeskError> {
        let mut entries = self.lock()?;
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), DeskError> {
        let mut entries = self.lock()?;
        if entries.remove(key).is_some() {
            self.flush(&entries)?;
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), DeskError> {
        let mut entries = self.lock()?;
        entries.clear();
        self.flush(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn values_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("console.json");

        let store = FileStore::open(&path).unwrap();
        store.set("token", "tok-123").unwrap();
        store.set("user_info", r#"{"id":1}"#).unwrap();
        drop(store);

        // Simulated process restart.
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("token").as_deref(), Some("tok-123"));
        assert_eq!(reopened.get("user_info").as_deref(), Some(r#"{"id":1}"#));
    }

    #[test]
    fn malformed_document_starts_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("console.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("token"), None);

        // The store remains usable after recovery.
        store.set("token", "fresh").unwrap();
        assert_eq!(store.get("token").as_deref(), Some("fresh"));
    }

    #[test]
    fn clear_empties_the_document_on_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("console.json");

        let store = FileStore::open(&path).unwrap();
        store.set("token", "abc").unwrap();
        store.set("workflow_drafts", "[]").unwrap();
        store.clear().unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("token"), None);
        assert_eq!(reopened.get("workflow_drafts"), None);
    }

    #[test]
    fn missing_parent_directories_are_created() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/state/console.json");

        let store = FileStore::open(&path).unwrap();
        store.set("token", "abc").unwrap();
        assert!(path.exists());
    }
}
