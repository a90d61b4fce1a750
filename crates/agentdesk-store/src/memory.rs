// SPDX-FileCopyrightText: 2026 Agentdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory store backend.

use std::collections::HashMap;
use std::sync::RwLock;

use agentdesk_core::{DeskError, PersistentStore};

/// Process-local key-value store.
///
/// Used by tests in place of a real storage backend and by deployments
/// that do not want sessions to survive a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys. Test convenience.
    pub fn len(&self) -> usize {
        self.entries.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PersistentStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DeskError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| DeskError::Internal("store lock poisoned".into()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), DeskError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| DeskError::Internal("store lock poisoned".into()))?;
        entries.remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), DeskError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| DeskError::Internal("store lock poisoned".into()))?;
        entries.clear();
        Ok(())
    }
}
