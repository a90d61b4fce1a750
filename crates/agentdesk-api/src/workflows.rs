// SPDX-FileCopyrightText: 2026 Agentdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local workflow draft store.
//!
//! The workflow designer autosaves drafts locally instead of round-tripping
//! the backend: the whole draft list lives as one JSON document under a
//! single store key. A corrupt list degrades to empty on read, the same
//! recovery rule the session layer applies to a corrupt profile.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use agentdesk_core::traits::store::KEY_WORKFLOW_DRAFTS;
use agentdesk_core::{DeskError, PersistentStore};

/// One saved workflow draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDraft {
    pub id: i64,
    pub name: String,
    /// Opaque designer graph; never interpreted here.
    pub definition: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}

/// Draft list persisted through a [`PersistentStore`].
pub struct WorkflowDrafts {
    store: Arc<dyn PersistentStore>,
}

impl WorkflowDrafts {
    pub fn new(store: Arc<dyn PersistentStore>) -> Self {
        Self { store }
    }

    /// All saved drafts. A missing or corrupt list reads as empty.
    pub fn list(&self) -> Vec<WorkflowDraft> {
        let Some(raw) = self.store.get(KEY_WORKFLOW_DRAFTS) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(drafts) => drafts,
            Err(e) => {
                warn!(error = %e, "discarding corrupt workflow draft list");
                Vec::new()
            }
        }
    }

    /// Looks up one draft by id.
    pub fn get(&self, id: i64) -> Option<WorkflowDraft> {
        self.list().into_iter().find(|d| d.id == id)
    }

    /// Inserts the draft, replacing any existing draft with the same id.
    /// Stamps `updated_at` with the current time.
    pub fn save(&self, mut draft: WorkflowDraft) -> Result<WorkflowDraft, DeskError> {
        draft.updated_at = Utc::now();
        let mut drafts = self.list();
        match drafts.iter_mut().find(|d| d.id == draft.id) {
            Some(slot) => *slot = draft.clone(),
            None => drafts.push(draft.clone()),
        }
        self.persist(&drafts)?;
        debug!(id = draft.id, name = %draft.name, "workflow draft saved");
        Ok(draft)
    }

    /// Removes the draft with the given id, if present.
    pub fn remove(&self, id: i64) -> Result<(), DeskError> {
        let mut drafts = self.list();
        drafts.retain(|d| d.id != id);
        self.persist(&drafts)
    }

    /// Drops every saved draft.
    pub fn clear(&self) -> Result<(), DeskError> {
        self.store.remove(KEY_WORKFLOW_DRAFTS)
    }

    fn persist(&self, drafts: &[WorkflowDraft]) -> Result<(), DeskError> {
        let raw = serde_json::to_string(drafts).map_err(|e| DeskError::Storage {
            source: Box::new(e),
        })?;
        self.store.set(KEY_WORKFLOW_DRAFTS, &raw)
    }
}
