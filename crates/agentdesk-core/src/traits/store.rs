// SPDX-FileCopyrightText: 2026 Agentdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persistent key-value store contract.

use crate::error::DeskError;

/// Well-known key for the session token.
pub const KEY_TOKEN: &str = "token";
/// Well-known key for the serialized user profile.
pub const KEY_USER_INFO: &str = "user_info";
/// Well-known key for the serialized workflow draft list.
pub const KEY_WORKFLOW_DRAFTS: &str = "workflow_drafts";

/// Durable string key-value storage surviving process restarts.
///
/// Reads never fail: a backend that cannot produce a value reports `None`
/// (and logs the cause), so session restoration at startup cannot throw.
/// Writes are last-writer-wins with no locking across calls.
pub trait PersistentStore: Send + Sync {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), DeskError>;

    /// Removes `key` if present. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), DeskError>;

    /// Removes every key in the store.
    ///
    /// Logout relies on this being a full purge: any other cached data
    /// sharing the store is wiped too.
    fn clear(&self) -> Result<(), DeskError>;
}
