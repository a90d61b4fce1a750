// SPDX-FileCopyrightText: 2026 Agentdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session state: the single authoritative holder of login status.
//!
//! A session is a token plus a user profile. The invariant is that the two
//! are always set together (`login`) or cleared together (`logout`): the
//! pair lives in one [`ArcSwap`] cell, so readers always observe either the
//! old record or the new one, never a half-updated mix.
//!
//! State is restored from the persistent store at construction and written
//! back on every mutation. Restoration never fails: a malformed stored
//! profile degrades to "no profile".

use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::{debug, warn};

use agentdesk_core::traits::store::{KEY_TOKEN, KEY_USER_INFO};
use agentdesk_core::{DeskError, PersistentStore, UserProfile};

/// One immutable snapshot of the session: token + profile together.
#[derive(Debug, Default)]
struct SessionRecord {
    token: String,
    profile: Option<UserProfile>,
}

/// Authoritative login state with durable persistence.
///
/// Shared across the pipeline and the router behind an `Arc`; all
/// mutation is atomic from the caller's point of view.
pub struct SessionStore {
    record: ArcSwap<SessionRecord>,
    store: Arc<dyn PersistentStore>,
}

impl SessionStore {
    /// Builds a session from whatever the persistent store holds.
    ///
    /// An unparsable stored profile is logged and treated as absent; this
    /// path must never propagate an error.
    pub fn restore(store: Arc<dyn PersistentStore>) -> Self {
        let token = store.get(KEY_TOKEN).unwrap_or_default();
        let profile = store.get(KEY_USER_INFO).and_then(|raw| {
            match serde_json::from_str::<UserProfile>(&raw) {
                Ok(profile) => Some(profile),
                Err(e) => {
                    warn!(error = %e, "stored user profile malformed, ignoring");
                    None
                }
            }
        });
        if !token.is_empty() && profile.is_some() {
            debug!("session restored from persistent store");
        }
        Self {
            record: ArcSwap::from_pointee(SessionRecord { token, profile }),
            store,
        }
    }

    /// Current auth token; empty string means "no session".
    pub fn token(&self) -> String {
        self.record.load().token.clone()
    }

    /// Current user profile, if a login has completed and not been cleared.
    pub fn profile(&self) -> Option<UserProfile> {
        self.record.load().profile.clone()
    }

    /// True iff the token is non-empty and a profile is present.
    pub fn is_logged_in(&self) -> bool {
        let record = self.record.load();
        !record.token.is_empty() && record.profile.is_some()
    }

    pub fn user_id(&self) -> Option<i64> {
        self.record.load().profile.as_ref().map(|p| p.id)
    }

    pub fn username(&self) -> Option<String> {
        self.record.load().profile.as_ref().map(|p| p.username.clone())
    }

    pub fn nickname(&self) -> Option<String> {
        self.record.load().profile.as_ref().map(|p| p.nickname.clone())
    }

    /// Replaces the token, persisting a non-empty value and removing the
    /// stored key for an empty one.
    ///
    /// This alone does not satisfy the login invariant; it is intended to
    /// be called from [`login`](Self::login) and [`logout`](Self::logout).
    pub fn set_token(&self, token: &str) -> Result<(), DeskError> {
        let current = self.record.load();
        self.record.store(Arc::new(SessionRecord {
            token: token.to_string(),
            profile: current.profile.clone(),
        }));
        if token.is_empty() {
            self.store.remove(KEY_TOKEN)
        } else {
            self.store.set(KEY_TOKEN, token)
        }
    }

    /// Establishes a session from a login response.
    ///
    /// The token is taken from `profile.token`, defaulting to empty when
    /// absent; token and profile are swapped in together and persisted.
    pub fn login(&self, profile: UserProfile) -> Result<(), DeskError> {
        let token = profile.token.clone().unwrap_or_default();
        let raw = serde_json::to_string(&profile).map_err(|e| DeskError::Storage {
            source: Box::new(e),
        })?;
        self.record.store(Arc::new(SessionRecord {
            token: token.clone(),
            profile: Some(profile),
        }));
        if token.is_empty() {
            self.store.remove(KEY_TOKEN)?;
        } else {
            self.store.set(KEY_TOKEN, &token)?;
        }
        self.store.set(KEY_USER_INFO, &raw)?;
        debug!("session established");
        Ok(())
    }

    /// Clears the session and purges the entire persistent store.
    ///
    /// The purge is deliberately broad: every key in the store is removed,
    /// including data the session does not own (workflow drafts share this
    /// fate). Idempotent.
    pub fn logout(&self) -> Result<(), DeskError> {
        self.record.store(Arc::new(SessionRecord::default()));
        self.store.clear()?;
        debug!("session cleared");
        Ok(())
    }
}
