// SPDX-FileCopyrightText: 2026 Agentdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! User-visible notification sink.

use crate::types::NoticeLevel;

/// Receives the one notification every failed call produces.
///
/// The UI layer implements this with its message component; headless
/// consumers can use [`TracingNotifier`].
pub trait Notifier: Send + Sync {
    /// Emits a user-visible notification.
    fn notify(&self, level: NoticeLevel, message: &str);
}

/// Notifier that forwards notifications to the `tracing` log stream.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Info => tracing::info!(target: "agentdesk::notice", "{message}"),
            NoticeLevel::Warning => tracing::warn!(target: "agentdesk::notice", "{message}"),
            NoticeLevel::Error => tracing::error!(target: "agentdesk::notice", "{message}"),
        }
    }
}
