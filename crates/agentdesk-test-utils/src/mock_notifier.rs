// SPDX-FileCopyrightText: 2026 Agentdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock notification sink for deterministic testing.
//!
//! `RecordingNotifier` implements `Notifier` and captures every notice for
//! assertion in tests.

use std::sync::Mutex;

use agentdesk_core::{NoticeLevel, Notifier};

/// A notification sink that records instead of displaying.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<(NoticeLevel, String)>>,
}

impl RecordingNotifier {
    /// Create a new recorder with no captured notices.
    pub fn new() -> Self {
        Self::default()
    }

    /// All notices captured so far, in emission order.
    pub fn notices(&self) -> Vec<(NoticeLevel, String)> {
        self.notices.lock().unwrap().clone()
    }

    /// Clear captured notices.
    pub fn clear(&self) {
        self.notices.lock().unwrap().clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }
}
