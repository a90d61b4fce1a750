// SPDX-FileCopyrightText: 2026 Agentdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock navigator for deterministic testing.
//!
//! `RecordingNavigator` implements `Navigator` with a settable current
//! location and captured pushes for assertion in tests.

use std::sync::Mutex;

use agentdesk_core::{Location, Navigator};

/// A navigator that records pushes instead of changing any real view.
///
/// Each push is captured and also becomes the new current location, so a
/// sequence of navigations can be asserted end to end.
pub struct RecordingNavigator {
    current: Mutex<Location>,
    pushes: Mutex<Vec<Location>>,
}

impl RecordingNavigator {
    /// Create a recorder positioned at the root path.
    pub fn new() -> Self {
        Self::at("/")
    }

    /// Create a recorder positioned at `path`.
    pub fn at(path: impl Into<String>) -> Self {
        Self {
            current: Mutex::new(Location::path(path)),
            pushes: Mutex::new(Vec::new()),
        }
    }

    /// All locations pushed so far, in order.
    pub fn pushes(&self) -> Vec<Location> {
        self.pushes.lock().unwrap().clone()
    }

    /// The most recent push, if any.
    pub fn last_push(&self) -> Option<Location> {
        self.pushes.lock().unwrap().last().cloned()
    }
}

impl Default for RecordingNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for RecordingNavigator {
    fn push(&self, to: Location) {
        *self.current.lock().unwrap() = to.clone();
        self.pushes.lock().unwrap().push(to);
    }

    fn current(&self) -> Location {
        self.current.lock().unwrap().clone()
    }
}
