// SPDX-FileCopyrightText: 2026 Agentdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Agentdesk console stack.
//!
//! This crate provides the foundational trait definitions, the error
//! taxonomy, the backend response envelope, and the pure failure
//! classification shared by the request pipeline, session state, and
//! navigation layers. Nothing in here performs I/O.

pub mod classify;
pub mod envelope;
pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use classify::{classify, Reaction};
pub use envelope::Envelope;
pub use error::DeskError;
pub use types::{Location, NoticeLevel, Page, UserProfile};
pub use types::{HOME_PATH, LOGIN_PATH, REGISTER_PATH};

// Re-export the trait seams at crate root.
pub use traits::{Navigator, Notifier, PersistentStore, TracingNotifier};
