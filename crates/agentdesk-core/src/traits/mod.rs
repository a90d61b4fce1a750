// SPDX-FileCopyrightText: 2026 Agentdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams between the pipeline and its collaborators.
//!
//! The pipeline and session layers depend on these traits rather than on
//! concrete storage, notification, or routing implementations, so every
//! consumer can be tested with injected fakes.

pub mod navigator;
pub mod notifier;
pub mod store;

pub use navigator::Navigator;
pub use notifier::{Notifier, TracingNotifier};
pub use store::PersistentStore;
