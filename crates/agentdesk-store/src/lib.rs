// SPDX-FileCopyrightText: 2026 Agentdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persistent key-value store backends.
//!
//! Two implementations of the [`PersistentStore`] contract from
//! `agentdesk-core`:
//!
//! - [`MemoryStore`] - process-local, for tests and ephemeral sessions
//! - [`FileStore`] - a JSON document on disk, surviving restarts
//!
//! [`PersistentStore`]: agentdesk_core::PersistentStore

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;
