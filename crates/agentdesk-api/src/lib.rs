// SPDX-FileCopyrightText: 2026 Agentdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed backend resource clients for the Agentdesk console.
//!
//! Each module wraps one backend resource behind the shared request
//! pipeline: agents, knowledge bases, plugins, and user accounts. Workflow
//! drafts are the exception, persisted locally through the store rather
//! than a backend call.

pub mod agents;
pub mod knowledge;
pub mod plugins;
pub mod users;
pub mod workflows;

pub use agents::AgentClient;
pub use knowledge::KnowledgeClient;
pub use plugins::PluginClient;
pub use users::UserClient;
pub use workflows::{WorkflowDraft, WorkflowDrafts};
