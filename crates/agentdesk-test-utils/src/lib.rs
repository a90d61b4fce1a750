// SPDX-FileCopyrightText: 2026 Agentdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Agentdesk integration tests.
//!
//! Provides mock implementations of the effect seams for fast,
//! deterministic, CI-runnable tests without a real UI.
//!
//! # Components
//!
//! - [`RecordingNotifier`] - Notification sink that captures notices
//! - [`RecordingNavigator`] - Navigator that captures pushed locations

pub mod mock_navigator;
pub mod mock_notifier;

pub use mock_navigator::RecordingNavigator;
pub use mock_notifier::RecordingNotifier;
