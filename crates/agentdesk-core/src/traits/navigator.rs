// SPDX-FileCopyrightText: 2026 Agentdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Navigation contract between the pipeline and the router.

use crate::types::Location;

/// Issues and observes route transitions.
///
/// The request pipeline uses this to force navigation after an HTTP 401
/// and to read the current location for the `redirect` query parameter.
/// The router crate provides the real implementation; tests inject a
/// recording fake.
pub trait Navigator: Send + Sync {
    /// Requests a transition to `to`. The implementation runs its guard
    /// and may land somewhere else (or nowhere, if the transition is
    /// aborted).
    fn push(&self, to: Location);

    /// The location currently displayed.
    fn current(&self) -> Location;
}
