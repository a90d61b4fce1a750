// SPDX-FileCopyrightText: 2026 Agentdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Routing for the console: route table, navigation guard, and the
//! [`Router`] that executes guard verdicts.
//!
//! The guard itself is a pure function (see [`guard::evaluate`]); the
//! router is the thin shell that resolves paths against the table, runs the
//! guard with the live session token, and applies the outcome.

pub mod guard;
pub mod routes;

pub use guard::{evaluate, GuardOutcome, GuardVerdict};
pub use routes::{console_routes, ResolvedRoute, RouteMeta, RouteRecord};
pub use routes::{HOME_PATH, LOGIN_PATH, REGISTER_PATH};

use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use agentdesk_core::{Location, Navigator};
use agentdesk_session::SessionStore;

/// Redirect chains longer than this abort the transition.
const MAX_REDIRECTS: usize = 8;

/// Gates every route transition on session presence.
///
/// Holds the route table, the current location, and the document title.
/// Transitions requested while logged out land on the login route;
/// transitions to the login/registration routes while logged in land on the
/// default console screen. Unknown paths fall through to the catch-all
/// (the default console screen), mirroring the route table's wildcard.
pub struct Router {
    routes: Vec<RouteRecord>,
    session: Arc<SessionStore>,
    default_title: String,
    current: RwLock<Location>,
    title: RwLock<String>,
}

impl Router {
    /// Builds a router over `routes` with the given default document title.
    pub fn new(
        session: Arc<SessionStore>,
        routes: Vec<RouteRecord>,
        default_title: impl Into<String>,
    ) -> Self {
        let default_title = default_title.into();
        Self {
            routes,
            session,
            current: RwLock::new(Location::path("/")),
            title: RwLock::new(default_title.clone()),
            default_title,
        }
    }

    /// Router over the standard console table.
    pub fn with_console_routes(
        session: Arc<SessionStore>,
        default_title: impl Into<String>,
    ) -> Self {
        Self::new(session, routes::console_routes(), default_title)
    }

    /// The document title after the most recent transition.
    pub fn title(&self) -> String {
        self.title.read().map(|t| t.clone()).unwrap_or_default()
    }

    /// Requests a transition, following table redirects and guard verdicts
    /// until a location is allowed (or the redirect bound is hit).
    pub fn navigate(&self, to: Location) {
        let mut target = to;
        for _ in 0..MAX_REDIRECTS {
            // Table-level forwarding: '/' -> login, bare console -> agents,
            // unknown paths -> catch-all.
            let resolved = match routes::resolve(&self.routes, &target.path) {
                Some(resolved) => resolved,
                None => {
                    debug!(path = %target.path, "unknown path, applying catch-all");
                    target = Location::path(HOME_PATH);
                    continue;
                }
            };
            if let Some(forward) = resolved.redirect {
                target = Location {
                    path: forward,
                    query: target.query,
                };
                continue;
            }

            // Guard decision over (route metadata, session token).
            let token = self.session.token();
            let outcome = guard::evaluate(&target, &resolved.meta, &token, &self.default_title);
            if let Ok(mut title) = self.title.write() {
                *title = outcome.title;
            }
            match outcome.verdict {
                GuardVerdict::Allow => {
                    debug!(path = %target.full_path(), "transition allowed");
                    if let Ok(mut current) = self.current.write() {
                        *current = target;
                    }
                    return;
                }
                GuardVerdict::Redirect(next) => {
                    debug!(from = %target.full_path(), to = %next.full_path(), "guard redirect");
                    target = next;
                }
            }
        }
        warn!(path = %target.full_path(), "redirect chain exceeded bound, transition aborted");
    }
}

impl Navigator for Router {
    fn push(&self, to: Location) {
        self.navigate(to);
    }

    fn current(&self) -> Location {
        self.current
            .read()
            .map(|c| c.clone())
            .unwrap_or_else(|_| Location::path("/"))
    }
}
