// SPDX-FileCopyrightText: 2026 Agentdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The navigation guard: a pure decision over (route metadata, token).
//!
//! Evaluated fresh before every transition; it has no knowledge of *why*
//! the token is empty (first visit vs. just-logged-out), which is
//! intentional.

use agentdesk_core::Location;

use crate::routes::{RouteMeta, HOME_PATH, LOGIN_PATH, REGISTER_PATH};

/// Whether a transition proceeds or is replaced by another one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardVerdict {
    /// The transition proceeds unchanged.
    Allow,
    /// The original transition is aborted in favor of this location.
    Redirect(Location),
}

/// Result of one guard evaluation: the title to apply plus the verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardOutcome {
    pub title: String,
    pub verdict: GuardVerdict,
}

/// Evaluates the guard for a transition to `target` given the current token.
///
/// 1. The document title is the target's declared title, or `default_title`.
/// 2. An auth-required target with no token redirects to the login route,
///    carrying the intended path as the `redirect` query parameter.
/// 3. The login and registration routes redirect to the default console
///    screen when a token is present.
/// 4. Anything else is allowed unchanged.
pub fn evaluate(
    target: &Location,
    meta: &RouteMeta,
    token: &str,
    default_title: &str,
) -> GuardOutcome {
    let title = meta
        .title
        .clone()
        .unwrap_or_else(|| default_title.to_string());

    if meta.requires_auth && token.is_empty() {
        return GuardOutcome {
            title,
            verdict: GuardVerdict::Redirect(Location::with_query(
                LOGIN_PATH,
                "redirect",
                target.full_path(),
            )),
        };
    }

    if (target.path == LOGIN_PATH || target.path == REGISTER_PATH) && !token.is_empty() {
        return GuardOutcome {
            title,
            verdict: GuardVerdict::Redirect(Location::path(HOME_PATH)),
        };
    }

    GuardOutcome {
        title,
        verdict: GuardVerdict::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth_meta() -> RouteMeta {
        RouteMeta {
            title: Some("Knowledge Bases".into()),
            requires_auth: true,
        }
    }

    #[test]
    fn auth_route_without_token_redirects_to_login_with_redirect_query() {
        let target = Location::path("/console/knowledge");
        let outcome = evaluate(&target, &auth_meta(), "", "Agent Studio");

        match outcome.verdict {
            GuardVerdict::Redirect(loc) => {
                assert_eq!(loc.path, LOGIN_PATH);
                assert_eq!(loc.query_value("redirect"), Some("/console/knowledge"));
            }
            GuardVerdict::Allow => panic!("expected redirect"),
        }
    }

    #[test]
    fn auth_route_with_token_is_allowed() {
        let target = Location::path("/console/knowledge");
        let outcome = evaluate(&target, &auth_meta(), "tok-1", "Agent Studio");
        assert_eq!(outcome.verdict, GuardVerdict::Allow);
        assert_eq!(outcome.title, "Knowledge Bases");
    }

    #[test]
    fn login_with_token_redirects_home() {
        let target = Location::path(LOGIN_PATH);
        let meta = RouteMeta {
            title: Some("Sign In".into()),
            requires_auth: false,
        };
        let outcome = evaluate(&target, &meta, "tok-1", "Agent Studio");
        assert_eq!(
            outcome.verdict,
            GuardVerdict::Redirect(Location::path(HOME_PATH))
        );
    }

    #[test]
    fn register_without_token_is_allowed() {
        let target = Location::path(REGISTER_PATH);
        let meta = RouteMeta::default();
        let outcome = evaluate(&target, &meta, "", "Agent Studio");
        assert_eq!(outcome.verdict, GuardVerdict::Allow);
    }

    #[test]
    fn public_route_allowed_regardless_of_token_state() {
        let meta = RouteMeta::default();
        let target = Location::path("/about");
        for token in ["", "tok-1"] {
            let outcome = evaluate(&target, &meta, token, "Agent Studio");
            assert_eq!(outcome.verdict, GuardVerdict::Allow);
        }
    }

    #[test]
    fn missing_title_falls_back_to_default() {
        let target = Location::path("/console/agents");
        let meta = RouteMeta {
            title: None,
            requires_auth: true,
        };
        let outcome = evaluate(&target, &meta, "tok-1", "Agent Studio");
        assert_eq!(outcome.title, "Agent Studio");
    }
}
