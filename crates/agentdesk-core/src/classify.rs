// SPDX-FileCopyrightText: 2026 Agentdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pure failure classification for the request pipeline.
//!
//! [`classify`] maps an error to the side effects the pipeline must perform
//! before rejecting the call: which notification to show, whether the
//! session is wiped, and whether the user is sent to the login route. The
//! function performs no I/O, so the whole dispatch table is unit-testable
//! without a network layer or route state.

use crate::envelope::GENERIC_FAILURE;
use crate::error::DeskError;
use crate::types::NoticeLevel;

/// Notification shown for an HTTP 401.
pub const NOTICE_UNAUTHORIZED: &str = "please sign in first";
/// Notification shown for an HTTP 403.
pub const NOTICE_FORBIDDEN: &str = "permission denied";
/// Notification shown for an HTTP 404.
pub const NOTICE_NOT_FOUND: &str = "requested resource does not exist";
/// Notification shown for an HTTP 500.
pub const NOTICE_SERVER_ERROR: &str = "server error";
/// Notification shown when no response was obtainable.
pub const NOTICE_NETWORK: &str = "network error, please check your connection";

/// The side effects a failed call requires, decided before any are run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    /// User-visible notification text. Every failure produces exactly one.
    pub notice: String,
    /// Notification severity.
    pub level: NoticeLevel,
    /// Clear the session and purge the persistent store (401 only).
    pub wipe_session: bool,
    /// Navigate to the login route after the wipe (401 only).
    pub redirect_to_login: bool,
}

impl Reaction {
    fn notify(notice: impl Into<String>) -> Self {
        Self {
            notice: notice.into(),
            level: NoticeLevel::Error,
            wipe_session: false,
            redirect_to_login: false,
        }
    }
}

/// Decides the reaction for a classified pipeline error.
///
/// HTTP 401 is the only path that clears session state as a side effect of
/// a failed call; the wipe is ordered before the redirect so the navigation
/// guard evaluated during that redirect observes a logged-out state.
pub fn classify(error: &DeskError) -> Reaction {
    match error {
        DeskError::Business { message, .. } => Reaction::notify(message.clone()),
        DeskError::Status { status, message } => match status {
            401 => Reaction {
                notice: NOTICE_UNAUTHORIZED.to_string(),
                level: NoticeLevel::Warning,
                wipe_session: true,
                redirect_to_login: true,
            },
            403 => Reaction::notify(NOTICE_FORBIDDEN),
            404 => Reaction::notify(NOTICE_NOT_FOUND),
            500 => Reaction::notify(NOTICE_SERVER_ERROR),
            _ => Reaction::notify(
                message
                    .clone()
                    .unwrap_or_else(|| GENERIC_FAILURE.to_string()),
            ),
        },
        DeskError::Network { .. } => Reaction::notify(NOTICE_NETWORK),
        DeskError::RequestBuild { source } => Reaction::notify(source.to_string()),
        // Decode and the non-pipeline variants carry nothing user-facing.
        _ => Reaction::notify(GENERIC_FAILURE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(status: u16, message: Option<&str>) -> DeskError {
        DeskError::Status {
            status,
            message: message.map(String::from),
        }
    }

    #[test]
    fn only_401_wipes_session_and_redirects() {
        for code in [400u16, 403, 404, 418, 500, 502] {
            let reaction = classify(&status(code, None));
            assert!(!reaction.wipe_session, "{code} must not wipe the session");
            assert!(!reaction.redirect_to_login, "{code} must not redirect");
        }
        let reaction = classify(&status(401, None));
        assert!(reaction.wipe_session);
        assert!(reaction.redirect_to_login);
        assert_eq!(reaction.notice, NOTICE_UNAUTHORIZED);
    }

    #[test]
    fn known_statuses_use_fixed_notices() {
        assert_eq!(classify(&status(403, None)).notice, NOTICE_FORBIDDEN);
        assert_eq!(classify(&status(404, None)).notice, NOTICE_NOT_FOUND);
        assert_eq!(classify(&status(500, None)).notice, NOTICE_SERVER_ERROR);
    }

    #[test]
    fn other_status_prefers_server_message() {
        let reaction = classify(&status(409, Some("name already taken")));
        assert_eq!(reaction.notice, "name already taken");

        let reaction = classify(&status(409, None));
        assert_eq!(reaction.notice, GENERIC_FAILURE);
    }

    #[test]
    fn business_error_surfaces_its_message() {
        let reaction = classify(&DeskError::Business {
            code: 7,
            message: "m".into(),
        });
        assert_eq!(reaction.notice, "m");
        assert!(!reaction.wipe_session);
    }

    #[test]
    fn network_and_build_notices() {
        let network = classify(&DeskError::Network {
            source: Box::new(std::io::Error::other("unreachable")),
        });
        assert_eq!(network.notice, NOTICE_NETWORK);

        let build = classify(&DeskError::RequestBuild {
            source: Box::new(std::io::Error::other("invalid header value")),
        });
        assert_eq!(build.notice, "invalid header value");
    }
}
