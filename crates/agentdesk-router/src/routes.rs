// SPDX-FileCopyrightText: 2026 Agentdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Route table: a tree of records with per-route metadata.
//!
//! The router consumes only `meta` and `redirect`; view components are the
//! UI layer's concern and are not modeled here.

/// Metadata consumed by the navigation guard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteMeta {
    /// Document title to apply when the route is entered.
    pub title: Option<String>,
    /// Whether the route requires a logged-in session.
    pub requires_auth: bool,
}

/// One node of the route table. Child paths are relative to the parent.
#[derive(Debug, Clone, Default)]
pub struct RouteRecord {
    pub path: String,
    pub meta: RouteMeta,
    /// When set, entering this route immediately forwards to the target.
    pub redirect: Option<String>,
    pub children: Vec<RouteRecord>,
}

impl RouteRecord {
    /// A plain route with no metadata.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.meta.title = Some(title.into());
        self
    }

    pub fn requires_auth(mut self) -> Self {
        self.meta.requires_auth = true;
        self
    }

    pub fn redirect_to(mut self, target: impl Into<String>) -> Self {
        self.redirect = Some(target.into());
        self
    }

    pub fn children(mut self, children: Vec<RouteRecord>) -> Self {
        self.children = children;
        self
    }
}

/// A route record flattened to its absolute path, with parent metadata
/// already merged in.
#[derive(Debug, Clone)]
pub struct ResolvedRoute {
    pub path: String,
    pub meta: RouteMeta,
    pub redirect: Option<String>,
}

pub use agentdesk_core::types::{HOME_PATH, LOGIN_PATH, REGISTER_PATH};

/// The console route table.
///
/// `/` forwards to the login screen; all console screens require auth
/// (inherited from the `/console` parent); unknown paths forward to the
/// default console screen.
pub fn console_routes() -> Vec<RouteRecord> {
    vec![
        RouteRecord::new("/").redirect_to(LOGIN_PATH),
        RouteRecord::new(LOGIN_PATH).title("Sign In"),
        RouteRecord::new(REGISTER_PATH).title("Sign Up"),
        RouteRecord::new("/console").requires_auth().children(vec![
            RouteRecord::new("").redirect_to(HOME_PATH),
            RouteRecord::new("agents").title("Agent Editor").requires_auth(),
            RouteRecord::new("workflows")
                .title("Workflow Designer")
                .requires_auth(),
            RouteRecord::new("knowledge")
                .title("Knowledge Bases")
                .requires_auth(),
            RouteRecord::new("plugins")
                .title("Plugin Settings")
                .requires_auth(),
        ]),
    ]
}

/// Finds the record matching `path`, walking the tree with parent
/// `requires_auth` inherited by children. Returns `None` for unknown paths
/// (the router applies the catch-all).
pub fn resolve<'a>(routes: &'a [RouteRecord], path: &str) -> Option<ResolvedRoute> {
    resolve_level(routes, "", &RouteMeta::default(), path)
}

fn resolve_level(
    routes: &[RouteRecord],
    base: &str,
    inherited: &RouteMeta,
    target: &str,
) -> Option<ResolvedRoute> {
    for record in routes {
        let full = join_paths(base, &record.path);
        let meta = RouteMeta {
            title: record.meta.title.clone().or_else(|| inherited.title.clone()),
            requires_auth: record.meta.requires_auth || inherited.requires_auth,
        };
        if full == target {
            return Some(ResolvedRoute {
                path: full,
                meta,
                redirect: record.redirect.clone(),
            });
        }
        if !record.children.is_empty()
            && let Some(found) = resolve_level(&record.children, &full, &meta, target)
        {
            return Some(found);
        }
    }
    None
}

fn join_paths(base: &str, child: &str) -> String {
    if child.starts_with('/') {
        return child.to_string();
    }
    if child.is_empty() {
        return base.to_string();
    }
    if base.is_empty() || base == "/" {
        format!("/{child}")
    } else {
        format!("{base}/{child}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_inherit_parent_requires_auth() {
        let routes = vec![RouteRecord::new("/console")
            .requires_auth()
            .children(vec![RouteRecord::new("drafts")])];
        let resolved = resolve(&routes, "/console/drafts").unwrap();
        assert!(resolved.meta.requires_auth);
    }

    #[test]
    fn console_table_resolves_every_screen() {
        let routes = console_routes();
        for path in [
            "/console/agents",
            "/console/workflows",
            "/console/knowledge",
            "/console/plugins",
        ] {
            let resolved = resolve(&routes, path).unwrap_or_else(|| panic!("{path} must resolve"));
            assert!(resolved.meta.requires_auth, "{path} must require auth");
            assert!(resolved.meta.title.is_some(), "{path} must carry a title");
        }
    }

    #[test]
    fn public_routes_do_not_require_auth() {
        let routes = console_routes();
        for path in [LOGIN_PATH, REGISTER_PATH] {
            let resolved = resolve(&routes, path).unwrap();
            assert!(!resolved.meta.requires_auth);
        }
    }

    #[test]
    fn root_and_console_bare_paths_redirect() {
        let routes = console_routes();
        assert_eq!(
            resolve(&routes, "/").unwrap().redirect.as_deref(),
            Some(LOGIN_PATH)
        );
        assert_eq!(
            resolve(&routes, "/console").unwrap().redirect.as_deref(),
            Some(HOME_PATH)
        );
    }

    #[test]
    fn unknown_path_does_not_resolve() {
        let routes = console_routes();
        assert!(resolve(&routes, "/console/unknown").is_none());
        assert!(resolve(&routes, "/nowhere").is_none());
    }
}
