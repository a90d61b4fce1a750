// SPDX-FileCopyrightText: 2026 Agentdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./agentdesk.toml` > `~/.config/agentdesk/agentdesk.toml`
//! > `/etc/agentdesk/agentdesk.toml` with environment variable overrides via
//! `AGENTDESK_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::DeskConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/agentdesk/agentdesk.toml` (system-wide)
/// 3. `~/.config/agentdesk/agentdesk.toml` (user XDG config)
/// 4. `./agentdesk.toml` (local directory)
/// 5. `AGENTDESK_*` environment variables
pub fn load_config() -> Result<DeskConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(DeskConfig::default()))
        .merge(Toml::file("/etc/agentdesk/agentdesk.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("agentdesk/agentdesk.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("agentdesk.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<DeskConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(DeskConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<DeskConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(DeskConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so keys containing
/// underscores stay intact: `AGENTDESK_API_BASE_URL` must map to
/// `api.base_url`, not `api.base.url`.
fn env_provider() -> Env {
    Env::prefixed("AGENTDESK_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("api_", "api.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("console_", "console.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_toml_overrides_defaults() {
        let config = load_config_from_str(
            r#"
            [api]
            base_url = "https://desk.example.com"

            [console]
            title = "Example Desk"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://desk.example.com");
        assert_eq!(config.api.timeout_secs, 30, "unset keys keep defaults");
        assert_eq!(config.console.title, "Example Desk");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = load_config_from_str(
            r#"
            [api]
            base_uri = "https://typo.example.com"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn empty_input_yields_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.api.timeout_secs, 30);
    }
}
