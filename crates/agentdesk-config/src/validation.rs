// SPDX-FileCopyrightText: 2026 Agentdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as a well-formed base URL and a non-zero timeout.

use crate::diagnostic::ConfigError;
use crate::model::DeskConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)`
/// with all collected validation errors (does not fail fast).
pub fn validate_config(config: &DeskConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let base_url = config.api.base_url.trim();
    if base_url.is_empty() {
        errors.push(ConfigError::Validation {
            message: "api.base_url must not be empty".to_string(),
        });
    } else if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        errors.push(ConfigError::Validation {
            message: format!("api.base_url `{base_url}` must start with http:// or https://"),
        });
    }

    if config.api.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "api.timeout_secs must be greater than zero".to_string(),
        });
    }

    if config.storage.state_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.state_path must not be empty".to_string(),
        });
    }

    const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
    if !LEVELS.contains(&config.console.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "console.log_level `{}` is not one of trace/debug/info/warn/error",
                config.console.log_level
            ),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        validate_config(&DeskConfig::default()).unwrap();
    }

    #[test]
    fn bad_scheme_and_zero_timeout_are_both_reported() {
        let mut config = DeskConfig::default();
        config.api.base_url = "ftp://example.com".into();
        config.api.timeout_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2, "validation must not fail fast");
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let mut config = DeskConfig::default();
        config.console.log_level = "loud".into();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn config_parsed_from_toml_validates() {
        let toml_str = r#"
[api]
base_url = "https://desk.example.com"
timeout_secs = 10

[console]
log_level = "debug"
"#;
        let config: DeskConfig = toml::from_str(toml_str).unwrap();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.api.timeout_secs, 10);
    }

    #[test]
    fn toml_with_unknown_field_fails_to_parse() {
        let toml_str = r#"
[api]
base_uri = "https://typo.example.com"
"#;
        assert!(toml::from_str::<DeskConfig>(toml_str).is_err());
    }

    #[test]
    fn invalid_parsed_values_are_caught_by_validation() {
        let toml_str = r#"
[api]
base_url = "ftp://example.com"
timeout_secs = 0
"#;
        let config: DeskConfig = toml::from_str(toml_str).unwrap();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("base_url"))));
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("timeout_secs"))));
    }
}
