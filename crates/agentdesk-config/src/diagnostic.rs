// SPDX-FileCopyrightText: 2026 Agentdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration error diagnostics rendered through miette.

use miette::Diagnostic;
use thiserror::Error;

/// A configuration error suitable for diagnostic rendering.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// The configuration source could not be parsed or deserialized.
    #[error("configuration parse error: {message}")]
    #[diagnostic(
        code(agentdesk::config::parse),
        help("check agentdesk.toml against the documented schema")
    )]
    Parse {
        /// Figment's description of the failure.
        message: String,
    },

    /// A value deserialized fine but violates a semantic constraint.
    #[error("invalid configuration value: {message}")]
    #[diagnostic(code(agentdesk::config::validation))]
    Validation {
        /// Description of the violated constraint.
        message: String,
    },
}

/// Converts a figment extraction error into diagnostic errors, one per
/// underlying failure.
pub fn figment_to_config_errors(err: figment::Error) -> Vec<ConfigError> {
    err.into_iter()
        .map(|e| ConfigError::Parse {
            message: e.to_string(),
        })
        .collect()
}

/// Renders collected errors to stderr via miette's report formatting.
pub fn render_errors(errors: &[ConfigError]) {
    for error in errors {
        let report = miette::Report::msg(error.to_string());
        eprintln!("{report:?}");
    }
}
