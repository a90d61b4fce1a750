// SPDX-FileCopyrightText: 2026 Agentdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error taxonomy for the Agentdesk console stack.
//!
//! The first five variants are the request pipeline's classification
//! contract: a call that reaches the backend either succeeds, fails at the
//! business level (envelope code), fails at the HTTP level (non-2xx status),
//! never produces a response (network), or never leaves the client
//! (request build). `Decode` covers a well-transported body that does not
//! match the caller's expected shape.

use thiserror::Error;

/// The primary error type used across the pipeline, session, and store layers.
#[derive(Debug, Error)]
pub enum DeskError {
    /// The transport succeeded but the envelope carried a non-success code.
    #[error("business error {code}: {message}")]
    Business { code: i64, message: String },

    /// A response was received with a non-2xx HTTP status.
    #[error("http status {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status { status: u16, message: Option<String> },

    /// No response was obtainable (connectivity failure, timeout).
    #[error("network error: {source}")]
    Network {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The request could not be dispatched at all (URL or header build).
    #[error("request build error: {source}")]
    RequestBuild {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The response body did not match the caller's expected shape.
    #[error("decode error: {source}")]
    Decode {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Persistent store errors (file I/O, serialization).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration errors (invalid TOML, missing required fields).
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl DeskError {
    /// Returns the HTTP status code for `Status` errors, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            DeskError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True iff this error's reaction clears the session (HTTP 401).
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}
