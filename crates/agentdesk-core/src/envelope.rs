// SPDX-FileCopyrightText: 2026 Agentdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The uniform response envelope spoken by the backend.
//!
//! Every endpoint wraps its payload as `{code, message, data, timestamp?}`
//! where `code == 0` or `code == 200` signals success even though the HTTP
//! status is 2xx either way. Callers of the pipeline never see the wrapper:
//! [`Envelope::into_data`] performs the discriminated unwrap.

use serde::Deserialize;

use crate::error::DeskError;

/// Envelope codes treated as success.
const SUCCESS_CODES: [i64; 2] = [0, 200];

/// Fallback notification text when the backend sends an empty message.
pub const GENERIC_FAILURE: &str = "request failed";

/// The wire-level response wrapper.
///
/// `data` is kept as a raw JSON value so the success check happens before
/// any attempt to decode the payload into the caller's type.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: serde_json::Value,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

impl Envelope {
    /// True iff `code` is one of the success codes.
    pub fn is_success(&self) -> bool {
        SUCCESS_CODES.contains(&self.code)
    }

    /// Unwraps the envelope into the caller's payload type.
    ///
    /// A non-success code becomes [`DeskError::Business`] carrying the
    /// server message (or the generic fallback when empty). A success code
    /// whose `data` does not decode into `T` becomes [`DeskError::Decode`].
    pub fn into_data<T: serde::de::DeserializeOwned>(self) -> Result<T, DeskError> {
        if !self.is_success() {
            let message = if self.message.is_empty() {
                GENERIC_FAILURE.to_string()
            } else {
                self.message
            };
            return Err(DeskError::Business {
                code: self.code,
                message,
            });
        }
        serde_json::from_value(self.data).map_err(|e| DeskError::Decode {
            source: Box::new(e),
        })
    }
}
