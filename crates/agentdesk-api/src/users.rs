// SPDX-FileCopyrightText: 2026 Agentdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Account endpoints: login, registration, and the current user's profile.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use agentdesk_core::{DeskError, UserProfile};
use agentdesk_http::Http;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub nickname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Client for `/api/user`.
pub struct UserClient {
    http: Arc<Http>,
}

impl UserClient {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// Authenticates and returns the profile, token included.
    pub async fn login(&self, request: &LoginRequest) -> Result<UserProfile, DeskError> {
        let profile: UserProfile = self.http.post("/api/user/login", request).await?;
        info!(username = %profile.username, "login succeeded");
        Ok(profile)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<(), DeskError> {
        self.http.post("/api/user/register", request).await
    }

    /// Fetches the authenticated user's profile.
    pub async fn info(&self) -> Result<UserProfile, DeskError> {
        self.http.get("/api/user/info").await
    }
}
