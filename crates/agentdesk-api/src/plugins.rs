// SPDX-FileCopyrightText: 2026 Agentdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin resource client.
//!
//! Besides the plain CRUD surface this carries two conveniences the
//! settings screen leans on: `save` dispatches to create or update based on
//! whether the plugin already has an id, and `toggle` flips the enabled
//! state by reading the current one first.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use agentdesk_core::DeskError;
use agentdesk_http::Http;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plugin {
    /// Zero for a plugin that has not been created yet.
    #[serde(default)]
    pub id: i64,
    pub name: String,
    /// "builtin" or "custom"; assigned by the backend.
    #[serde(default)]
    pub r#type: String,
    /// "enabled" or "disabled".
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub openapi_spec: String,
    pub config: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Plugin {
    pub fn is_enabled(&self) -> bool {
        self.status == "enabled"
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginExecuteParams {
    pub function_name: String,
    pub arguments: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginExecuteResult {
    pub plugin_id: i64,
    pub function_name: String,
    pub result: String,
}

/// Client for `/api/plugin`.
pub struct PluginClient {
    http: Arc<Http>,
}

impl PluginClient {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<Plugin>, DeskError> {
        self.http.get("/api/plugin").await
    }

    pub async fn get(&self, id: i64) -> Result<Plugin, DeskError> {
        self.http.get(&format!("/api/plugin/{id}")).await
    }

    pub async fn create(&self, plugin: &Plugin) -> Result<Plugin, DeskError> {
        self.http.post("/api/plugin", plugin).await
    }

    pub async fn update(&self, id: i64, plugin: &Plugin) -> Result<Plugin, DeskError> {
        self.http.put(&format!("/api/plugin/{id}"), plugin).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), DeskError> {
        self.http.delete(&format!("/api/plugin/{id}")).await
    }

    pub async fn enable(&self, id: i64) -> Result<(), DeskError> {
        self.http.post_empty(&format!("/api/plugin/{id}/enable")).await
    }

    pub async fn disable(&self, id: i64) -> Result<(), DeskError> {
        self.http
            .post_empty(&format!("/api/plugin/{id}/disable"))
            .await
    }

    /// Invokes one function exposed by the plugin.
    pub async fn execute(
        &self,
        id: i64,
        params: &PluginExecuteParams,
    ) -> Result<PluginExecuteResult, DeskError> {
        self.http
            .post(&format!("/api/plugin/{id}/execute"), params)
            .await
    }

    /// Creates the plugin when it has no id yet, updates it otherwise.
    pub async fn save(&self, plugin: &Plugin) -> Result<Plugin, DeskError> {
        if plugin.id == 0 {
            self.create(plugin).await
        } else {
            self.update(plugin.id, plugin).await
        }
    }

    /// Flips the plugin's enabled state.
    pub async fn toggle(&self, id: i64) -> Result<(), DeskError> {
        let plugin = self.get(id).await?;
        debug!(id, status = %plugin.status, "toggling plugin");
        if plugin.is_enabled() {
            self.disable(id).await
        } else {
            self.enable(id).await
        }
    }
}
