// SPDX-FileCopyrightText: 2026 Agentdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Agent resource client.
//!
//! Covers the full agent lifecycle: create, update, fetch, paged listing,
//! publish, and the sandbox test call used by the editor's preview pane.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use agentdesk_core::{DeskError, Page};
use agentdesk_http::Http;

/// Model parameters attached to an agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelConfig {
    pub provider: String,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCreateRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub system_prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_prompt_template: Option<String>,
    pub model_config: ModelConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knowledge_base_ids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin_ids: Option<Vec<i64>>,
}

/// Partial update; absent fields are left untouched by the backend.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_prompt_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_config: Option<ModelConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knowledge_base_ids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin_ids: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_no: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub system_prompt: Option<String>,
    #[serde(default)]
    pub user_prompt_template: Option<String>,
    #[serde(default)]
    pub model_config: Option<ModelConfig>,
    #[serde(default)]
    pub workflow_id: Option<i64>,
    #[serde(default)]
    pub knowledge_base_ids: Option<Vec<i64>>,
    #[serde(default)]
    pub plugin_ids: Option<Vec<i64>>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AgentTestRequest {
    pub question: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentTestResponse {
    pub reply: String,
    pub elapsed_ms: i64,
    pub prompt_tokens: i64,
    pub completion_tokens: i64,
}

/// Client for `/api/agents`.
pub struct AgentClient {
    http: Arc<Http>,
}

impl AgentClient {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// Creates an agent and returns its id.
    pub async fn create(&self, request: &AgentCreateRequest) -> Result<i64, DeskError> {
        debug!(name = %request.name, "creating agent");
        self.http.post("/api/agents", request).await
    }

    pub async fn update(&self, id: i64, request: &AgentUpdateRequest) -> Result<(), DeskError> {
        self.http.put(&format!("/api/agents/{id}"), request).await
    }

    pub async fn get(&self, id: i64) -> Result<Agent, DeskError> {
        self.http.get(&format!("/api/agents/{id}")).await
    }

    pub async fn list(&self, query: &AgentListQuery) -> Result<Page<Agent>, DeskError> {
        self.http.get_query("/api/agents", query).await
    }

    pub async fn publish(&self, id: i64) -> Result<(), DeskError> {
        self.http
            .post_empty(&format!("/api/agents/{id}/publish"))
            .await
    }

    /// Runs a one-off question against the agent without publishing it.
    pub async fn test(
        &self,
        id: i64,
        request: &AgentTestRequest,
    ) -> Result<AgentTestResponse, DeskError> {
        self.http
            .post(&format!("/api/agents/{id}/test"), request)
            .await
    }
}
