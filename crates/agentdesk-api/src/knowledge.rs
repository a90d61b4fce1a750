// SPDX-FileCopyrightText: 2026 Agentdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Knowledge base resource client.
//!
//! Document upload goes out as a multipart form with a single `file` part;
//! everything else is plain JSON.

use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use tracing::debug;

use agentdesk_core::DeskError;
use agentdesk_http::Http;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeBaseCreateRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_overlap: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeBase {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub vector_db_type: Option<String>,
    #[serde(default)]
    pub chunk_size: Option<i64>,
    #[serde(default)]
    pub chunk_overlap: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: i64,
    pub filename: String,
    pub status: String,
    #[serde(default)]
    pub chunk_count: Option<i64>,
    pub uploaded_at: String,
}

/// Client for `/api/knowledge-bases`.
pub struct KnowledgeClient {
    http: Arc<Http>,
}

impl KnowledgeClient {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// Creates a knowledge base and returns its id.
    pub async fn create(&self, request: &KnowledgeBaseCreateRequest) -> Result<i64, DeskError> {
        self.http.post("/api/knowledge-bases", request).await
    }

    pub async fn list(&self) -> Result<Vec<KnowledgeBase>, DeskError> {
        self.http.get("/api/knowledge-bases").await
    }

    pub async fn get(&self, id: i64) -> Result<KnowledgeBase, DeskError> {
        self.http.get(&format!("/api/knowledge-bases/{id}")).await
    }

    /// Uploads a document body under its filename and returns the ingested
    /// document record.
    pub async fn upload_document(
        &self,
        id: i64,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<Document, DeskError> {
        debug!(knowledge_base = id, filename, size = bytes.len(), "uploading document");
        let part = Part::bytes(bytes).file_name(filename.to_string());
        let form = Form::new().part("file", part);
        self.http
            .post_form(&format!("/api/knowledge-bases/{id}/documents"), form)
            .await
    }

    /// Lists documents, optionally filtered by ingestion status.
    pub async fn documents(
        &self,
        id: i64,
        status: Option<&str>,
    ) -> Result<Vec<Document>, DeskError> {
        let path = format!("/api/knowledge-bases/{id}/documents");
        match status {
            Some(status) => self.http.get_query(&path, &[("status", status)]).await,
            None => self.http.get(&path).await,
        }
    }
}
