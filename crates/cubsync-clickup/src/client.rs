//! ClickUp API client.
//!
//! Thin wrapper over `reqwest` covering the five endpoints the sync needs.
//! Every call is a single GET with the workspace token in the
//! `Authorization` header (ClickUp takes the raw token, no `Bearer` prefix).

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::{ClickUpError, Result};
use crate::models::{
    CustomFieldsEnvelope, CustomTaskType, CustomTaskTypesEnvelope, ListsEnvelope, Space,
    SpacesEnvelope, Task, TaskList, TasksEnvelope,
};
use cubsync_core::CustomFieldDefinition;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.clickup.com/api/v2";

/// ClickUp client configuration.
#[derive(Debug, Clone)]
pub struct ClickUpConfig {
    /// API token, sent verbatim in the `Authorization` header.
    pub token: String,
    /// Override for tests and emulators; defaults to [`DEFAULT_BASE_URL`].
    pub base_url: Option<String>,
}

/// ClickUp API client.
pub struct ClickUpClient {
    config: ClickUpConfig,
    http: reqwest::Client,
}

impl ClickUpClient {
    /// Create a new client.
    #[must_use]
    pub fn new(config: ClickUpConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Create a new client with a shared HTTP client.
    #[must_use]
    pub fn with_client(config: ClickUpConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    /// Workspace custom-field definitions.
    pub async fn custom_fields(&self, workspace_id: &str) -> Result<Vec<CustomFieldDefinition>> {
        let envelope: CustomFieldsEnvelope = self
            .get_json(&format!("/workspace/{workspace_id}/custom_fields"))
            .await?;
        Ok(envelope.custom_fields)
    }

    /// Workspace custom task types (metadata only).
    pub async fn custom_task_types(&self, workspace_id: &str) -> Result<Vec<CustomTaskType>> {
        let envelope: CustomTaskTypesEnvelope = self
            .get_json(&format!("/workspace/{workspace_id}/custom_task_types"))
            .await?;
        Ok(envelope.custom_task_types)
    }

    /// Spaces under the workspace.
    pub async fn spaces(&self, workspace_id: &str) -> Result<Vec<Space>> {
        let envelope: SpacesEnvelope = self.get_json(&format!("/team/{workspace_id}/space")).await?;
        Ok(envelope.spaces)
    }

    /// Lists under a space, folder-nested lists included.
    pub async fn lists(&self, space_id: &str) -> Result<Vec<TaskList>> {
        let envelope: ListsEnvelope = self.get_json(&format!("/space/{space_id}/list")).await?;
        Ok(envelope.lists)
    }

    /// Tasks under a list. First page only; pagination is not handled.
    pub async fn tasks(&self, list_id: &str) -> Result<Vec<Task>> {
        let envelope: TasksEnvelope = self.get_json(&format!("/list/{list_id}/task")).await?;
        Ok(envelope.tasks)
    }

    /// GET `path` and decode the JSON body.
    ///
    /// Non-success statuses become [`ClickUpError::Api`] carrying the body
    /// verbatim; bodies that decode but don't match the expected shape become
    /// [`ClickUpError::Decode`].
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let base_url = self.config.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let url = format!("{base_url}{path}");
        debug!(%url, "ClickUp GET");

        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, &self.config.token)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(ClickUpError::Http)?;

        let status = response.status();
        let body = response.text().await.map_err(ClickUpError::Http)?;
        if !status.is_success() {
            return Err(ClickUpError::Api {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(ClickUpError::Decode)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
