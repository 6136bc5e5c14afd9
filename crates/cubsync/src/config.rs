//! Sync configuration, read once from the environment at startup.
//!
//! The parsed [`SyncConfig`] is an explicit value passed into the clients at
//! construction; nothing reads process-wide state after startup. Parsing is
//! split into a pure `from_vars` over a plain map so it is testable without
//! touching the process environment.

use std::collections::HashMap;

use cubsync_bigquery::BigQueryConfig;
use cubsync_clickup::ClickUpConfig;
use thiserror::Error;

/// Default destination dataset.
const DEFAULT_DATASET: &str = "clickup_data";

/// Configuration errors surfaced at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("missing required environment variable {0}")]
    MissingVar(String),
}

/// Everything one sync run needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// ClickUp workspace (team) identifier.
    pub workspace_id: String,
    /// ClickUp client configuration.
    pub clickup: ClickUpConfig,
    /// BigQuery client configuration.
    pub bigquery: BigQueryConfig,
}

impl SyncConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_vars(&vars)
    }

    /// Build the configuration from a plain variable map.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        Ok(Self {
            workspace_id: required(vars, "CLICKUP_WORKSPACE_ID")?,
            clickup: ClickUpConfig {
                token: required(vars, "CLICKUP_API_TOKEN")?,
                base_url: optional(vars, "CLICKUP_BASE_URL"),
            },
            bigquery: BigQueryConfig {
                project_id: required(vars, "BIGQUERY_PROJECT_ID")?,
                dataset_id: optional(vars, "BIGQUERY_DATASET")
                    .unwrap_or_else(|| DEFAULT_DATASET.to_owned()),
                access_token: required(vars, "BIGQUERY_ACCESS_TOKEN")?,
                base_url: optional(vars, "BIGQUERY_BASE_URL"),
            },
        })
    }
}

fn required(vars: &HashMap<String, String>, name: &str) -> Result<String, ConfigError> {
    optional(vars, name).ok_or_else(|| ConfigError::MissingVar(name.to_owned()))
}

fn optional(vars: &HashMap<String, String>, name: &str) -> Option<String> {
    vars.get(name).filter(|v| !v.is_empty()).cloned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn full_vars() -> HashMap<String, String> {
        [
            ("CLICKUP_API_TOKEN", "pk_123"),
            ("CLICKUP_WORKSPACE_ID", "ws_9"),
            ("BIGQUERY_PROJECT_ID", "proj"),
            ("BIGQUERY_ACCESS_TOKEN", "ya29.x"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect()
    }

    #[test]
    fn parses_required_vars() {
        let config = SyncConfig::from_vars(&full_vars()).unwrap();
        assert_eq!(config.workspace_id, "ws_9");
        assert_eq!(config.clickup.token, "pk_123");
        assert_eq!(config.bigquery.project_id, "proj");
        assert_eq!(config.bigquery.access_token, "ya29.x");
    }

    #[test]
    fn dataset_defaults_to_clickup_data() {
        let config = SyncConfig::from_vars(&full_vars()).unwrap();
        assert_eq!(config.bigquery.dataset_id, "clickup_data");
    }

    #[test]
    fn dataset_override_applies() {
        let mut vars = full_vars();
        let _ = vars.insert("BIGQUERY_DATASET".into(), "staging".into());
        let config = SyncConfig::from_vars(&vars).unwrap();
        assert_eq!(config.bigquery.dataset_id, "staging");
    }

    #[test]
    fn base_urls_default_to_none() {
        let config = SyncConfig::from_vars(&full_vars()).unwrap();
        assert!(config.clickup.base_url.is_none());
        assert!(config.bigquery.base_url.is_none());
    }

    #[test]
    fn missing_token_is_named_in_error() {
        let mut vars = full_vars();
        let _ = vars.remove("CLICKUP_API_TOKEN");
        let err = SyncConfig::from_vars(&vars).unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing required environment variable CLICKUP_API_TOKEN"
        );
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let mut vars = full_vars();
        let _ = vars.insert("BIGQUERY_PROJECT_ID".into(), String::new());
        let err = SyncConfig::from_vars(&vars).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(name) if name == "BIGQUERY_PROJECT_ID"));
    }
}
