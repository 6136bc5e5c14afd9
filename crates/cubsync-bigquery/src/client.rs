//! BigQuery REST client.
//!
//! Two operations: `ensure_table` (tables.insert, HTTP 409 treated as
//! success so an existing table is never touched) and `load_rows`
//! (multipart media upload of a `WRITE_TRUNCATE` load job, then polling the
//! job until it reports `DONE`). The poll loop has no timeout; the sync
//! blocks until the warehouse answers.

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::errors::{BigQueryError, Result};
use cubsync_core::{TableSchema, TaskRow};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://bigquery.googleapis.com";

/// Multipart boundary for load-job uploads.
const UPLOAD_BOUNDARY: &str = "cubsync_load_boundary";

/// Delay between load-job status polls.
const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// BigQuery client configuration.
#[derive(Debug, Clone)]
pub struct BigQueryConfig {
    /// GCP project holding the dataset.
    pub project_id: String,
    /// Destination dataset.
    pub dataset_id: String,
    /// Pre-minted OAuth2 access token, sent as a bearer token.
    pub access_token: String,
    /// Override for tests and emulators; defaults to [`DEFAULT_BASE_URL`].
    pub base_url: Option<String>,
}

/// BigQuery REST client.
pub struct BigQueryClient {
    config: BigQueryConfig,
    http: reqwest::Client,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoadJob {
    job_reference: JobReference,
    #[serde(default)]
    status: Option<JobStatus>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JobReference {
    job_id: String,
    #[serde(default)]
    location: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JobStatus {
    #[serde(default)]
    state: String,
    #[serde(default)]
    error_result: Option<ErrorProto>,
}

#[derive(Debug, Deserialize)]
struct ErrorProto {
    #[serde(default)]
    message: String,
}

impl BigQueryClient {
    /// Create a new client.
    #[must_use]
    pub fn new(config: BigQueryConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Create a new client with a shared HTTP client.
    #[must_use]
    pub fn with_client(config: BigQueryConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    fn base_url(&self) -> &str {
        self.config.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Create the table with the given schema if it does not exist.
    ///
    /// An already-existing table (HTTP 409) is success; it is left exactly
    /// as it is, neither dropped nor altered, even if the schema has since
    /// gained or lost custom-field columns.
    pub async fn ensure_table(&self, table: &str, schema: &TableSchema) -> Result<()> {
        let url = format!(
            "{}/bigquery/v2/projects/{}/datasets/{}/tables",
            self.base_url(),
            self.config.project_id,
            self.config.dataset_id,
        );
        let body = json!({
            "tableReference": {
                "projectId": self.config.project_id,
                "datasetId": self.config.dataset_id,
                "tableId": table,
            },
            "schema": schema.to_bigquery_fields(),
        });

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.access_token)
            .json(&body)
            .send()
            .await
            .map_err(BigQueryError::Http)?;

        let status = response.status();
        if status == reqwest::StatusCode::CONFLICT {
            debug!(table, "table already exists, leaving it untouched");
            return Ok(());
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BigQueryError::Api {
                status: status.as_u16(),
                body,
            });
        }

        debug!(table, columns = schema.columns.len(), "created table");
        Ok(())
    }

    /// Replace the table's contents with exactly the given rows.
    ///
    /// An empty row set is an explicit skip: no HTTP call is issued and the
    /// table content is left untouched. Otherwise the rows are uploaded as a
    /// `WRITE_TRUNCATE` load job and the call blocks until the job is done.
    /// Returns the number of rows handed to the warehouse.
    pub async fn load_rows(
        &self,
        table: &str,
        schema: &TableSchema,
        rows: &[TaskRow],
    ) -> Result<usize> {
        if rows.is_empty() {
            debug!(table, "no rows to load, skipping load job");
            return Ok(0);
        }

        let job = self.insert_load_job(table, schema, rows).await?;
        self.wait_for_job(job).await?;
        Ok(rows.len())
    }

    /// Start the load job via a multipart media upload.
    async fn insert_load_job(
        &self,
        table: &str,
        schema: &TableSchema,
        rows: &[TaskRow],
    ) -> Result<LoadJob> {
        let url = format!(
            "{}/upload/bigquery/v2/projects/{}/jobs?uploadType=multipart",
            self.base_url(),
            self.config.project_id,
        );

        let metadata = json!({
            "configuration": {
                "load": {
                    "destinationTable": {
                        "projectId": self.config.project_id,
                        "datasetId": self.config.dataset_id,
                        "tableId": table,
                    },
                    "sourceFormat": "NEWLINE_DELIMITED_JSON",
                    "writeDisposition": "WRITE_TRUNCATE",
                    "schema": schema.to_bigquery_fields(),
                }
            }
        });

        let mut ndjson = String::new();
        for row in rows {
            ndjson.push_str(&serde_json::to_string(row)?);
            ndjson.push('\n');
        }

        let body = format!(
            "--{UPLOAD_BOUNDARY}\r\n\
             Content-Type: application/json; charset=UTF-8\r\n\r\n\
             {metadata}\r\n\
             --{UPLOAD_BOUNDARY}\r\n\
             Content-Type: application/octet-stream\r\n\r\n\
             {ndjson}\r\n\
             --{UPLOAD_BOUNDARY}--\r\n"
        );

        debug!(table, rows = rows.len(), "starting load job");
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.access_token)
            .header(
                reqwest::header::CONTENT_TYPE,
                format!("multipart/related; boundary={UPLOAD_BOUNDARY}"),
            )
            .body(body)
            .send()
            .await
            .map_err(BigQueryError::Http)?;

        let status = response.status();
        let body = response.text().await.map_err(BigQueryError::Http)?;
        if !status.is_success() {
            return Err(BigQueryError::Api {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(BigQueryError::Json)
    }

    /// Block until the job reports `DONE`, then surface its error result if
    /// it has one. Polls forever; there is no timeout.
    async fn wait_for_job(&self, job: LoadJob) -> Result<()> {
        let job_id = job.job_reference.job_id.clone();
        let location = job.job_reference.location.clone();
        let mut status = job.status;

        loop {
            if let Some(current) = &status {
                if current.state == "DONE" {
                    if let Some(error) = &current.error_result {
                        return Err(BigQueryError::Job {
                            message: error.message.clone(),
                        });
                    }
                    debug!(job = %job_id, "load job done");
                    return Ok(());
                }
                debug!(job = %job_id, state = %current.state, "load job pending");
            }

            tokio::time::sleep(POLL_INTERVAL).await;
            status = Some(self.job_status(&job_id, location.as_deref()).await?);
        }
    }

    /// Fetch the current status of a job.
    async fn job_status(&self, job_id: &str, location: Option<&str>) -> Result<JobStatus> {
        let mut url = format!(
            "{}/bigquery/v2/projects/{}/jobs/{}",
            self.base_url(),
            self.config.project_id,
            job_id,
        );
        if let Some(location) = location {
            url.push_str(&format!("?location={location}"));
        }

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.config.access_token)
            .send()
            .await
            .map_err(BigQueryError::Http)?;

        let status = response.status();
        let body = response.text().await.map_err(BigQueryError::Http)?;
        if !status.is_success() {
            return Err(BigQueryError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let job: LoadJob = serde_json::from_str(&body)?;
        Ok(job.status.unwrap_or(JobStatus {
            state: String::new(),
            error_result: None,
        }))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
