//! BigQuery client error types.

use thiserror::Error;

/// Errors from the BigQuery client.
#[derive(Debug, Error)]
pub enum BigQueryError {
    /// The API answered with a non-success status.
    #[error("BigQuery API error: HTTP {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },
    /// The request itself failed.
    #[error("BigQuery request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// A body could not be encoded or decoded.
    #[error("BigQuery JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// The load job completed with an error result.
    #[error("BigQuery load job failed: {message}")]
    Job {
        /// `status.errorResult.message` from the job.
        message: String,
    },
}

/// Result type for BigQuery operations.
pub type Result<T> = std::result::Result<T, BigQueryError>;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
