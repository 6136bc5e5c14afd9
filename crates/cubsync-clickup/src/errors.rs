//! ClickUp client error types.

use thiserror::Error;

/// Errors from the ClickUp API client.
///
/// None of these are retried anywhere; the first failure propagates to the
/// top-level sync routine and aborts the run.
#[derive(Debug, Error)]
pub enum ClickUpError {
    /// The API answered with a non-success status.
    #[error("ClickUp API error: HTTP {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },
    /// The request itself failed (connect, TLS, timeout at the OS level).
    #[error("ClickUp request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The response body was not the expected JSON shape.
    #[error("failed to decode ClickUp response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for ClickUp operations.
pub type Result<T> = std::result::Result<T, ClickUpError>;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_carries_status_and_body() {
        let err = ClickUpError::Api {
            status: 401,
            body: "{\"err\":\"Token invalid\"}".into(),
        };
        let text = err.to_string();
        assert!(text.contains("401"));
        assert!(text.contains("Token invalid"));
    }

    #[test]
    fn decode_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: ClickUpError = json_err.into();
        assert!(matches!(err, ClickUpError::Decode(_)));
    }
}
