//! # cubsync-bigquery
//!
//! Minimal BigQuery REST v2 client for the sync's two warehouse needs:
//! create-table-if-absent with an explicit typed schema, and a blocking
//! full-replace (`WRITE_TRUNCATE`) load of newline-delimited JSON rows.
//!
//! Speaks the REST API directly with a pre-minted OAuth2 bearer token;
//! token acquisition and refresh are someone else's job.

#![deny(unsafe_code)]

pub mod client;
pub mod errors;

pub use client::{BigQueryClient, BigQueryConfig, DEFAULT_BASE_URL};
pub use errors::{BigQueryError, Result};
