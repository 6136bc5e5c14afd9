//! # cubsync
//!
//! ClickUp → BigQuery task sync binary.
//!
//! One run is one strictly sequential pass: fetch workspace metadata, derive
//! the destination schema, ensure the `tasks` table exists, extract and
//! flatten every task, then full-replace the table's contents. Configuration
//! comes from the environment once at startup; a failure anywhere is logged
//! and terminates the process with a non-zero status.

#![deny(unsafe_code)]

pub mod config;
pub mod sync;

pub use config::{ConfigError, SyncConfig};
pub use sync::{SyncError, run_sync};
