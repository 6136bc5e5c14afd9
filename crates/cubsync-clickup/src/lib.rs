//! # cubsync-clickup
//!
//! ClickUp REST API client and the task extractor.
//!
//! The client covers the five workspace endpoints the sync needs (custom
//! fields, custom task types, spaces, lists, tasks) and walks the
//! space → list → task hierarchy strictly sequentially. Responses are
//! validated once at the deserialization boundary into typed models;
//! optional JSON keys become `Option` fields with defined defaults.
//!
//! Known, deliberate limitations: listing endpoints are read once (no
//! pagination), there is no retry, and one failing resource aborts the
//! whole walk.

#![deny(unsafe_code)]

pub mod client;
pub mod errors;
pub mod extract;
pub mod models;

pub use client::{ClickUpClient, ClickUpConfig, DEFAULT_BASE_URL};
pub use errors::{ClickUpError, Result};
pub use extract::flatten_task;
