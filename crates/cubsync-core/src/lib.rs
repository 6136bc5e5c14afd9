//! # cubsync-core
//!
//! Shared types for the ClickUp → BigQuery sync pipeline: the destination
//! schema descriptor, column typing, and the flattened-row representation.
//!
//! The schema for one run is built once from the workspace's custom-field
//! definitions and then consumed by both the create-table step and the load
//! job, so the two cannot drift apart within a run.

#![deny(unsafe_code)]

pub mod schema;

pub use schema::{
    ColumnSpec, ColumnType, CustomFieldDefinition, FieldKind, TableSchema, custom_field_column,
};

/// A flattened task ready for loading: base attributes plus one
/// `custom_field_<id>` key per custom-field value present on the task.
pub type TaskRow = serde_json::Map<String, serde_json::Value>;
