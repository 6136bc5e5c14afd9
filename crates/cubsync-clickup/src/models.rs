//! Typed mirrors of the ClickUp wire shapes the sync consumes.
//!
//! ClickUp nests a lot (status and priority are objects, timestamps are
//! epoch-millis strings, custom-field values may be absent entirely). All of
//! that optionality is expressed here with `Option` and `#[serde(default)]`
//! so extraction code downstream never touches raw JSON.

use serde::Deserialize;
use serde_json::Value;

/// A space under the workspace.
#[derive(Debug, Clone, Deserialize)]
pub struct Space {
    /// Space identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
}

/// A list under a space. Folder-nested lists are expected to already be
/// exposed by the lists-by-space endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskList {
    /// List identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
}

/// Nested status object on a task; only the inner string is loaded.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskStatus {
    /// Status label, e.g. `"in progress"`.
    #[serde(default)]
    pub status: String,
}

/// Nested priority object on a task. ClickUp's `id` is the numeric priority
/// ("1" urgent … "4" low) and is what the INTEGER column carries.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskPriority {
    /// Numeric priority as a string.
    #[serde(default)]
    pub id: String,
}

/// Per-task custom-field entry. The value is kept verbatim; type conversion
/// is the warehouse's problem, matching the declared column type.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomFieldValue {
    /// Field identifier, matching a workspace-level definition.
    pub id: String,
    /// Raw value as supplied by the API; absent for unset fields.
    #[serde(default)]
    pub value: Option<Value>,
}

/// A task as returned by the tasks-by-list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Task {
    /// Task identifier.
    pub id: String,
    /// Task name.
    #[serde(default)]
    pub name: String,
    /// Description; frequently null.
    #[serde(default)]
    pub description: Option<String>,
    /// Status object.
    #[serde(default)]
    pub status: Option<TaskStatus>,
    /// Priority object; null when unset.
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    /// Due date, epoch millis as a string.
    #[serde(default)]
    pub due_date: Option<String>,
    /// Creation time, epoch millis as a string.
    #[serde(default)]
    pub date_created: Option<String>,
    /// Last-update time, epoch millis as a string.
    #[serde(default)]
    pub date_updated: Option<String>,
    /// Custom-field values set on this task.
    #[serde(default)]
    pub custom_fields: Vec<CustomFieldValue>,
}

/// Custom task type defined at workspace level. Fetched as sync metadata;
/// does not influence the destination schema.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomTaskType {
    /// Type identifier.
    #[serde(default)]
    pub id: i64,
    /// Display name.
    #[serde(default)]
    pub name: String,
}

// Response envelopes. Every listing endpoint wraps its payload in a single
// key; a missing key decodes to an empty collection.

#[derive(Debug, Deserialize)]
pub(crate) struct SpacesEnvelope {
    #[serde(default)]
    pub spaces: Vec<Space>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListsEnvelope {
    #[serde(default)]
    pub lists: Vec<TaskList>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TasksEnvelope {
    #[serde(default)]
    pub tasks: Vec<Task>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CustomFieldsEnvelope {
    #[serde(default)]
    pub custom_fields: Vec<cubsync_core::CustomFieldDefinition>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CustomTaskTypesEnvelope {
    #[serde(default)]
    pub custom_task_types: Vec<CustomTaskType>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
