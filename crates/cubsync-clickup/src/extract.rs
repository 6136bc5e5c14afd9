//! Task extraction: walk the workspace hierarchy and flatten each task.
//!
//! The walk is strictly sequential (spaces, then each space's lists, then
//! each list's tasks) and has no per-resource isolation: the first failing
//! call aborts the whole extraction. A task visible under more than one list
//! is extracted once per list; nothing deduplicates across lists.

use chrono::DateTime;
use serde_json::Value;
use tracing::debug;

use crate::client::ClickUpClient;
use crate::errors::Result;
use crate::models::Task;
use cubsync_core::{TaskRow, custom_field_column};

impl ClickUpClient {
    /// Extract every task currently visible under the workspace, flattened
    /// and annotated with its containing space and list identifiers.
    pub async fn extract_tasks(&self, workspace_id: &str) -> Result<Vec<TaskRow>> {
        let mut rows = Vec::new();

        let spaces = self.spaces(workspace_id).await?;
        debug!(workspace = workspace_id, spaces = spaces.len(), "walking workspace");

        for space in &spaces {
            let lists = self.lists(&space.id).await?;
            debug!(space = %space.id, lists = lists.len(), "walking space");

            for list in &lists {
                let tasks = self.tasks(&list.id).await?;
                debug!(list = %list.id, tasks = tasks.len(), "fetched tasks");

                rows.extend(
                    tasks
                        .iter()
                        .map(|task| flatten_task(task, &space.id, &list.id)),
                );
            }
        }

        Ok(rows)
    }
}

/// Flatten a task into a load-ready row.
///
/// Base attributes land under the fixed column names; each custom-field
/// entry is rewritten into a top-level `custom_field_<id>` key holding its
/// value verbatim. The containing space/list identifiers are injected as
/// `space_id`/`list_id`.
pub fn flatten_task(task: &Task, space_id: &str, list_id: &str) -> TaskRow {
    let mut row = TaskRow::new();

    let _ = row.insert("id".into(), Value::String(task.id.clone()));
    let _ = row.insert("name".into(), Value::String(task.name.clone()));
    let _ = row.insert("description".into(), opt_string(task.description.clone()));
    let _ = row.insert(
        "status".into(),
        opt_string(task.status.as_ref().map(|s| s.status.clone())),
    );
    let _ = row.insert("priority".into(), priority_value(task));
    let _ = row.insert("due_date".into(), timestamp_value(task.due_date.as_deref()));
    let _ = row.insert("space_id".into(), Value::String(space_id.to_owned()));
    let _ = row.insert("list_id".into(), Value::String(list_id.to_owned()));
    let _ = row.insert(
        "created_at".into(),
        timestamp_value(task.date_created.as_deref()),
    );
    let _ = row.insert(
        "updated_at".into(),
        timestamp_value(task.date_updated.as_deref()),
    );

    for field in &task.custom_fields {
        let _ = row.insert(
            custom_field_column(&field.id),
            field.value.clone().unwrap_or(Value::Null),
        );
    }

    row
}

fn opt_string(value: Option<String>) -> Value {
    value.map_or(Value::Null, Value::String)
}

/// Priority column value: the numeric id from the nested priority object,
/// null when the priority is unset or its id is not numeric.
fn priority_value(task: &Task) -> Value {
    task.priority
        .as_ref()
        .and_then(|p| p.id.parse::<i64>().ok())
        .map_or(Value::Null, |n| Value::Number(n.into()))
}

/// Timestamp column value: ClickUp's epoch-millis string parsed once here
/// and emitted as RFC 3339; absent or unparseable input becomes null.
fn timestamp_value(millis: Option<&str>) -> Value {
    millis
        .and_then(|raw| raw.parse::<i64>().ok())
        .and_then(DateTime::from_timestamp_millis)
        .map_or(Value::Null, |dt| Value::String(dt.to_rfc3339()))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
