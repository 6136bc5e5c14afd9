//! The sync routine: metadata → schema → table → extract → load.
//!
//! Strictly sequential; every call is awaited in program order and the
//! first failure aborts the run. Tasks fetched before a failure are
//! discarded with it; there is no checkpointing and no partial load.

use cubsync_bigquery::{BigQueryClient, BigQueryError};
use cubsync_clickup::{ClickUpClient, ClickUpError};
use cubsync_core::TableSchema;
use tracing::{debug, info};

use crate::config::SyncConfig;

/// Destination table name.
const TASKS_TABLE: &str = "tasks";

/// Any failure that aborts a sync run.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// Extraction-side failure.
    #[error(transparent)]
    ClickUp(#[from] ClickUpError),
    /// Warehouse-side failure.
    #[error(transparent)]
    BigQuery(#[from] BigQueryError),
}

/// Run one full sync: replace the destination table's contents with the
/// tasks currently visible under the configured workspace.
pub async fn run_sync(config: &SyncConfig) -> Result<(), SyncError> {
    info!(workspace = %config.workspace_id, "starting ClickUp to BigQuery sync");

    let clickup = ClickUpClient::new(config.clickup.clone());
    let bigquery = BigQueryClient::new(config.bigquery.clone());

    let fields = clickup.custom_fields(&config.workspace_id).await?;
    let task_types = clickup.custom_task_types(&config.workspace_id).await?;
    debug!(
        custom_fields = fields.len(),
        task_types = task_types.len(),
        "fetched workspace metadata"
    );

    let schema = TableSchema::with_custom_fields(&fields);
    bigquery.ensure_table(TASKS_TABLE, &schema).await?;

    let rows = clickup.extract_tasks(&config.workspace_id).await?;
    if rows.is_empty() {
        info!("no tasks found, skipping load");
    } else {
        let loaded = bigquery.load_rows(TASKS_TABLE, &schema, &rows).await?;
        info!(tasks = loaded, "loaded tasks to BigQuery");
    }

    info!("sync completed");
    Ok(())
}
