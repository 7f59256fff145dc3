use super::store::{StoreError, TableStore};
use crate::models::TableName;
use tracing::{info, instrument};

/// Delete every row of `table`. The table definition is kept.
///
/// Returns the number of rows removed. There is no recovery path.
#[instrument(skip(store, table), fields(table = %table))]
pub async fn delete_all_rows(store: &dyn TableStore, table: &TableName) -> Result<u64, StoreError> {
    let deleted = store
        .run(&format!("DELETE FROM {}", table.quoted()))
        .await?;

    info!(rows_deleted = deleted, "Table purged");

    Ok(deleted)
}
