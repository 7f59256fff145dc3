//! Sequential `row_num` column maintenance.
//!
//! `row_num` holds each row's 1-based rank in the store's native `rowid`
//! order. The column is added once and the numbering is rewritten in full on
//! every call, so rows inserted or deleted since the last run are picked up.

use super::store::{StoreError, TableStore};
use crate::models::TableName;
use tracing::{debug, info, instrument};

pub const ROW_NUMBER_COLUMN: &str = "row_num";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowNumberingReport {
    /// False when the column was already present.
    pub column_added: bool,
    pub rows_numbered: u64,
}

/// Ensure `table` has an integer `row_num` column, then renumber every row.
///
/// Not transactional across the two steps: if numbering fails, the column
/// stays and existing values are whatever the store left behind.
#[instrument(skip(store, table), fields(table = %table))]
pub async fn add_row_numbers(
    store: &dyn TableStore,
    table: &TableName,
) -> Result<RowNumberingReport, StoreError> {
    let column_added = ensure_row_number_column(store, table).await?;
    let rows_numbered = store.run(&renumber_statement(table)).await?;

    info!(column_added, rows_numbered, "Row numbers assigned");

    Ok(RowNumberingReport {
        column_added,
        rows_numbered,
    })
}

async fn ensure_row_number_column(
    store: &dyn TableStore,
    table: &TableName,
) -> Result<bool, StoreError> {
    let columns = store.column_names(table).await?;
    if columns
        .iter()
        .any(|c| c.eq_ignore_ascii_case(ROW_NUMBER_COLUMN))
    {
        return Ok(false);
    }

    let alter = format!(
        "ALTER TABLE {} ADD COLUMN {} INTEGER",
        table.quoted(),
        ROW_NUMBER_COLUMN
    );

    match store.run(&alter).await {
        Ok(_) => Ok(true),
        // Someone else added it between the lookup and the ALTER
        Err(StoreError::DuplicateColumn { column })
            if column.eq_ignore_ascii_case(ROW_NUMBER_COLUMN) =>
        {
            debug!("row_num column already present");
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

/// Single-pass ordinal assignment over `rowid`.
fn renumber_statement(table: &TableName) -> String {
    let t = table.quoted();
    format!(
        "UPDATE {t} SET {col} = ranked.rn \
         FROM (SELECT rowid AS rid, ROW_NUMBER() OVER (ORDER BY rowid) AS rn FROM {t}) AS ranked \
         WHERE {t}.rowid = ranked.rid",
        col = ROW_NUMBER_COLUMN,
    )
}
