pub mod purge;
pub mod row_numbering;
pub mod store;

pub use purge::delete_all_rows;
pub use row_numbering::{add_row_numbers, RowNumberingReport, ROW_NUMBER_COLUMN};
pub use store::{SqliteStore, StoreError, TableStore};
