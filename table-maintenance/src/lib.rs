//! Out-of-band maintenance for the data-quality table store.
//!
//! Nothing here runs during request handling; the routines assume exclusive
//! access to the store for the duration of a call.

pub mod cli;
pub mod config;
pub mod models;
pub mod services;

pub use models::TableName;
pub use services::{SqliteStore, StoreError, TableStore};
