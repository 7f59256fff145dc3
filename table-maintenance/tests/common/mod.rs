#![allow(dead_code)]

use table_maintenance::{SqliteStore, TableName, TableStore};

pub async fn memory_store() -> SqliteStore {
    SqliteStore::connect("sqlite::memory:", 1)
        .await
        .expect("Failed to open in-memory store")
}

pub fn table(name: &str) -> TableName {
    TableName::parse(name).expect("Invalid test table name")
}

/// Create `conventional_power_plants_DE` with the given plant names.
pub async fn seed_plants(store: &SqliteStore, names: &[&str]) -> TableName {
    store
        .run("CREATE TABLE conventional_power_plants_DE (name TEXT NOT NULL, capacity_mw REAL)")
        .await
        .expect("Failed to create plants table");

    for (i, name) in names.iter().enumerate() {
        sqlx::query("INSERT INTO conventional_power_plants_DE (name, capacity_mw) VALUES (?, ?)")
            .bind(*name)
            .bind(100.0 * (i as f64 + 1.0))
            .execute(store.pool())
            .await
            .expect("Failed to insert plant");
    }

    table("conventional_power_plants_DE")
}

/// `(name, row_num)` pairs in rowid order.
pub async fn numbered_rows(store: &SqliteStore, table: &TableName) -> Vec<(String, Option<i64>)> {
    sqlx::query_as::<_, (String, Option<i64>)>(&format!(
        "SELECT name, row_num FROM {} ORDER BY rowid",
        table.quoted()
    ))
    .fetch_all(store.pool())
    .await
    .expect("Failed to read row numbers")
}
