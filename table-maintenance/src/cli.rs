//! Command-line surface for the maintenance routines.

use clap::{Parser, Subcommand};

use crate::models::TableName;
use crate::services::{add_row_numbers, delete_all_rows, StoreError, TableStore};

#[derive(Debug, Parser)]
#[command(name = "table-maintenance", version, about = "Table store maintenance routines")]
pub struct Cli {
    /// Overrides the configured database URL.
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add the row_num column if needed and renumber every row by rowid.
    NumberRows {
        #[arg(long)]
        table: TableName,
    },
    /// Delete every row of a table. Irreversible.
    Purge {
        #[arg(long)]
        table: TableName,
    },
    /// Print the number of rows in a table.
    Count {
        #[arg(long)]
        table: TableName,
    },
}

/// Run one command and return the line to print.
pub async fn execute(command: &Command, store: &dyn TableStore) -> Result<String, StoreError> {
    match command {
        Command::NumberRows { table } => {
            let report = add_row_numbers(store, table).await?;
            Ok(format!(
                "{}: numbered {} rows{}",
                table,
                report.rows_numbered,
                if report.column_added {
                    " (row_num column added)"
                } else {
                    ""
                }
            ))
        }
        Command::Purge { table } => {
            let deleted = delete_all_rows(store, table).await?;
            Ok(format!("{}: deleted {} rows", table, deleted))
        }
        Command::Count { table } => Ok(store.count_rows(table).await?.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_number_rows() {
        let cli = Cli::try_parse_from([
            "table-maintenance",
            "number-rows",
            "--table",
            "conventional_power_plants_DE",
        ])
        .unwrap();

        assert!(cli.database_url.is_none());
        match cli.command {
            Command::NumberRows { table } => {
                assert_eq!(table.as_str(), "conventional_power_plants_DE")
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn database_url_is_global() {
        let cli = Cli::try_parse_from([
            "table-maintenance",
            "purge",
            "--table",
            "rule_storage",
            "--database-url",
            "sqlite://rules.db",
        ])
        .unwrap();

        assert_eq!(cli.database_url.as_deref(), Some("sqlite://rules.db"));
        assert!(matches!(cli.command, Command::Purge { .. }));
    }

    #[test]
    fn rejects_unsafe_table_names() {
        let result = Cli::try_parse_from([
            "table-maintenance",
            "purge",
            "--table",
            "rule_storage; DROP TABLE users",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn purge_requires_a_table() {
        assert!(Cli::try_parse_from(["table-maintenance", "purge"]).is_err());
    }
}
