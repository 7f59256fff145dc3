use clap::Parser;
use service_core::observability::init_tracing;
use table_maintenance::cli::{execute, Cli};
use table_maintenance::config::MaintenanceConfig;
use table_maintenance::SqliteStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = MaintenanceConfig::load()?;

    init_tracing("table-maintenance", &config.log_level, None);

    let database_url = cli.database_url.as_deref().unwrap_or(&config.database_url);
    let store = SqliteStore::connect(database_url, config.max_connections).await?;

    let summary = execute(&cli.command, &store).await?;
    println!("{}", summary);

    Ok(())
}
