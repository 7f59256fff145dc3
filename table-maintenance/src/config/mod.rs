use config::{Config as Cfg, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct MaintenanceConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub log_level: String,
}

impl MaintenanceConfig {
    /// Defaults, then `maintenance.*` if present, then `MAINTENANCE__*` env.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .set_default("database_url", "sqlite://data.db")?
            .set_default("max_connections", 1)?
            .set_default("log_level", "info")?
            .add_source(File::with_name("maintenance").required(false))
            .add_source(
                Environment::with_prefix("MAINTENANCE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_file_or_env() {
        let config: Result<MaintenanceConfig, ConfigError> = MaintenanceConfig::load();
        let config = config.expect("Defaults should always load");

        assert_eq!(config.database_url, "sqlite://data.db");
        assert_eq!(config.max_connections, 1);
        assert_eq!(config.log_level, "info");
    }
}
