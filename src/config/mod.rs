pub mod toml_config;

pub use toml_config::TomlConfig;

use crate::adapters::storage::{MEMORY_BACKEND, REDB_BACKEND};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LISTEN: &str = "0.0.0.0:8080";
pub const DEFAULT_DATA_PATH: &str = "./data/franchises.redb";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "franchise-app"))]
#[cfg_attr(
    feature = "cli",
    command(about = "HTTP service for franchises, their branches and products")
)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(short = 'c', long, help = "Path to a TOML config file"))]
    pub config: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_LISTEN))]
    pub listen: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = REDB_BACKEND, help = "memory | redb"))]
    pub store: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_DATA_PATH))]
    pub data_path: String,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Emit logs as JSON"))]
    pub json_logs: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            config: None,
            listen: DEFAULT_LISTEN.to_string(),
            store: REDB_BACKEND.to_string(),
            data_path: DEFAULT_DATA_PATH.to_string(),
            verbose: false,
            json_logs: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn listen_addr(&self) -> &str {
        &self.listen
    }

    fn store_backend(&self) -> &str {
        &self.store
    }

    fn data_path(&self) -> &str {
        &self.data_path
    }

    fn verbose(&self) -> bool {
        self.verbose
    }

    fn json_logs(&self) -> bool {
        self.json_logs
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_common(self)
    }
}

/// Checks shared by every configuration source.
pub fn validate_common(config: &dyn ConfigProvider) -> Result<()> {
    validation::validate_listen_addr("listen", config.listen_addr())?;
    validation::validate_one_of(
        "storage.backend",
        config.store_backend(),
        &[MEMORY_BACKEND, REDB_BACKEND],
    )?;
    if config.store_backend() == REDB_BACKEND {
        validation::validate_path("storage.path", config.data_path())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cli_config_is_valid() {
        assert!(CliConfig::default().validate().is_ok());
    }

    #[test]
    fn test_memory_backend_ignores_data_path() {
        let config = CliConfig {
            store: MEMORY_BACKEND.to_string(),
            data_path: String::new(),
            ..CliConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_cli_config() {
        let config = CliConfig {
            listen: "not-an-address".to_string(),
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());

        let config = CliConfig {
            store: "mongo".to_string(),
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_parse_cli_args() {
        let config = CliConfig::parse_from([
            "franchise-app",
            "--listen",
            "127.0.0.1:9000",
            "--store",
            "memory",
            "--verbose",
        ]);
        assert_eq!(config.listen, "127.0.0.1:9000");
        assert_eq!(config.store, "memory");
        assert_eq!(config.data_path, DEFAULT_DATA_PATH);
        assert!(config.verbose);
        assert!(!config.json_logs);
        assert!(config.config.is_none());
    }
}
