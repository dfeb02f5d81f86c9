use crate::adapters::storage::REDB_BACKEND;
use crate::config::{validate_common, DEFAULT_DATA_PATH, DEFAULT_LISTEN};
use crate::core::ConfigProvider;
use crate::utils::error::{FranchiseError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub storage: StorageSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSection {
    #[serde(default = "default_backend")]
    pub backend: String,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    /// trace | debug | info | warn | error
    pub level: Option<String>,
    pub json: Option<bool>,
}

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

fn default_listen() -> String {
    DEFAULT_LISTEN.to_string()
}

fn default_backend() -> String {
    REDB_BACKEND.to_string()
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            path: Some(DEFAULT_DATA_PATH.to_string()),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|e| FranchiseError::ConfigError {
                message: format!("Cannot read {}: {}", path.as_ref().display(), e),
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FranchiseError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FranchiseError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn listen_addr(&self) -> &str {
        &self.server.listen
    }

    fn store_backend(&self) -> &str {
        &self.storage.backend
    }

    fn data_path(&self) -> &str {
        self.storage.path.as_deref().unwrap_or("")
    }

    fn verbose(&self) -> bool {
        matches!(self.log_level(), Some("debug" | "trace"))
    }

    fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }

    fn json_logs(&self) -> bool {
        self.logging.json.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if self.storage.backend == REDB_BACKEND {
            validation::validate_required_field("storage.path", &self.storage.path)?;
        }
        if let Some(level) = self.log_level() {
            validation::validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }
        validate_common(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[server]
listen = "127.0.0.1:9090"

[storage]
backend = "redb"
path = "/var/lib/franchises/db.redb"

[logging]
level = "debug"
json = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.listen_addr(), "127.0.0.1:9090");
        assert_eq!(config.store_backend(), "redb");
        assert_eq!(config.data_path(), "/var/lib/franchises/db.redb");
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.verbose());
        assert!(config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_logging_level_feeds_filter() {
        let config = TomlConfig::from_toml_str("[logging]\nlevel = \"warn\"\n").unwrap();
        assert_eq!(config.log_level(), Some("warn"));
        assert!(!config.verbose());
        assert!(!config.json_logs());
        assert_eq!(
            crate::utils::logger::default_filter(config.verbose(), config.log_level()),
            "franchise_app=warn"
        );

        let config = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(FranchiseError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_unreadable_file_is_config_error() {
        let err = TomlConfig::from_file("/nonexistent/franchise.toml").unwrap_err();
        assert!(matches!(err, FranchiseError::ConfigError { .. }));
        assert_eq!(
            err.category(),
            crate::utils::error::ErrorCategory::Configuration
        );
        assert!(err.to_string().contains("/nonexistent/franchise.toml"));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.listen_addr(), DEFAULT_LISTEN);
        assert_eq!(config.store_backend(), REDB_BACKEND);
        assert_eq!(config.data_path(), DEFAULT_DATA_PATH);
        assert!(!config.verbose());
        assert!(config.log_level().is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("FRANCHISE_TEST_DATA_DIR", "/tmp/franchise-test");

        let toml_content = r#"
[storage]
path = "${FRANCHISE_TEST_DATA_DIR}/db.redb"

[server]
listen = "${FRANCHISE_TEST_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.data_path(), "/tmp/franchise-test/db.redb");
        assert_eq!(config.listen_addr(), "${FRANCHISE_TEST_UNSET_VAR}");
        assert!(config.validate().is_err());

        std::env::remove_var("FRANCHISE_TEST_DATA_DIR");
    }

    #[test]
    fn test_redb_requires_path() {
        let toml_content = r#"
[storage]
backend = "redb"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(FranchiseError::MissingConfigError { .. })
        ));

        let config = TomlConfig::from_toml_str("[storage]\nbackend = \"memory\"\n").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            TomlConfig::from_toml_str("[server\nlisten ="),
            Err(FranchiseError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nlisten = \"0.0.0.0:8181\"\n\n[storage]\nbackend = \"memory\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.listen_addr(), "0.0.0.0:8181");
        assert_eq!(config.store_backend(), "memory");
    }
}
