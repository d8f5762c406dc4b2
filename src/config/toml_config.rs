use crate::core::ConfigProvider;
use crate::utils::error::{GroceryError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_DATABASE_FILE: &str = "grocery_list.csv";
pub const DEFAULT_EXPORT_FILE: &str = "test_list.csv";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    pub logging: Option<LoggingConfig>,
}

/// Where the list is loaded from and exported to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: String,
    pub database_file: String,
    pub export_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
            database_file: DEFAULT_DATABASE_FILE.to_string(),
            export_file: DEFAULT_EXPORT_FILE.to_string(),
        }
    }
}

impl TomlConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GroceryError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GroceryError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` references with environment values. Unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GroceryError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl ConfigProvider for StorageConfig {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn database_file(&self) -> &str {
        &self.database_file
    }

    fn export_file(&self) -> &str {
        &self.export_file
    }
}

impl ConfigProvider for TomlConfig {
    fn data_dir(&self) -> &str {
        self.storage.data_dir()
    }

    fn database_file(&self) -> &str {
        self.storage.database_file()
    }

    fn export_file(&self) -> &str {
        self.storage.export_file()
    }
}

impl Validate for StorageConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("storage.data_dir", &self.data_dir)?;
        validation::validate_non_empty_string("storage.database_file", &self.database_file)?;
        validation::validate_file_extension("storage.database_file", &self.database_file, &["csv"])?;
        validation::validate_non_empty_string("storage.export_file", &self.export_file)?;
        validation::validate_file_extension("storage.export_file", &self.export_file, &["csv"])?;
        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.storage.validate()?;

        if let Some(level) = self.log_level() {
            let valid_levels = ["trace", "debug", "info", "warn", "error"];
            if !valid_levels.contains(&level) {
                return Err(GroceryError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Valid levels: {}", valid_levels.join(", ")),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[storage]
data_dir = "/home/me/groceries"
database_file = "pantry.csv"
export_file = "shopping.csv"

[logging]
level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.data_dir(), "/home/me/groceries");
        assert_eq!(config.database_file(), "pantry.csv");
        assert_eq!(config.export_file(), "shopping.csv");
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.storage, StorageConfig::default());
        assert_eq!(config.log_level(), None);

        let config = TomlConfig::from_toml_str("[storage]\nexport_file = \"week.csv\"\n").unwrap();
        assert_eq!(config.database_file(), DEFAULT_DATABASE_FILE);
        assert_eq!(config.export_file(), "week.csv");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("GROCERY_TEST_DATA_DIR", "/tmp/grocery-data");

        let toml_content = r#"
[storage]
data_dir = "${GROCERY_TEST_DATA_DIR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.data_dir(), "/tmp/grocery-data");

        std::env::remove_var("GROCERY_TEST_DATA_DIR");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[storage]\ndatabase_file = \"list.txt\"\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = TomlConfig::from_toml_str("[storage\n").unwrap_err();
        assert!(matches!(err, GroceryError::ConfigError { .. }));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[storage]\ndata_dir = \"./elsewhere\"").unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.data_dir(), "./elsewhere");
    }
}
