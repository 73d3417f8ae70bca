use crate::core::messages::Locale;
use crate::core::ConfigProvider;
use crate::domain::Date;
use crate::utils::error::{RegistryError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_MAX_BATCHES: usize = 1000;
pub const MAX_BATCHES_LIMIT: usize = 1_000_000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub system: SystemConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemConfig {
    pub locale: Option<Locale>,
    pub start_date: Option<Date>,
    /// 0 lifts the limit.
    pub max_batches: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub format: Option<LogFormat>,
}

/// `Some(0)` means unlimited; unset falls back to the default cap.
pub fn resolve_max_batches(configured: Option<usize>) -> Option<usize> {
    match configured {
        Some(0) => None,
        Some(n) => Some(n),
        None => Some(DEFAULT_MAX_BATCHES),
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| RegistryError::ConfigError {
            message: format!("{}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| RegistryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::LazyLock;

        static ENV_VAR: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(max) = self.system.max_batches {
            crate::utils::validation::validate_range(
                "system.max_batches",
                max,
                0,
                MAX_BATCHES_LIMIT,
            )?;
        }
        Ok(())
    }

    pub fn verbose(&self) -> bool {
        self.logging.verbose.unwrap_or(false)
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging.format.unwrap_or_default()
    }
}

impl ConfigProvider for TomlConfig {
    fn locale(&self) -> Locale {
        self.system.locale.unwrap_or_default()
    }

    fn start_date(&self) -> Date {
        self.system.start_date.unwrap_or_default()
    }

    fn max_batches(&self) -> Option<usize> {
        resolve_max_batches(self.system.max_batches)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[system]
locale = "pt"
start_date = "15-03-2025"
max_batches = 20

[logging]
verbose = true
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.locale(), Locale::Pt);
        assert_eq!(config.start_date().to_string(), "15-03-2025");
        assert_eq!(config.max_batches(), Some(20));
        assert!(config.verbose());
        assert_eq!(config.log_format(), LogFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.locale(), Locale::En);
        assert_eq!(config.start_date(), Date::default());
        assert_eq!(config.max_batches(), Some(DEFAULT_MAX_BATCHES));
        assert_eq!(config.log_format(), LogFormat::Compact);
    }

    #[test]
    fn test_zero_max_batches_is_unlimited() {
        let config = TomlConfig::from_toml_str("[system]\nmax_batches = 0\n").unwrap();
        assert_eq!(config.max_batches(), None);
    }

    #[test]
    fn test_invalid_start_date_fails_to_parse() {
        let err = TomlConfig::from_toml_str("[system]\nstart_date = \"30-02-2025\"\n").unwrap_err();
        assert!(matches!(err, RegistryError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_max_batches_validation() {
        let config = TomlConfig::from_toml_str("[system]\nmax_batches = 2000000\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("VACCINE_REGISTRY_TEST_LOCALE", "pt");

        let config =
            TomlConfig::from_toml_str("[system]\nlocale = \"${VACCINE_REGISTRY_TEST_LOCALE}\"\n")
                .unwrap();
        assert_eq!(config.locale(), Locale::Pt);

        std::env::remove_var("VACCINE_REGISTRY_TEST_LOCALE");
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[system]\nstart_date = \"1-6-2025\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.start_date().to_string(), "01-06-2025");
    }

    #[test]
    fn test_missing_file() {
        let err = TomlConfig::from_file("/nonexistent/registry.toml").unwrap_err();
        assert!(matches!(err, RegistryError::ConfigError { .. }));
    }
}
