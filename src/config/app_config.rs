use crate::domain::model::Language;
use crate::utils::error::{BmiError, Result};
use crate::utils::validation::{validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_STORE_PATH: &str = "./bmi-calc.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_store_path")]
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub language: Language,
    #[serde(default = "default_mask_weight")]
    pub mask_weight: bool,
}

fn default_store_path() -> String {
    DEFAULT_STORE_PATH.to_string()
}

fn default_mask_weight() -> bool {
    true
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            mask_weight: default_mask_weight(),
        }
    }
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BmiError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BmiError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BmiError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_path("storage.path", &self.storage.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_for_empty_file() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.storage.path, DEFAULT_STORE_PATH);
        assert_eq!(config.display.language, Language::En);
        assert!(config.display.mask_weight);
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[storage]
path = "/tmp/bmi/state.json"

[display]
language = "ko"
mask_weight = false
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.storage.path, "/tmp/bmi/state.json");
        assert_eq!(config.display.language, Language::Ko);
        assert!(!config.display.mask_weight);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BMI_CALC_TEST_STORE", "/var/lib/bmi.json");

        let config = AppConfig::from_toml_str(
            r#"
[storage]
path = "${BMI_CALC_TEST_STORE}"
"#,
        )
        .unwrap();
        assert_eq!(config.storage.path, "/var/lib/bmi.json");

        std::env::remove_var("BMI_CALC_TEST_STORE");
    }

    #[test]
    fn test_invalid_language_is_rejected() {
        let result = AppConfig::from_toml_str(
            r#"
[display]
language = "fr"
"#,
        );
        assert!(matches!(
            result,
            Err(BmiError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_empty_store_path_fails_validation() {
        let config = AppConfig::from_toml_str(
            r#"
[storage]
path = ""
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[display]\nlanguage = \"ko\"").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.display.language, Language::Ko);
        assert_eq!(config.storage.path, DEFAULT_STORE_PATH);
    }
}
