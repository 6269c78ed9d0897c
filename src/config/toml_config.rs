use crate::core::{InvalidInputPolicy, TipPercentage};
use crate::utils::error::{Result, TipError};
use crate::utils::validation::{validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub defaults: Option<DefaultsConfig>,
    pub display: Option<DisplayConfig>,
    pub validation: Option<ValidationConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub tip: Option<String>,
    pub round_up: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationConfig {
    pub on_invalid_input: Option<String>,
}

impl TomlConfig {
    /// Loads and parses a TOML config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| TipError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TipError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TipError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn default_percentage(&self) -> Result<Option<TipPercentage>> {
        self.defaults
            .as_ref()
            .and_then(|d| d.tip.as_deref())
            .map(str::parse)
            .transpose()
    }

    pub fn default_round_up(&self) -> Option<bool> {
        self.defaults.as_ref().and_then(|d| d.round_up)
    }

    pub fn locale(&self) -> Option<&str> {
        self.display.as_ref().and_then(|d| d.locale.as_deref())
    }

    pub fn invalid_input_policy(&self) -> Result<Option<InvalidInputPolicy>> {
        self.validation
            .as_ref()
            .and_then(|v| v.on_invalid_input.as_deref())
            .map(str::parse)
            .transpose()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(tip) = self.defaults.as_ref().and_then(|d| d.tip.as_deref()) {
            if tip.parse::<TipPercentage>().is_err() {
                return Err(TipError::InvalidConfigValueError {
                    field: "defaults.tip".to_string(),
                    value: tip.to_string(),
                    reason: "Valid values: 15, 18, 20".to_string(),
                });
            }
        }

        if let Some(locale) = self.locale() {
            validate_non_empty_string("display.locale", locale)?;
        }

        if let Some(policy) = self
            .validation
            .as_ref()
            .and_then(|v| v.on_invalid_input.as_deref())
        {
            if policy.parse::<InvalidInputPolicy>().is_err() {
                return Err(TipError::InvalidConfigValueError {
                    field: "validation.on_invalid_input".to_string(),
                    value: policy.to_string(),
                    reason: format!("Valid values: {}", InvalidInputPolicy::NAMES.join(", ")),
                });
            }
        }

        Ok(())
    }
}
