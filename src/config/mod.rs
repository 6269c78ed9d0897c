#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::{ConfigProvider, InvalidInputPolicy, TipPercentage};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use toml_config::TomlConfig;

/// Values given explicitly on the command line. `None` defers to the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub tip: Option<TipPercentage>,
    pub round_up: Option<bool>,
    pub locale: Option<String>,
    pub on_invalid: Option<InvalidInputPolicy>,
}

/// Settings after applying CLI flags over the config file over built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub percentage: TipPercentage,
    pub round_up: bool,
    pub locale: Option<String>,
    pub policy: InvalidInputPolicy,
}

impl ResolvedConfig {
    pub fn resolve(overrides: ConfigOverrides, file: Option<&TomlConfig>) -> Result<Self> {
        let base = match file {
            Some(file) => {
                file.validate()?;
                Self {
                    percentage: file.default_percentage()?.unwrap_or_default(),
                    round_up: file.default_round_up().unwrap_or(false),
                    locale: file.locale().map(str::to_string),
                    policy: file.invalid_input_policy()?.unwrap_or_default(),
                }
            }
            None => Self::default(),
        };

        let resolved = Self {
            percentage: overrides.tip.unwrap_or(base.percentage),
            round_up: overrides.round_up.unwrap_or(base.round_up),
            locale: overrides.locale.or(base.locale),
            policy: overrides.on_invalid.unwrap_or(base.policy),
        };

        tracing::debug!(?resolved, "Resolved configuration");
        Ok(resolved)
    }
}

impl ConfigProvider for ResolvedConfig {
    fn default_percentage(&self) -> TipPercentage {
        self.percentage
    }

    fn default_round_up(&self) -> bool {
        self.round_up
    }

    fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    fn invalid_input_policy(&self) -> InvalidInputPolicy {
        self.policy
    }
}
