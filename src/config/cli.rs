use crate::config::ConfigOverrides;
use crate::core::{InvalidInputPolicy, TipPercentage};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "tip-time")]
#[command(about = "Calculate a tip from the cost of service")]
pub struct CliConfig {
    /// Cost of service. Omit to start the interactive screen
    #[arg(short, long, allow_hyphen_values = true)]
    pub cost: Option<String>,

    /// Tip percentage: 15, 18 or 20
    #[arg(short, long)]
    pub tip: Option<TipPercentage>,

    /// Round the tip up to the next whole unit
    #[arg(short, long, conflicts_with = "no_round_up")]
    pub round_up: bool,

    /// Do not round, even if the config file says so
    #[arg(long)]
    pub no_round_up: bool,

    /// Currency locale, e.g. en-US or de_DE.UTF-8 (defaults to the platform locale)
    #[arg(long)]
    pub locale: Option<String>,

    /// TOML file with defaults
    #[arg(long)]
    pub config: Option<String>,

    /// What to do with a cost that is not a number: reject or reset-to-zero
    #[arg(long)]
    pub on_invalid: Option<InvalidInputPolicy>,

    /// Print the one-shot result as JSON
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn overrides(&self) -> ConfigOverrides {
        let round_up = if self.round_up {
            Some(true)
        } else if self.no_round_up {
            Some(false)
        } else {
            None
        };

        ConfigOverrides {
            tip: self.tip,
            round_up,
            locale: self.locale.clone(),
            on_invalid: self.on_invalid,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_one_shot_flags() {
        let config =
            CliConfig::try_parse_from(["tip-time", "--cost", "50.00", "--tip", "18", "-r"]).unwrap();
        assert_eq!(config.cost.as_deref(), Some("50.00"));

        let overrides = config.overrides();
        assert_eq!(overrides.tip, Some(TipPercentage::Eighteen));
        assert_eq!(overrides.round_up, Some(true));
    }

    #[test]
    fn test_round_up_flags_conflict() {
        assert!(CliConfig::try_parse_from(["tip-time", "-r", "--no-round-up"]).is_err());
    }

    #[test]
    fn test_unset_flags_defer_to_config() {
        let config = CliConfig::try_parse_from(["tip-time"]).unwrap();
        assert_eq!(config.overrides(), ConfigOverrides::default());
    }

    #[test]
    fn test_invalid_percentage_flag() {
        assert!(CliConfig::try_parse_from(["tip-time", "--tip", "25"]).is_err());
    }

    #[test]
    fn test_policy_flag() {
        let config =
            CliConfig::try_parse_from(["tip-time", "--on-invalid", "reset-to-zero"]).unwrap();
        assert_eq!(config.overrides().on_invalid, Some(InvalidInputPolicy::ResetToZero));
    }
}
