use crate::adapters::currency::supported_locales;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TipError {
    #[error("Invalid cost of service: {value:?} ({reason})")]
    InvalidCost { value: String, reason: String },

    #[error("Invalid tip percentage: {value:?}")]
    InvalidPercentage { value: String },

    #[error("Unsupported locale: {locale}")]
    UnsupportedLocale { locale: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid config value for {field}: {value:?} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TipError {
    pub fn invalid_cost(value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidCost {
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidCost { .. } | Self::InvalidPercentage { .. } => ErrorCategory::Input,
            Self::UnsupportedLocale { .. }
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnsupportedLocale { .. } => ErrorSeverity::Low,
            Self::InvalidCost { .. } | Self::InvalidPercentage { .. } => ErrorSeverity::Medium,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            Self::IoError(_) | Self::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    /// Short message suitable for the result line of the screen.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidCost { value, .. } => format!("Invalid cost of service: {:?}", value),
            Self::InvalidPercentage { value } => {
                format!("Tip percentage must be 15, 18 or 20 (got {:?})", value)
            }
            Self::UnsupportedLocale { locale } => {
                format!("Locale {} is not supported, using en-US", locale)
            }
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value {} is invalid: {}", field, reason)
            }
            Self::IoError(e) => format!("Could not read input: {}", e),
            Self::SerializationError(e) => format!("Could not encode output: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::InvalidCost { .. } => "Enter the cost as a plain number, e.g. 42.50".to_string(),
            Self::InvalidPercentage { .. } => "Pick one of 15, 18 or 20".to_string(),
            Self::UnsupportedLocale { .. } => {
                format!("Use one of {}", supported_locales().collect::<Vec<_>>().join(", "))
            }
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Check the config file path and its TOML syntax".to_string()
            }
            Self::IoError(_) => "Check that stdin is readable".to_string(),
            Self::SerializationError(_) => "Retry without --json".to_string(),
        }
    }

    /// Process exit code for the one-shot command.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 1,
            ErrorCategory::Configuration => match self {
                Self::ConfigError { .. } => 2,
                _ => 1,
            },
            ErrorCategory::System => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, TipError>;
