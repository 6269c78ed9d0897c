pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::currency::LocaleCurrencyFormatter;
pub use crate::app::{run_session, Notification, TipScreen, UiEvent};
pub use crate::config::{toml_config::TomlConfig, ConfigOverrides, ResolvedConfig};
pub use crate::core::calculator::{parse_cost, TipCalculator};
pub use crate::domain::model::{BillInput, InvalidInputPolicy, TipPercentage, TipResult};
pub use crate::domain::ports::{ConfigProvider, CurrencyFormatter};
pub use crate::utils::error::{Result, TipError};
