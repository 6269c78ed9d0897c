use crate::domain::model::{InvalidInputPolicy, TipPercentage};
use rust_decimal::Decimal;

/// Renders an amount the way the active locale writes money.
pub trait CurrencyFormatter {
    fn format(&self, amount: Decimal) -> String;
}

/// Resolved settings the screen starts from.
pub trait ConfigProvider {
    fn default_percentage(&self) -> TipPercentage;
    fn default_round_up(&self) -> bool;
    fn locale(&self) -> Option<&str>;
    fn invalid_input_policy(&self) -> InvalidInputPolicy;
}
