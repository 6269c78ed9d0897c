pub mod calculator;

pub use crate::domain::model::{BillInput, InvalidInputPolicy, TipPercentage, TipResult};
pub use crate::domain::ports::{ConfigProvider, CurrencyFormatter};
pub use crate::utils::error::Result;
