use crate::utils::error::TipError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt;
use std::str::FromStr;

/// The three tip options offered on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TipPercentage {
    #[default]
    Fifteen,
    Eighteen,
    Twenty,
}

impl TipPercentage {
    pub const ALL: [TipPercentage; 3] = [Self::Fifteen, Self::Eighteen, Self::Twenty];

    pub fn rate(&self) -> Decimal {
        match self {
            Self::Fifteen => dec!(0.15),
            Self::Eighteen => dec!(0.18),
            Self::Twenty => dec!(0.20),
        }
    }

    pub fn percent(&self) -> u8 {
        match self {
            Self::Fifteen => 15,
            Self::Eighteen => 18,
            Self::Twenty => 20,
        }
    }
}

impl fmt::Display for TipPercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

impl FromStr for TipPercentage {
    type Err = TipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().trim_end_matches('%').trim().to_ascii_lowercase();
        match normalized.as_str() {
            "15" | "fifteen" => Ok(Self::Fifteen),
            "18" | "eighteen" => Ok(Self::Eighteen),
            "20" | "twenty" => Ok(Self::Twenty),
            _ => Err(TipError::InvalidPercentage {
                value: s.to_string(),
            }),
        }
    }
}

/// What the screen does when the cost field does not hold a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidInputPolicy {
    /// Leave the tip uncomputed and show a validation message.
    #[default]
    Reject,
    /// Show a zero tip alongside the validation message.
    ResetToZero,
}

impl InvalidInputPolicy {
    pub const NAMES: [&'static str; 2] = ["reject", "reset-to-zero"];
}

impl FromStr for InvalidInputPolicy {
    type Err = TipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "reset-to-zero" | "reset_to_zero" | "zero" => Ok(Self::ResetToZero),
            other => Err(TipError::InvalidConfigValueError {
                field: "on_invalid_input".to_string(),
                value: other.to_string(),
                reason: format!("Valid values: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

/// Snapshot of the form taken when a calculation is triggered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BillInput {
    pub cost_text: String,
    pub percentage: TipPercentage,
    pub round_up: bool,
}

impl BillInput {
    pub fn new(cost_text: impl Into<String>, percentage: TipPercentage, round_up: bool) -> Self {
        Self {
            cost_text: cost_text.into(),
            percentage,
            round_up,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TipResult {
    pub tip_amount: Decimal,
}
