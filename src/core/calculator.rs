use crate::domain::model::{BillInput, TipPercentage, TipResult};
use crate::utils::error::{Result, TipError};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Stateless tip computation. Every trigger re-runs it from scratch.
#[derive(Debug, Clone, Copy, Default)]
pub struct TipCalculator;

impl TipCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Computes the tip for `cost_text` at the given percentage.
    ///
    /// Empty text counts as a zero bill. Text that is not a non-negative
    /// decimal number is rejected with [`TipError::InvalidCost`].
    pub fn calculate(
        &self,
        cost_text: &str,
        percentage: TipPercentage,
        round_up: bool,
    ) -> Result<Decimal> {
        let cost = parse_cost(cost_text)?;

        if cost.is_zero() {
            tracing::debug!("Zero cost, tip is zero");
            return Ok(Decimal::ZERO);
        }

        let raw = percentage
            .rate()
            .checked_mul(cost)
            .ok_or_else(|| TipError::invalid_cost(cost_text, "amount is too large"))?;

        let tip = if round_up { raw.ceil() } else { raw };

        tracing::debug!(%cost, %percentage, round_up, %raw, %tip, "Calculated tip");
        Ok(tip)
    }

    pub fn calculate_input(&self, input: &BillInput) -> Result<TipResult> {
        let tip_amount = self.calculate(&input.cost_text, input.percentage, input.round_up)?;
        Ok(TipResult { tip_amount })
    }
}

/// Parses the cost field. Surrounding whitespace is ignored and empty input is zero.
pub fn parse_cost(text: &str) -> Result<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }

    if !trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.' || c == '-' || c == '+')
    {
        return Err(TipError::invalid_cost(text, "not a number"));
    }

    let cost = Decimal::from_str(trimmed)
        .map_err(|e| TipError::invalid_cost(text, e.to_string()))?;

    // Decimal silently rounds past 28 fractional digits
    let fraction_digits = trimmed.split_once('.').map_or(0, |(_, f)| f.len());
    if (cost.scale() as usize) < fraction_digits {
        return Err(TipError::invalid_cost(text, "too many decimal places"));
    }

    if cost.is_sign_negative() && !cost.is_zero() {
        return Err(TipError::invalid_cost(text, "cost cannot be negative"));
    }

    // "-0" parses with the sign bit set
    Ok(cost.abs())
}
