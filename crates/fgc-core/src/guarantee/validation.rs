use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::FgcError;
use crate::types::{InvestmentAmount, MAX_INVESTMENT_AMOUNT};
use crate::FgcResult;

/// Parse raw user text into a validated investment amount.
///
/// Accepts plain (`150000.75`) and scientific (`1.5e5`) notation with
/// surrounding whitespace. Empty, non-numeric, zero, negative and
/// out-of-range input all fail with [`FgcError::InvalidAmount`].
pub fn parse_investment_amount(raw: &str) -> FgcResult<InvestmentAmount> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FgcError::invalid_amount(raw, "An amount is required"));
    }

    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| FgcError::invalid_amount(raw, "Not a valid number"))?;

    if value <= Decimal::ZERO {
        return Err(FgcError::invalid_amount(raw, "Must be greater than zero"));
    }
    if value > MAX_INVESTMENT_AMOUNT {
        return Err(FgcError::invalid_amount(
            raw,
            format!("Must not exceed {MAX_INVESTMENT_AMOUNT}"),
        ));
    }

    InvestmentAmount::new(value)
}
