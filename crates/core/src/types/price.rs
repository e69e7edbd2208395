//! Decimal price helpers.
//!
//! Catalog prices travel as numeric strings (`"25.00"`) and are held as
//! [`Decimal`] so that comparisons and cart totals never go through floats.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

/// A price string that could not be parsed as a decimal amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid price '{input}': {reason}")]
pub struct PriceError {
    pub input: String,
    pub reason: String,
}

/// Parse a user- or wire-supplied amount such as `"25"`, `"25.5"` or `"$25.50"`.
///
/// Negative amounts are rejected.
///
/// # Errors
///
/// Returns `PriceError` if the input is not a non-negative decimal number.
pub fn parse_amount(input: &str) -> Result<Decimal, PriceError> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('$').unwrap_or(trimmed);

    let amount = Decimal::from_str(digits).map_err(|e| PriceError {
        input: input.to_string(),
        reason: e.to_string(),
    })?;

    if amount.is_sign_negative() {
        return Err(PriceError {
            input: input.to_string(),
            reason: "must not be negative".to_string(),
        });
    }

    Ok(amount)
}

/// Format an amount for display (e.g., "$19.99").
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}
