//! Conversions between smallest-unit integer amounts and display strings.
//!
//! Native-currency balances arrive as smallest-unit integer strings whose
//! values exceed what an f64 can represent exactly, so all division here is
//! done in u128 integer arithmetic rather than floating point.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{DISPLAY_DECIMAL_PRECISION, MAX_UNIT_DECIMALS};
use crate::errors::ValidationError;

/// Converts a smallest-unit integer string into a fixed two-decimal display
/// string, dividing by `10^decimals` and rounding half-up.
///
/// An empty or `"0"` input is a conventional "no data yet" state and renders
/// as `"0.00"` rather than an error.
pub fn to_display(smallest_unit: &str, decimals: u32) -> Result<String, ValidationError> {
    let trimmed = smallest_unit.trim();
    if trimmed.is_empty() || trimmed == "0" {
        return Ok("0.00".to_string());
    }

    let value: u128 = trimmed
        .parse()
        .map_err(|_| ValidationError::InvalidAmount(format!("'{trimmed}' is not an integer")))?;
    let divisor = unit_divisor(decimals)?;

    // Scale by 10^2 before dividing so the two display decimals survive the
    // integer division, then round half-up on the remainder.
    let scale = 10u128.pow(DISPLAY_DECIMAL_PRECISION);
    let scaled = value
        .checked_mul(scale)
        .ok_or_else(|| ValidationError::InvalidAmount(format!("'{trimmed}' is too large")))?;
    let mut quotient = scaled / divisor;
    let remainder = scaled % divisor;
    if remainder.checked_mul(2).is_some_and(|doubled| doubled >= divisor) {
        quotient += 1;
    }

    Ok(format!("{}.{:02}", quotient / scale, quotient % scale))
}

/// Converts a decimal display string into a smallest-unit integer string,
/// multiplying by `10^decimals`. The inverse of [`to_display`].
///
/// Used before dispatching transfer-style amounts, so unlike [`to_display`]
/// a zero, negative, or non-numeric input is rejected.
pub fn to_smallest_unit(display_value: &str, decimals: u32) -> Result<String, ValidationError> {
    let trimmed = display_value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidAmount(
            "amount is required".to_string(),
        ));
    }

    let amount = Decimal::from_str(trimmed)
        .map_err(|_| ValidationError::InvalidAmount(format!("'{trimmed}' is not a number")))?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::InvalidAmount(
            "amount must be greater than zero".to_string(),
        ));
    }

    let factor = Decimal::from_i128_with_scale(unit_divisor(decimals)? as i128, 0);
    let scaled = amount
        .checked_mul(factor)
        .ok_or_else(|| ValidationError::InvalidAmount(format!("'{trimmed}' is too large")))?;

    // Sub-smallest-unit digits cannot be transferred; round them half-up.
    let rounded = scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    Ok(rounded.normalize().to_string())
}

fn unit_divisor(decimals: u32) -> Result<u128, ValidationError> {
    if decimals > MAX_UNIT_DECIMALS {
        return Err(ValidationError::InvalidAmount(format!(
            "unsupported unit precision: {decimals}"
        )));
    }
    Ok(10u128.pow(decimals))
}
