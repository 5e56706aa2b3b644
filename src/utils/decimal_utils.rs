//! Exact decimal scaling for token amounts
//!
//! All arithmetic stays in arbitrary precision: scaling only moves the
//! decimal exponent, so no rounding happens at any step.

use std::str::FromStr;

use alloy::primitives::U256;
use bigdecimal::{
    num_bigint::{BigInt, Sign},
    BigDecimal, Signed,
};

use crate::errors::HelperError;

/// Multiply `input` by `10^decimal_places`
///
/// Negative `decimal_places` scales down. The resulting exponent saturates
/// at the `i64` bounds of [`BigDecimal`]'s scale instead of overflowing.
///
/// # Example
/// ```
/// use bigdecimal::BigDecimal;
/// use dex_helpers::utils::decimal_utils::scale;
/// use std::str::FromStr;
///
/// let amount = BigDecimal::from_str("1.5").unwrap();
/// assert_eq!(scale(&amount, 18), BigDecimal::from_str("1500000000000000000").unwrap());
/// ```
pub fn scale(input: &BigDecimal, decimal_places: i64) -> BigDecimal {
    let (digits, exponent) = input.as_bigint_and_exponent();
    BigDecimal::new(digits, exponent.saturating_sub(decimal_places))
}

/// Convert a human amount into integral base units
///
/// # Arguments
/// * `amount` - Token amount, e.g. `1.5`
/// * `decimals` - Token decimal places
///
/// # Returns
/// * `Ok(U256)` - Amount in the token's smallest unit
/// * `Err(HelperError::InvalidAmount)` - Fractional, negative or wider than 256 bits
pub fn to_base_units(amount: &BigDecimal, decimals: u8) -> Result<U256, HelperError> {
    let scaled = scale(amount, i64::from(decimals));
    if scaled.is_negative() {
        return Err(HelperError::InvalidAmount(format!("{} is negative", amount)));
    }
    if !scaled.is_integer() {
        return Err(HelperError::InvalidAmount(format!(
            "{} has more than {} decimal places",
            amount, decimals
        )));
    }
    let (digits, _) = scaled.with_scale(0).into_bigint_and_exponent();
    U256::from_str(&digits.to_string())
        .map_err(|_| HelperError::InvalidAmount(format!("{} does not fit in 256 bits", amount)))
}

/// Convert base units back into a human amount
pub fn from_base_units(value: U256, decimals: u8) -> BigDecimal {
    let digits = BigInt::from_bytes_be(Sign::Plus, &value.to_be_bytes::<32>());
    BigDecimal::new(digits, i64::from(decimals))
}
