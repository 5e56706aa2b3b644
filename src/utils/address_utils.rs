//! Address normalization and validation
//!
//! Follows the EIP-55 rules used by wallets:
//! - An optional `0x` prefix followed by exactly 40 hex digits
//! - All-lowercase or all-uppercase digits carry no checksum
//! - Mixed case must match the EIP-55 checksum exactly

use std::str::FromStr;

use alloy::primitives::Address;

use crate::errors::HelperError;

/// Normalize a string into an [`Address`]
///
/// # Returns
/// * `Ok(Address)` - The parsed address
/// * `Err(HelperError::InvalidAddress)` - Malformed hex, wrong length or bad checksum
pub fn get_address(value: &str) -> Result<Address, HelperError> {
    let invalid = || HelperError::InvalidAddress(value.to_string());

    let digits = value.strip_prefix("0x").unwrap_or(value);
    if digits.len() != 40 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let address = Address::from_str(digits).map_err(|_| invalid())?;

    let has_lower = digits.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = digits.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper && address.to_checksum(None)[2..] != *digits {
        return Err(invalid());
    }

    Ok(address)
}

/// Whether `value` is a valid address
///
/// Every normalization failure is reported as `false`.
pub fn is_address(value: &str) -> bool {
    get_address(value).is_ok()
}
