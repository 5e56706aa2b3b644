//! Display formatting for addresses, hashes and timestamps

use chrono::{DateTime, Local, TimeZone};

use crate::errors::HelperError;

/// Default number of visible hex digits for an address
pub const DEFAULT_ADDRESS_LENGTH: usize = 8;

/// Default number of visible hex digits for a transaction hash
pub const DEFAULT_HASH_LENGTH: usize = 16;

/// Length of a `0x`-prefixed 20-byte address
const ADDRESS_HEX_LEN: usize = 42;

/// Length of a `0x`-prefixed 32-byte hash
const HASH_HEX_LEN: usize = 66;

/// en-US short date with numeric day, year, hour and minute
const DATE_FORMAT: &str = "%b %-d, %Y, %-I:%M %p";

fn ellipsize(value: &str, length: usize, full_len: usize) -> String {
    let head = 2 + length / 2;
    let prefix = value.get(..head).unwrap_or(value);
    // A tail longer than the fixed width counts back from the end of the input.
    let start = match full_len.checked_sub(length / 2) {
        Some(start) => start,
        None => value.len().saturating_sub(length / 2 - full_len),
    };
    let suffix = value.get(start..).unwrap_or("");
    format!("{}…{}", prefix, suffix)
}

/// Shorten an address to `0x1234…abcd`
///
/// Keeps the first `2 + length / 2` characters and everything from offset
/// `42 - length / 2`. The input is not validated: a string shorter than an
/// address yields a short or empty suffix.
///
/// # Example
/// ```
/// use dex_helpers::utils::format_utils::format_address;
/// let short = format_address("0xC255fC198eEdAC7AF8aF0f6e0ca781794B094A61", 8);
/// assert_eq!(short, "0xC255…4A61");
/// ```
pub fn format_address(address: &str, length: usize) -> String {
    ellipsize(address, length, ADDRESS_HEX_LEN)
}

/// [`format_address`] with [`DEFAULT_ADDRESS_LENGTH`]
pub fn format_address_default(address: &str) -> String {
    format_address(address, DEFAULT_ADDRESS_LENGTH)
}

/// Shorten a transaction hash to `0x12345678…abcdef01`
///
/// Same rules as [`format_address`] with the hash offset of 66.
pub fn format_tx_hash(tx_hash: &str, length: usize) -> String {
    ellipsize(tx_hash, length, HASH_HEX_LEN)
}

/// [`format_tx_hash`] with [`DEFAULT_HASH_LENGTH`]
pub fn format_tx_hash_default(tx_hash: &str) -> String {
    format_tx_hash(tx_hash, DEFAULT_HASH_LENGTH)
}

/// Format a millisecond Unix timestamp in the local timezone
///
/// Output looks like `Jan 5, 2021, 3:07 PM`.
pub fn format_date(timestamp_ms: i64) -> Result<String, HelperError> {
    format_date_in(timestamp_ms, &Local)
}

/// Format a millisecond Unix timestamp in the given timezone
pub fn format_date_in<Tz>(timestamp_ms: i64, tz: &Tz) -> Result<String, HelperError>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let date: DateTime<Tz> = tz
        .timestamp_millis_opt(timestamp_ms)
        .single()
        .ok_or(HelperError::InvalidTimestamp(timestamp_ms))?;
    Ok(date.format(DATE_FORMAT).to_string())
}
