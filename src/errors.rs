//! Error types for the front-end helpers
//!
//! A single error enum covers every fallible helper:
//! - Address normalization errors
//! - Network resolution errors
//! - Amount and timestamp conversion errors
//! - Revert replay setup errors

use thiserror::Error;

/// Top-level error type for the helper library
///
/// Most display helpers never fail; this type is returned by the few
/// that resolve external input (chain ids, addresses, amounts) and by
/// the revert replay setup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HelperError {
    /// Input is not a 20-byte hex address or its checksum does not match
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Chain id has no entry in the explorer tables
    #[error("Unsupported network: chain id {0}")]
    UnsupportedNetwork(u64),

    /// Millisecond timestamp outside the representable date range
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(i64),

    /// Amount cannot be expressed in integral base units
    ///
    /// Raised for fractional, negative or overflowing results.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Contract call could not be encoded for replay
    #[error("ABI error: {0}")]
    Abi(String),

    /// No tokio runtime to run the replay on
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// Diagnostic signer could not be constructed
    #[error("Signer error: {0}")]
    Signer(String),

    /// Configuration value missing or malformed
    #[error("Configuration error: {0}")]
    Config(String),
}
