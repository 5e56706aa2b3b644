//! Revert data decoding
//!
//! Turns the raw bytes a node returns for a reverted call into a
//! readable reason. Two standard encodings are recognized:
//! - `Error(string)` from `require` / `revert` with a message
//! - `Panic(uint256)` from failed assertions and checked arithmetic

use alloy::{
    primitives::U256,
    sol_types::{Panic, Revert, SolError},
};

/// Human-readable description of a Solidity panic code
fn describe_panic(code: U256) -> String {
    let message = match code.saturating_to::<u64>() {
        0x00 => "Generic compiler panic",
        0x01 => "Assertion failed",
        0x11 => "Arithmetic overflow",
        0x12 => "Division by zero",
        0x21 => "Invalid enum value",
        0x22 => "Invalid storage byte array access",
        0x31 => "Pop on empty array",
        0x32 => "Array index out of bounds",
        0x41 => "Out of memory",
        0x51 => "Call to zero-initialized function",
        _ => return format!("Panic: Unknown code (0x{:x})", code),
    };
    format!("Panic: {}", message)
}

/// Decode revert data into a reason string
///
/// # Returns
/// * `Some(String)` - The `Error(string)` message or a panic description
/// * `None` - Empty data, custom errors, or undecodable payloads
pub fn decode_revert_reason(output: &[u8]) -> Option<String> {
    let selector = output.get(..4)?;
    if selector == Revert::SELECTOR {
        return Revert::abi_decode(output).ok().map(|revert| revert.reason);
    }
    if selector == Panic::SELECTOR {
        return Panic::abi_decode(output)
            .ok()
            .map(|panic| describe_panic(panic.code));
    }
    None
}
