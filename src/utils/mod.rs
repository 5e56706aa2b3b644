//! Helper functions for DEX front ends
//!
//! # Modules
//!
//! - [`format_utils`]: Display formatting
//!   - Address and transaction hash truncation
//!   - Timestamp rendering
//!
//! - [`address_utils`]: EIP-55 address normalization and validation
//!
//! - [`decimal_utils`]: Exact decimal scaling
//!   - Powers-of-ten scaling
//!   - Conversion to and from token base units
//!
//! - [`time_utils`]: Async delay
//!
//! - [`link_utils`]: Block explorer and pool links per network
//!
//! - [`asset_utils`]: Token logo URLs
//!
//! - [`error_utils`]: Revert data decoding
//!
//! - [`revert_utils`]: Diagnostic replay of failed calls
//!
//! # Example
//!
//! ```
//! use dex_helpers::{
//!     types::Network,
//!     utils::{format_utils, link_utils},
//! };
//!
//! let hash = "0x4f9b3ab6a0ea7ff2b4e0df4fa1e3a9c1d24c6b4d8b6a2f3e5c7d9e1f2a3b4c5d";
//! let label = format_utils::format_tx_hash_default(hash);
//! let href = link_utils::etherscan_link(Network::Mainnet, hash);
//! assert_eq!(label, "0x4f9b3ab6…2a3b4c5d");
//! assert!(href.starts_with("https://etherscan.io/tx/"));
//! ```

/// Address, hash and date formatting
pub mod format_utils;

/// Address validation
pub mod address_utils;

/// Arbitrary-precision scaling
pub mod decimal_utils;

/// Async delay
pub mod time_utils;

/// Explorer links
pub mod link_utils;

/// Asset logos
pub mod asset_utils;

/// Revert reason decoding
pub mod error_utils;

/// Revert replay
pub mod revert_utils;
