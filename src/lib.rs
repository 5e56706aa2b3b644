//! # DEX Front-End Helpers
//!
//! Small, mostly pure helpers used by the exchange web front end.
//!
//! ## Core Features
//!
//! - **Display**
//!   - Address and transaction hash truncation
//!   - en-US date rendering
//!
//! - **Validation and Amounts**
//!   - EIP-55 address validation
//!   - Exact decimal scaling by powers of ten
//!
//! - **Links**
//!   - Block explorer links for transactions and accounts
//!   - Pool UI links
//!   - Token logo URLs
//!
//! - **Diagnostics**
//!   - Replay of failed contract calls from a throwaway account
//!   - Revert reason decoding
//!
//! ## Features
//!
//! - `rustls-tls`: Uses rustls as the TLS implementation instead of native-tls (OpenSSL).
//!
//! ## Example Usage
//!
//! ```rust
//! use dex_helpers::{asset_logo, etherscan_link, format_address_default, is_address, HelperConfig, KnownAssets};
//!
//! # fn example() -> Result<(), dex_helpers::HelperError> {
//! let config = HelperConfig::new(42220, "");
//! let network = config.network()?;
//!
//! let token = "0x6B175474E89094C44Da98b954EedeAC495271d0F";
//! assert!(is_address(token));
//! println!("{}", format_address_default(token));
//! println!("{}", etherscan_link(network, "0x1234"));
//! println!("{}", asset_logo(&KnownAssets::default(), token));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Module Structure
//!
//! - `config`: Chain id and key configuration
//! - `types`: Networks, known assets, call overrides and revert reports
//! - `errors`: Error type
//! - `utils`: The helper functions

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export the helper surface
pub use config::HelperConfig;
pub use errors::HelperError;
pub use types::{CallOverrides, KnownAssets, Network, RevertReport};
pub use utils::{
    address_utils::{get_address, is_address},
    asset_utils::asset_logo,
    decimal_utils::scale,
    format_utils::{format_address, format_address_default, format_date, format_tx_hash, format_tx_hash_default},
    link_utils::{account_link, etherscan_link, pool_link},
    revert_utils::log_reverted_tx,
    time_utils::sleep,
};
