//! Block explorer and pool links
//!
//! Links are keyed by [`Network`]. The typed builders cannot fail; the
//! `*_for_chain` variants resolve a raw chain id first and report
//! [`HelperError::UnsupportedNetwork`] for ids without an explorer.

use crate::{errors::HelperError, types::Network};

/// Explorer root for transactions and accounts
fn explorer_base(network: Network) -> &'static str {
    match network {
        Network::Mainnet => "https://etherscan.io",
        Network::Kovan => "https://kovan.etherscan.io",
        Network::Sokol => "https://blockscout.com/poa/sokol",
        Network::Xdai => "https://blockscout.com/xdai/mainnet",
        Network::Alfajores => "https://alfajores-blockscout.celo-testnet.org",
        Network::Celo => "https://explorer.celo.org",
    }
}

/// Pool UI host
fn pool_host(network: Network) -> &'static str {
    match network {
        Network::Mainnet => "pools.symmetric.exchange",
        Network::Kovan => "kovan-pools.symmetric.exchange",
        Network::Sokol => "sokol-pools.symmetric.exchange",
        Network::Xdai => "xdai-pools.symmetric.exchange",
        Network::Alfajores => "alfajores-pools.symmetric.exchange",
        Network::Celo => "celo-pools.symmetric.exchange",
    }
}

/// Explorer link for a transaction hash
///
/// # Example
/// ```
/// use dex_helpers::{types::Network, utils::link_utils::etherscan_link};
/// assert_eq!(etherscan_link(Network::Mainnet, "0xabc"), "https://etherscan.io/tx/0xabc");
/// ```
pub fn etherscan_link(network: Network, tx_hash: &str) -> String {
    format!("{}/tx/{}", explorer_base(network), tx_hash)
}

/// Explorer link for an account or contract address
pub fn account_link(network: Network, address: &str) -> String {
    format!("{}/address/{}", explorer_base(network), address)
}

/// Pool UI link for a pool id
pub fn pool_link(network: Network, pool: &str) -> String {
    format!("https://{}/#/pool/{}", pool_host(network), pool)
}

/// [`etherscan_link`] for a raw chain id
pub fn etherscan_link_for_chain(chain_id: u64, tx_hash: &str) -> Result<String, HelperError> {
    Ok(etherscan_link(Network::try_from(chain_id)?, tx_hash))
}

/// [`account_link`] for a raw chain id
pub fn account_link_for_chain(chain_id: u64, address: &str) -> Result<String, HelperError> {
    Ok(account_link(Network::try_from(chain_id)?, address))
}

/// [`pool_link`] for a raw chain id
pub fn pool_link_for_chain(chain_id: u64, pool: &str) -> Result<String, HelperError> {
    Ok(pool_link(Network::try_from(chain_id)?, pool))
}
