//! Core types for the front-end helpers
//!
//! This module defines the data structures shared by the helpers:
//! - Supported networks and their chain ids
//! - The known-assets list used for logo resolution
//! - Call overrides and revert reports for diagnostic replays

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

pub use alloy::primitives::{Address, Bytes, U256};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::errors::HelperError;

/// Networks the exchange front end is deployed on
///
/// Every explorer table is an exhaustive `match` over this enum, so a
/// new variant does not compile until each table has an entry for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    /// Ethereum mainnet
    Mainnet,
    /// Kovan testnet
    Kovan,
    /// POA Sokol testnet
    Sokol,
    /// xDai chain
    Xdai,
    /// Celo Alfajores testnet
    Alfajores,
    /// Celo mainnet
    Celo,
}

impl Network {
    /// All supported networks, in chain id order
    pub const ALL: [Network; 6] = [
        Network::Mainnet,
        Network::Kovan,
        Network::Sokol,
        Network::Xdai,
        Network::Alfajores,
        Network::Celo,
    ];

    /// Chain id of the network
    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Mainnet => 1,
            Network::Kovan => 42,
            Network::Sokol => 77,
            Network::Xdai => 100,
            Network::Alfajores => 44787,
            Network::Celo => 42220,
        }
    }
}

impl TryFrom<u64> for Network {
    type Error = HelperError;

    fn try_from(chain_id: u64) -> std::result::Result<Self, Self::Error> {
        Network::ALL
            .into_iter()
            .find(|network| network.chain_id() == chain_id)
            .ok_or(HelperError::UnsupportedNetwork(chain_id))
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Network::Mainnet => "mainnet",
            Network::Kovan => "kovan",
            Network::Sokol => "sokol",
            Network::Xdai => "xdai",
            Network::Alfajores => "alfajores",
            Network::Celo => "celo",
        };
        write!(f, "{}", name)
    }
}

/// Addresses with a dedicated logo in the exchange's asset repository
///
/// Entries are stored lowercase; lookups are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownAssets {
    addresses: HashSet<String>,
}

impl KnownAssets {
    /// Build from any list of address strings
    pub fn new<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            addresses: addresses
                .into_iter()
                .map(|address| address.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Parse a JSON array of address strings
    pub fn from_json(json: &str) -> Result<Self> {
        let addresses: Vec<String> =
            serde_json::from_str(json).context("Known assets list must be a JSON array of strings")?;
        Ok(Self::new(addresses))
    }

    /// Load a JSON array of address strings from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read known assets from {}", path.display()))?;
        Self::from_json(&json)
    }

    /// Case-insensitive membership test
    pub fn contains(&self, address: &str) -> bool {
        self.addresses.contains(&address.to_lowercase())
    }

    /// Number of distinct addresses
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    /// Whether no address is known
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

/// Transaction overrides applied to a replayed contract call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallOverrides {
    /// Gas price in wei
    pub gas_price: Option<u128>,
    /// Gas limit
    pub gas_limit: Option<u64>,
    /// Native token value to send
    pub value: Option<U256>,
}

/// Outcome of a diagnostic revert replay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevertReport {
    /// Account whose transaction originally failed
    pub sender: String,
    /// Contract that was called
    pub contract: Address,
    /// Method name that was replayed
    pub action: String,
    /// Overrides of the original call, as given by the caller
    pub overrides: CallOverrides,
    /// Decoded revert reason, if the revert data was recognized
    pub reason: Option<String>,
    /// Raw revert data returned by the node
    pub raw: Option<Bytes>,
}

impl RevertReport {
    /// Whether the replay produced revert data
    pub fn reverted(&self) -> bool {
        self.raw.is_some() || self.reason.is_some()
    }
}
