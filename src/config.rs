//! Front-end configuration
//!
//! Holds the chain id the front end is deployed against and the
//! secret key handed in by the surrounding application.

use std::env;

use serde::Deserialize;

use crate::{errors::HelperError, types::Network};

/// Chain id used when `CHAIN_ID` is not set
pub const DEFAULT_CHAIN_ID: u64 = 1;

/// Read-only configuration, built once at startup
#[derive(Clone, Deserialize)]
pub struct HelperConfig {
    /// Chain id of the target network
    pub chain_id: u64,
    /// Secret key provided by the host application
    pub eth_key: String,
}

fn parse_chain_id(raw: Option<String>) -> Result<u64, HelperError> {
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| HelperError::Config(format!("CHAIN_ID is not an integer: {}", raw))),
        None => Ok(DEFAULT_CHAIN_ID),
    }
}

impl HelperConfig {
    pub fn new(chain_id: u64, eth_key: impl Into<String>) -> Self {
        Self {
            chain_id,
            eth_key: eth_key.into(),
        }
    }

    /// Load from `CHAIN_ID` and `ETH_KEY`
    ///
    /// `CHAIN_ID` defaults to mainnet; `ETH_KEY` may be empty.
    pub fn from_env() -> Result<Self, HelperError> {
        let chain_id = parse_chain_id(env::var("CHAIN_ID").ok())?;
        let eth_key = env::var("ETH_KEY").unwrap_or_default();

        log::debug!("Loaded helper config for chain id {}", chain_id);
        Ok(Self { chain_id, eth_key })
    }

    /// Resolve the configured chain id
    pub fn network(&self) -> Result<Network, HelperError> {
        Network::try_from(self.chain_id)
    }
}

// Keeps the key out of logs.
impl std::fmt::Debug for HelperConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HelperConfig")
            .field("chain_id", &self.chain_id)
            .field("eth_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_resolution() {
        assert_eq!(HelperConfig::new(100, "").network(), Ok(Network::Xdai));
        assert_eq!(
            HelperConfig::new(1337, "").network(),
            Err(HelperError::UnsupportedNetwork(1337))
        );
    }

    #[test]
    fn test_parse_chain_id() {
        assert_eq!(parse_chain_id(None), Ok(DEFAULT_CHAIN_ID));
        assert_eq!(parse_chain_id(Some(" 42220 ".to_string())), Ok(42220));
        assert!(matches!(
            parse_chain_id(Some("celo".to_string())),
            Err(HelperError::Config(_))
        ));
        assert!(matches!(
            parse_chain_id(Some("-1".to_string())),
            Err(HelperError::Config(_))
        ));
    }

    // The only test touching CHAIN_ID, so it does not race other tests.
    #[test]
    fn test_from_env() {
        env::remove_var("CHAIN_ID");
        assert_eq!(HelperConfig::from_env().unwrap().chain_id, DEFAULT_CHAIN_ID);

        env::set_var("CHAIN_ID", "100");
        assert_eq!(HelperConfig::from_env().unwrap().network(), Ok(Network::Xdai));

        env::set_var("CHAIN_ID", "xdai");
        assert!(matches!(HelperConfig::from_env(), Err(HelperError::Config(_))));

        env::remove_var("CHAIN_ID");
    }

    #[test]
    fn test_deserialize() {
        let config: HelperConfig =
            serde_json::from_str(r#"{"chain_id": 42220, "eth_key": "secret"}"#).unwrap();
        assert_eq!(config.network(), Ok(Network::Celo));
        assert_eq!(config.eth_key, "secret");
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = HelperConfig::new(1, "super-secret");
        let printed = format!("{:?}", config);
        assert!(printed.contains("<redacted>"));
        assert!(!printed.contains("super-secret"));
    }
}
