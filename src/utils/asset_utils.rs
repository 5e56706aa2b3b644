//! Asset logo resolution

use crate::types::KnownAssets;

const DEX_ASSETS_BASE: &str =
    "https://raw.githubusercontent.com/centfinance/cent.dex_assets/master/assets";

const TRUSTWALLET_ASSETS_BASE: &str =
    "https://raw.githubusercontent.com/trustwallet/assets/master/blockchains/ethereum/assets";

/// Logo URL for a token address
///
/// Known assets resolve to the exchange's own repository (lowercase file
/// name). Everything else falls back to the Trust Wallet repository with
/// the address as given, which may 404 for unlisted tokens.
pub fn asset_logo(known: &KnownAssets, address: &str) -> String {
    if known.contains(address) {
        return format!("{}/{}.png", DEX_ASSETS_BASE, address.to_lowercase());
    }
    format!("{}/{}/logo.png", TRUSTWALLET_ASSETS_BASE, address)
}
