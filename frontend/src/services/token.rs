//! Token metadata and balance lookup.
//!
//! The contract is mint address in, [`TokenInfo`] out. The backend
//! resolves the mint against the ledger and reports the connected
//! wallet's balance in display units.

use gloo_net::http::Request;
use massdrop_core::TokenInfo;

use crate::config::AppConfig;

/// Fetch name, symbol, decimals and wallet balance for a mint.
///
/// `GET {api_base}/api/solana/token/{mint}`.
pub async fn fetch_token_info(config: &AppConfig, mint: &str) -> Result<TokenInfo, String> {
    let url = format!("{}/api/solana/token/{}", config.api_base, mint);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("HTTP request failed: {e}"))?;

    if !response.ok() {
        return Err(format!("Token lookup failed ({})", response.status()));
    }

    response
        .json::<TokenInfo>()
        .await
        .map_err(|e| format!("Failed to parse token info: {e}"))
}
