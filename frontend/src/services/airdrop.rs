//! HTTP service for submitting the airdrop to the backend.

use gloo_net::http::Request;
use massdrop_core::{AirdropRequest, AirdropResponse, ErrorResponse};

use crate::config::AppConfig;

/// Submit the batch send.
///
/// `POST {api_base}/api/solana/airdrop` with a JSON body of the mint
/// address and the valid recipients. A non-2xx response is mapped to
/// the server-provided `error` message when the body parses, and to a
/// generic status message otherwise.
pub async fn submit_airdrop(
    config: &AppConfig,
    request: &AirdropRequest,
) -> Result<AirdropResponse, String> {
    let url = format!("{}/api/solana/airdrop", config.api_base);

    let mut builder = Request::post(&url);
    if let Some(token) = &config.auth_token {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }

    let response = builder
        .json(request)
        .map_err(|e| format!("Failed to build request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("HTTP request failed: {e}"))?;

    if !response.ok() {
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => format!("Airdrop failed with status {}", response.status()),
        };
        return Err(message);
    }

    response
        .json::<AirdropResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))
}
