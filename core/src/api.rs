//! Wire types for the airdrop backend and the token lookup.
//!
//! All JSON is camelCase on the wire. The airdrop endpoint contract:
//!
//! ```text
//! POST {API_BASE}/api/solana/airdrop
//! Authorization: Bearer <token>
//! { "mintAddress": "...", "recipients": [{ "address": "...", "amount": 1.5 }] }
//!
//! 2xx   -> { "signature": "...", "recipientCount": 2 }
//! error -> { "error": "..." }
//! ```

use serde::{Deserialize, Serialize};

use crate::recipient::Recipient;

// =============================================================================
// Airdrop request
// =============================================================================

/// One recipient as submitted to the backend: parsed amount, not the
/// raw input string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AirdropRecipient {
    pub address: String,
    pub amount: f64,
}

/// Body of the airdrop submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirdropRequest {
    /// Mint of the SPL token being distributed.
    pub mint_address: String,
    pub recipients: Vec<AirdropRecipient>,
}

impl AirdropRequest {
    /// Build the outbound payload from the current list.
    ///
    /// Only rows with `valid == true` are included; their amounts are
    /// guaranteed parsable by the validation rules.
    pub fn from_rows(mint_address: impl Into<String>, rows: &[Recipient]) -> Self {
        let recipients = rows
            .iter()
            .filter(|row| row.valid)
            .map(|row| AirdropRecipient {
                address: row.address.clone(),
                amount: row.amount.trim().parse::<f64>().unwrap_or(0.0),
            })
            .collect();

        Self {
            mint_address: mint_address.into(),
            recipients,
        }
    }
}

// =============================================================================
// Responses
// =============================================================================

/// Successful airdrop response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirdropResponse {
    /// Transaction signature of the batch send.
    pub signature: String,
    pub recipient_count: usize,
}

/// Error body returned on non-2xx responses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

// =============================================================================
// Token lookup
// =============================================================================

/// Metadata and balance for the token under the current mint address.
///
/// This is the whole contract of the token lookup service: mint
/// address in, `TokenInfo` out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Connected wallet's balance of this token, in display units.
    pub balance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_ADDR: &str = "11111111111111111111111111111111";
    const MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

    #[test]
    fn test_request_includes_only_valid_rows() {
        let rows = vec![
            Recipient::from_fields(GOOD_ADDR, "100"),
            Recipient::from_fields("bad", "50"),
            Recipient::from_fields(GOOD_ADDR, "abc"),
            Recipient::from_fields(GOOD_ADDR, "0.25"),
        ];

        let request = AirdropRequest::from_rows(MINT, &rows);
        assert_eq!(request.mint_address, MINT);
        assert_eq!(request.recipients.len(), 2);
        assert_eq!(request.recipients[0].amount, 100.0);
        assert_eq!(request.recipients[1].amount, 0.25);
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let request = AirdropRequest {
            mint_address: MINT.to_string(),
            recipients: vec![AirdropRecipient {
                address: GOOD_ADDR.to_string(),
                amount: 1.5,
            }],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["mintAddress"], MINT);
        assert_eq!(json["recipients"][0]["address"], GOOD_ADDR);
        assert_eq!(json["recipients"][0]["amount"], 1.5);
    }

    #[test]
    fn test_success_response_deserialization() {
        let json = r#"{ "signature": "abc123", "recipientCount": 2 }"#;
        let response: AirdropResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.signature, "abc123");
        assert_eq!(response.recipient_count, 2);
    }

    #[test]
    fn test_error_response_deserialization() {
        let json = r#"{ "error": "insufficient funds" }"#;
        let response: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.error, "insufficient funds");
    }

    #[test]
    fn test_token_info_round_trip() {
        let info = TokenInfo {
            name: "USD Coin".into(),
            symbol: "USDC".into(),
            decimals: 6,
            balance: 1234.5,
        };
        let json = serde_json::to_string(&info).unwrap();
        let back: TokenInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, info);
    }
}
