//! Common types used across the frontend application.
//!
//! The domain types (recipients, wire formats) live in
//! `massdrop-core`; this module only holds UI-side state.

// =============================================================================
// Submission State
// =============================================================================

/// State of the airdrop submission.
///
/// Transitions: `Idle -> Sending -> Success | Failed`, and back to
/// `Idle` on the next edit to the form.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitState {
    /// Nothing in flight, no result to show.
    Idle,
    /// Request in flight; the send control stays disabled.
    Sending,
    /// Backend confirmed the batch send.
    Success {
        signature: String,
        recipient_count: usize,
    },
    /// Backend rejected the request or the call failed.
    Failed(String),
}

impl SubmitState {
    pub fn is_sending(&self) -> bool {
        matches!(self, SubmitState::Sending)
    }
}

// =============================================================================
// Display helpers
// =============================================================================

/// Shorten a transaction signature for display: first 8 and last 8
/// characters with an ellipsis in between.
///
/// Signatures are base58 and therefore ASCII, but the cut is done on
/// characters so arbitrary input cannot panic on a byte boundary.
pub fn short_signature(signature: &str) -> String {
    const EDGE: usize = 8;

    let chars: Vec<char> = signature.chars().collect();
    if chars.len() <= 20 {
        return signature.to_string();
    }

    let head: String = chars[..EDGE].iter().collect();
    let tail: String = chars[chars.len() - EDGE..].iter().collect();
    format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_signature_truncates() {
        let sig = "5eykt4UsFv8P8NJdTREpY1vzqKqZKvdpKuc147dw2N9d5VLsLCyVkaVSJFZ7WgnkXYjBrrJQ9WEX";
        let short = short_signature(sig);
        assert!(short.starts_with("5eykt4Us"));
        assert!(short.ends_with("Q9WEX"));
        assert!(short.len() < sig.len());
    }

    #[test]
    fn test_short_signature_keeps_short_input() {
        assert_eq!(short_signature("abc123"), "abc123");
    }

    #[test]
    fn test_short_signature_survives_multibyte_input() {
        // Not a real signature, but the helper must not panic on a
        // char boundary if the backend ever returns garbage.
        let garbage = "ééééééééééééééééééééééééééééééé";
        let short = short_signature(garbage);
        assert!(short.starts_with("éééééééé"));
        assert!(short.ends_with("éééééééé"));
    }

    #[test]
    fn test_sending_flag() {
        assert!(SubmitState::Sending.is_sending());
        assert!(!SubmitState::Idle.is_sending());
        assert!(!SubmitState::Failed("x".into()).is_sending());
    }
}
