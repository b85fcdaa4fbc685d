//! # Massdrop core - recipient validation and airdrop wire types
//!
//! Massdrop batch-sends an SPL token to a list of recipients. This
//! crate holds everything that is not UI: the recipient list model,
//! per-row validation, CSV import, the aggregation that gates the
//! send action, and the JSON types spoken with the airdrop backend.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐     ┌──────────────┐
//! │  CSV bytes  │────▶│   import     │────▶│  Recipient  │────▶│ AirdropRequest│
//! │  / manual   │     │ (headerless) │     │   List      │     │ (valid rows)  │
//! └─────────────┘     └──────────────┘     └─────────────┘     └──────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use massdrop_core::{parse_recipients, AirdropRequest, can_send};
//!
//! let rows = parse_recipients("11111111111111111111111111111111,100").unwrap();
//! assert!(can_send(&rows, Some(500.0)));
//!
//! let request = AirdropRequest::from_rows("SomeMint", &rows);
//! assert_eq!(request.recipients.len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`recipient`] - Recipient rows, validation, list operations
//! - [`import`] - CSV recipient import
//! - [`summary`] - Totals and the submission gate
//! - [`api`] - Backend wire types

pub mod api;
pub mod error;
pub mod import;
pub mod recipient;
pub mod summary;

// =============================================================================
// Re-exports - Errors
// =============================================================================

pub use error::{ImportError, ImportResult};

// =============================================================================
// Re-exports - Recipients
// =============================================================================

pub use recipient::{
    is_positive_amount, is_well_formed_address, Recipient, RecipientField, RecipientList,
    INVALID_ADDRESS_MSG, INVALID_AMOUNT_MSG,
};

// =============================================================================
// Re-exports - Import
// =============================================================================

pub use import::{parse_recipient_bytes, parse_recipients};

// =============================================================================
// Re-exports - Summary
// =============================================================================

pub use summary::{can_send, total_amount, valid_count};

// =============================================================================
// Re-exports - API types
// =============================================================================

pub use api::{AirdropRecipient, AirdropRequest, AirdropResponse, ErrorResponse, TokenInfo};
