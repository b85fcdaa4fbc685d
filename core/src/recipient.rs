//! Recipient rows and the ordered list the editor operates on.
//!
//! A [`Recipient`] is one address/amount pair pending submission. Its
//! `valid` flag is derived from the two fields and recomputed on every
//! mutation; it is never set directly.
//!
//! # Validation Rules
//!
//! - **address** — must decode as a well-formed Solana public key
//!   (base58, exactly 32 bytes). We validate with `bs58` directly
//!   rather than pulling in solana-sdk; syntax is all the form needs.
//! - **amount** — must parse as a finite number strictly greater
//!   than zero.
//!
//! A blank field makes the row invalid but carries no error message;
//! the error is only shown once the user has typed something.

use serde::{Deserialize, Serialize};

/// Error message for a malformed address field.
pub const INVALID_ADDRESS_MSG: &str = "Invalid Solana address";

/// Error message for a malformed amount field.
pub const INVALID_AMOUNT_MSG: &str = "Invalid amount";

/// Byte length of an Ed25519 public key, which is what a Solana
/// address encodes.
const PUBKEY_LEN: usize = 32;

// =============================================================================
// Field-level validation
// =============================================================================

/// Check whether a string is a well-formed Solana address.
///
/// Well-formed means it is valid base58 and decodes to exactly
/// 32 bytes. No on-curve or existence check is performed.
pub fn is_well_formed_address(address: &str) -> bool {
    match bs58::decode(address).into_vec() {
        Ok(bytes) => bytes.len() == PUBKEY_LEN,
        Err(_) => false,
    }
}

/// Check whether a string parses as a positive, finite amount.
pub fn is_positive_amount(amount: &str) -> bool {
    match amount.trim().parse::<f64>() {
        Ok(value) => value.is_finite() && value > 0.0,
        Err(_) => false,
    }
}

// =============================================================================
// Recipient
// =============================================================================

/// Which editable field of a recipient row is being changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecipientField {
    Address,
    Amount,
}

/// One recipient row: raw field values plus derived validity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipient {
    /// Raw address input.
    pub address: String,
    /// Raw amount input (kept as entered; parsed on submission).
    pub amount: String,
    /// Derived: both fields pass their syntactic checks.
    pub valid: bool,
    /// Human-readable reason, present iff the row is invalid and the
    /// offending field is non-empty.
    pub error: Option<String>,
}

impl Recipient {
    /// A blank row, as created by the "add recipient" action.
    pub fn empty() -> Self {
        Self {
            address: String::new(),
            amount: String::new(),
            valid: false,
            error: None,
        }
    }

    /// Build a row from raw field values (CSV import path) and
    /// validate it immediately.
    pub fn from_fields(address: impl Into<String>, amount: impl Into<String>) -> Self {
        let mut recipient = Self {
            address: address.into(),
            amount: amount.into(),
            valid: false,
            error: None,
        };
        recipient.revalidate();
        recipient
    }

    /// Recompute `valid` and `error` from the current field values.
    ///
    /// The address error takes precedence when both fields are bad.
    pub fn revalidate(&mut self) {
        let address_ok = is_well_formed_address(&self.address);
        let amount_ok = is_positive_amount(&self.amount);

        self.valid = address_ok && amount_ok;
        self.error = if !address_ok && !self.address.is_empty() {
            Some(INVALID_ADDRESS_MSG.to_string())
        } else if !amount_ok && !self.amount.is_empty() {
            Some(INVALID_AMOUNT_MSG.to_string())
        } else {
            None
        };
    }

    /// Update one field and revalidate the row.
    pub fn set_field(&mut self, field: RecipientField, value: impl Into<String>) {
        match field {
            RecipientField::Address => self.address = value.into(),
            RecipientField::Amount => self.amount = value.into(),
        }
        self.revalidate();
    }
}

impl Default for Recipient {
    fn default() -> Self {
        Self::empty()
    }
}

// =============================================================================
// RecipientList
// =============================================================================

/// Ordered sequence of recipient rows.
///
/// Invariant: the list always holds at least one row, so the editor
/// always has something to render. [`remove`](Self::remove) refuses to
/// delete the last remaining row.
#[derive(Clone, Debug, PartialEq)]
pub struct RecipientList {
    rows: Vec<Recipient>,
}

impl RecipientList {
    /// A fresh list with a single empty row.
    pub fn new() -> Self {
        Self {
            rows: vec![Recipient::empty()],
        }
    }

    /// All rows, in order.
    pub fn rows(&self) -> &[Recipient] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows that currently pass validation.
    pub fn valid_rows(&self) -> impl Iterator<Item = &Recipient> {
        self.rows.iter().filter(|r| r.valid)
    }

    /// Append one empty row.
    pub fn add(&mut self) {
        self.rows.push(Recipient::empty());
    }

    /// Delete the row at `index`.
    ///
    /// Returns `false` (and leaves the list untouched) when only one
    /// row remains or the index is out of range.
    pub fn remove(&mut self, index: usize) -> bool {
        if self.rows.len() <= 1 || index >= self.rows.len() {
            return false;
        }
        self.rows.remove(index);
        true
    }

    /// Update one field of the row at `index` and revalidate it.
    /// Out-of-range indices are ignored.
    pub fn set_field(&mut self, index: usize, field: RecipientField, value: impl Into<String>) {
        if let Some(row) = self.rows.get_mut(index) {
            row.set_field(field, value);
        }
    }

    /// Replace the whole list (destructive CSV import). An empty
    /// replacement falls back to a single empty row to preserve the
    /// at-least-one-row invariant.
    pub fn replace(&mut self, rows: Vec<Recipient>) {
        if rows.is_empty() {
            self.rows = vec![Recipient::empty()];
        } else {
            self.rows = rows;
        }
    }

    /// Reset to a single empty row (after a successful submission).
    pub fn reset(&mut self) {
        self.rows = vec![Recipient::empty()];
    }
}

impl Default for RecipientList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // System program id: 32 zero bytes in base58.
    const GOOD_ADDR: &str = "11111111111111111111111111111111";
    // USDC mint on mainnet.
    const GOOD_ADDR_2: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

    #[test]
    fn test_well_formed_addresses() {
        assert!(is_well_formed_address(GOOD_ADDR));
        assert!(is_well_formed_address(GOOD_ADDR_2));
    }

    #[test]
    fn test_malformed_addresses() {
        // Too short once decoded.
        assert!(!is_well_formed_address("abc"));
        // 'I', 'O', 'l' and '0' are outside the base58 alphabet.
        assert!(!is_well_formed_address("I0OlI0OlI0OlI0OlI0OlI0OlI0OlI0Ol"));
        assert!(!is_well_formed_address(""));
        // One char longer than a pubkey encoding.
        assert!(!is_well_formed_address(&format!("{}1", GOOD_ADDR_2)));
    }

    #[test]
    fn test_amount_parsing() {
        assert!(is_positive_amount("100"));
        assert!(is_positive_amount("0.5"));
        assert!(is_positive_amount(" 42.0 "));
        assert!(!is_positive_amount("0"));
        assert!(!is_positive_amount("-5"));
        assert!(!is_positive_amount("abc"));
        assert!(!is_positive_amount(""));
        assert!(!is_positive_amount("inf"));
        assert!(!is_positive_amount("NaN"));
    }

    #[test]
    fn test_invalid_address_sets_error() {
        let row = Recipient::from_fields("not-an-address", "100");
        assert!(!row.valid);
        let msg = row.error.expect("error expected");
        assert!(msg.to_lowercase().contains("address"));
    }

    #[test]
    fn test_invalid_amount_sets_error() {
        for bad in ["abc", "0", "-3", ""] {
            let mut row = Recipient::from_fields(GOOD_ADDR, bad);
            row.revalidate();
            assert!(!row.valid, "amount {bad:?} should be invalid");
            if bad.is_empty() {
                assert!(row.error.is_none());
            } else {
                let msg = row.error.expect("error expected");
                assert!(msg.to_lowercase().contains("amount"));
            }
        }
    }

    #[test]
    fn test_blank_row_has_no_error() {
        let row = Recipient::empty();
        assert!(!row.valid);
        assert!(row.error.is_none());
    }

    #[test]
    fn test_address_error_takes_precedence() {
        let row = Recipient::from_fields("bad", "also-bad");
        assert_eq!(row.error.as_deref(), Some(INVALID_ADDRESS_MSG));
    }

    #[test]
    fn test_edit_revalidates() {
        let mut row = Recipient::from_fields(GOOD_ADDR, "10");
        assert!(row.valid);

        row.set_field(RecipientField::Amount, "oops");
        assert!(!row.valid);
        assert_eq!(row.error.as_deref(), Some(INVALID_AMOUNT_MSG));

        row.set_field(RecipientField::Amount, "25");
        assert!(row.valid);
        assert!(row.error.is_none());
    }

    #[test]
    fn test_list_starts_with_one_empty_row() {
        let list = RecipientList::new();
        assert_eq!(list.len(), 1);
        assert!(!list.rows()[0].valid);
    }

    #[test]
    fn test_remove_refuses_last_row() {
        let mut list = RecipientList::new();
        assert!(!list.remove(0));
        assert_eq!(list.len(), 1);

        list.add();
        assert!(list.remove(0));
        assert_eq!(list.len(), 1);
        assert!(!list.remove(0));
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut list = RecipientList::new();
        list.add();
        assert!(!list.remove(5));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_set_field_on_list() {
        let mut list = RecipientList::new();
        list.set_field(0, RecipientField::Address, GOOD_ADDR);
        list.set_field(0, RecipientField::Amount, "12.5");
        assert!(list.rows()[0].valid);
        assert_eq!(list.valid_rows().count(), 1);
    }

    #[test]
    fn test_replace_never_installs_empty_list() {
        let mut list = RecipientList::new();
        list.replace(vec![]);
        assert_eq!(list.len(), 1);

        list.replace(vec![Recipient::from_fields(GOOD_ADDR, "1")]);
        assert_eq!(list.len(), 1);
        assert!(list.rows()[0].valid);
    }

    #[test]
    fn test_reset() {
        let mut list = RecipientList::new();
        list.replace(vec![
            Recipient::from_fields(GOOD_ADDR, "1"),
            Recipient::from_fields(GOOD_ADDR_2, "2"),
        ]);
        list.reset();
        assert_eq!(list.len(), 1);
        assert!(list.rows()[0].address.is_empty());
    }

    #[test]
    fn test_duplicate_addresses_not_flagged() {
        let mut list = RecipientList::new();
        list.replace(vec![
            Recipient::from_fields(GOOD_ADDR, "1"),
            Recipient::from_fields(GOOD_ADDR, "2"),
        ]);
        assert_eq!(list.valid_rows().count(), 2);
    }
}
