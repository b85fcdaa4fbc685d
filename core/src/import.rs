//! CSV recipient import.
//!
//! The import format is fixed: comma-separated rows with no header,
//! first field the address, second the amount. Blank lines are
//! skipped and fields are trimmed. Every imported row goes through
//! the same validation as manual entry, so a file full of garbage
//! still imports - it just imports as invalid rows the user can fix.
//!
//! Import is destructive by contract: the caller replaces its whole
//! list with the parsed rows. On a parse error the caller keeps its
//! previous list untouched.

use crate::error::{ImportError, ImportResult};
use crate::recipient::Recipient;

/// Parse raw CSV bytes into recipient rows.
///
/// Takes bytes rather than a string because uploaded files arrive as
/// buffers; non-UTF-8 content surfaces as [`ImportError::Parse`].
pub fn parse_recipient_bytes(bytes: &[u8]) -> ImportResult<Vec<Recipient>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let mut rows = Vec::new();

    for record in reader.records() {
        let record = record.map_err(|e| ImportError::Parse(e.to_string()))?;

        // A line of bare separators ("," / ",,") still produces a
        // record; treat it like a blank line.
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }

        let address = record.get(0).unwrap_or("").to_string();
        let amount = record.get(1).unwrap_or("").to_string();
        rows.push(Recipient::from_fields(address, amount));
    }

    if rows.is_empty() {
        return Err(ImportError::Empty);
    }

    Ok(rows)
}

/// Parse CSV content into recipient rows.
///
/// # Example
/// ```
/// use massdrop_core::parse_recipients;
///
/// let csv = "11111111111111111111111111111111,100\n\nsomebody,abc\n";
/// let rows = parse_recipients(csv).unwrap();
///
/// assert_eq!(rows.len(), 2);
/// assert!(rows[0].valid);
/// assert!(!rows[1].valid);
/// ```
pub fn parse_recipients(content: &str) -> ImportResult<Vec<Recipient>> {
    parse_recipient_bytes(content.as_bytes())
}
