//! Error types for the Massdrop core.
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// CSV Import Errors
// =============================================================================

/// Errors during CSV recipient import.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Invalid CSV format.
    #[error("Failed to parse CSV file: {0}")]
    Parse(String),

    /// File contained no recipient rows.
    #[error("CSV file is empty")]
    Empty,
}

/// Result type for import operations.
pub type ImportResult<T> = Result<T, ImportError>;
