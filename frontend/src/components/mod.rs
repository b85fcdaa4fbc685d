//! UI Components for the Massdrop application.
//!
//! # Layout Components
//! - [`Header`] - Top bar with the loaded token badge
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`MintSection`] - Mint address input and token info card
//! - [`RecipientEditor`] - Manual recipient row editor
//! - [`ImportSection`] - CSV import and template download
//! - [`SummaryBar`] - Totals, submission gate and send status

mod footer;
mod header;
mod hero;
mod import;
mod mint;
mod recipients;
mod summary;

pub use footer::*;
pub use header::*;
pub use hero::*;
pub use import::*;
pub use mint::*;
pub use recipients::*;
pub use summary::*;
