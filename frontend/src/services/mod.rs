//! Backend communication services.
//!
//! # Services
//!
//! - [`airdrop`] - batch send submission to the airdrop backend
//! - [`token`] - token metadata and balance lookup by mint address

pub mod airdrop;
pub mod token;

pub use airdrop::*;
pub use token::*;
