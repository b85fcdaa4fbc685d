//! Application configuration.
//!
//! Centralized configuration for the Massdrop frontend. In
//! development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Backend API base URL.
///
/// The airdrop service performing the actual on-chain sends.
pub const API_BASE: &str = "http://localhost:3000";

/// Application name, used in the header.
pub const APP_NAME: &str = "Massdrop";

/// Maximum CSV file size for import (in bytes).
///
/// 5 MB limit.
pub const MAX_FILE_SIZE: f64 = 5.0 * 1024.0 * 1024.0;

/// Runtime configuration handed to the services layer.
///
/// The bearer token is injected at build time rather than read from
/// browser storage, so the credential stays an explicit input.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Airdrop backend base URL.
    pub api_base: String,
    /// Bearer token for the airdrop endpoint, if one was injected.
    pub auth_token: Option<String>,
}

impl AppConfig {
    /// Build the config from compile-time inputs.
    ///
    /// Set `MASSDROP_API_TOKEN` in the build environment to embed a
    /// credential; without it requests go out unauthenticated.
    pub fn from_build_env() -> Self {
        Self {
            api_base: API_BASE.to_string(),
            auth_token: option_env!("MASSDROP_API_TOKEN").map(str::to_string),
        }
    }
}
