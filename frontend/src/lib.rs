//! Massdrop - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for batch-sending SPL tokens: enter a mint
//! address, build a recipient list by hand or from a CSV, and submit
//! the batch to the airdrop backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (token badge)                                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── MintSection (mint input, token info)                   │
//! │  ├── ImportSection (CSV upload, template)                   │
//! │  ├── RecipientEditor (row editor)                           │
//! │  └── SummaryBar (totals, gate, send status)                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - UI state types (SubmitState)
//! - [`components`] - UI components
//! - [`services`] - Backend communication (airdrop, token lookup)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use massdrop_core::{RecipientList, TokenInfo};
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod services;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{short_signature, SubmitState};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Massdrop - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppConfig::from_build_env());
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Global state for the application
    let (mint_address, set_mint_address) = create_signal(String::new());
    let (token_info, set_token_info) = create_signal(None::<TokenInfo>);
    let (recipients, set_recipients) = create_signal(RecipientList::new());
    let (submit_state, set_submit_state) = create_signal(SubmitState::Idle);

    view! {
        <Header token_info=token_info/>

        <div class="container">
            <Hero/>

            <MintSection
                mint_address=mint_address
                set_mint_address=set_mint_address
                token_info=token_info
                set_token_info=set_token_info
            />

            <ImportSection
                set_recipients=set_recipients
                set_submit_state=set_submit_state
            />

            <RecipientEditor
                recipients=recipients
                set_recipients=set_recipients
                set_submit_state=set_submit_state
            />

            <SummaryBar
                mint_address=mint_address
                recipients=recipients
                set_recipients=set_recipients
                token_info=token_info
                submit_state=submit_state
                set_submit_state=set_submit_state
            />
        </div>

        <Footer/>
    }
}
