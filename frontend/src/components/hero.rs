//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Massdrop - Batch Token Send"</h1>
            <p class="subtitle">
                "Send an SPL token to many recipients at once. "
                "Enter the token mint, add recipients by hand or import a CSV."
            </p>
        </div>
    }
}
