use leptos::*;
use massdrop_core::TokenInfo;

use crate::config::APP_NAME;

#[component]
pub fn Header(token_info: ReadSignal<Option<TokenInfo>>) -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">{APP_NAME}</a>
                <span class="badge">
                    {move || match token_info.get() {
                        Some(info) => format!("{} {}", info.balance, info.symbol),
                        None => "-- --".to_string(),
                    }}
                </span>
            </div>
        </header>
    }
}
