//! Mint address input and token info display.
//!
//! Whenever the address becomes a well-formed public key, the token
//! lookup fires. Each request is tagged with the address that
//! triggered it and the response is discarded unless the input still
//! holds that address, so a slow lookup can never overwrite the info
//! card for a different mint.

use leptos::*;
use massdrop_core::{is_well_formed_address, TokenInfo};
use web_sys::Event;

use crate::config::AppConfig;
use crate::services::fetch_token_info;

#[component]
pub fn MintSection(
    mint_address: ReadSignal<String>,
    set_mint_address: WriteSignal<String>,
    token_info: ReadSignal<Option<TokenInfo>>,
    set_token_info: WriteSignal<Option<TokenInfo>>,
) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let (lookup_error, set_lookup_error) = create_signal(None::<String>);

    let on_input = move |ev: Event| {
        let value = event_target_value(&ev);
        set_mint_address.set(value.clone());
        set_lookup_error.set(None);

        if !is_well_formed_address(&value) {
            // Invalid or empty mint: no token info to show.
            set_token_info.set(None);
            return;
        }

        let config = config.clone();
        spawn_local(async move {
            let requested = value.clone();
            match fetch_token_info(&config, &requested).await {
                Ok(info) => {
                    // Only apply if the input still holds the mint
                    // this request was made for.
                    if mint_address.get_untracked() == requested {
                        set_token_info.set(Some(info));
                    }
                }
                Err(e) => {
                    log::error!("Token lookup failed for {requested}: {e}");
                    if mint_address.get_untracked() == requested {
                        set_token_info.set(None);
                        set_lookup_error.set(Some(e));
                    }
                }
            }
        });
    };

    view! {
        <div class="mint-section">
            <label for="mintAddress">"Token mint address"</label>
            <input
                type="text"
                id="mintAddress"
                placeholder="e.g. EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v"
                prop:value=move || mint_address.get()
                on:input=on_input
            />

            <Show
                when=move || token_info.get().is_some()
                fallback=|| view! { }
            >
                {move || token_info.get().map(|info| view! {
                    <div class="token-card">
                        <span class="token-name">{info.name.clone()}</span>
                        <span class="token-symbol">{info.symbol.clone()}</span>
                        <span class="token-decimals">{format!("{} decimals", info.decimals)}</span>
                        <span class="token-balance">{format!("Balance: {}", info.balance)}</span>
                    </div>
                })}
            </Show>

            <Show
                when=move || lookup_error.get().is_some()
                fallback=|| view! { }
            >
                <div class="error-message">
                    {move || lookup_error.get().unwrap_or_default()}
                </div>
            </Show>
        </div>
    }
}
