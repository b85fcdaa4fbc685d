//! Totals, submission gate and send status.
//!
//! The displayed total sums every row (unparsable amounts count as
//! zero); the payload that actually goes out only carries valid rows.
//! The send button is enabled by [`massdrop_core::can_send`] and
//! additionally disabled while a request is in flight, which is what
//! enforces the single-submission rule - there is no cancellation.

use leptos::*;
use massdrop_core::{can_send, total_amount, valid_count, AirdropRequest, RecipientList, TokenInfo};

use crate::config::AppConfig;
use crate::services::submit_airdrop;
use crate::types::{short_signature, SubmitState};

#[component]
pub fn SummaryBar(
    mint_address: ReadSignal<String>,
    recipients: ReadSignal<RecipientList>,
    set_recipients: WriteSignal<RecipientList>,
    token_info: ReadSignal<Option<TokenInfo>>,
    submit_state: ReadSignal<SubmitState>,
    set_submit_state: WriteSignal<SubmitState>,
) -> impl IntoView {
    let config = expect_context::<AppConfig>();

    let total = move || recipients.with(|list| total_amount(list.rows()));
    let valid = move || recipients.with(|list| valid_count(list.rows()));
    let balance = move || token_info.with(|info| info.as_ref().map(|i| i.balance));

    let sendable = move || {
        recipients.with(|list| can_send(list.rows(), balance()))
            && !submit_state.with(|s| s.is_sending())
    };

    let on_send = move |_| {
        if !sendable() {
            return;
        }

        let request = recipients
            .with_untracked(|list| AirdropRequest::from_rows(mint_address.get_untracked(), list.rows()));
        let config = config.clone();

        set_submit_state.set(SubmitState::Sending);
        log::info!("Submitting airdrop to {} recipients", request.recipients.len());

        spawn_local(async move {
            match submit_airdrop(&config, &request).await {
                Ok(response) => {
                    log::info!(
                        "Airdrop confirmed: {} recipients, signature {}",
                        response.recipient_count,
                        response.signature
                    );
                    set_submit_state.set(SubmitState::Success {
                        signature: response.signature,
                        recipient_count: response.recipient_count,
                    });
                    // Successful send clears the form.
                    set_recipients.update(|list| list.reset());
                }
                Err(e) => {
                    // The list is kept so the user can correct and retry.
                    log::error!("Airdrop failed: {e}");
                    set_submit_state.set(SubmitState::Failed(e));
                }
            }
        });
    };

    view! {
        <div class="summary-bar">
            <div class="summary-totals">
                <span class="summary-valid">
                    {move || format!("{} valid recipients", valid())}
                </span>
                " • Total: "
                <strong>{move || format!("{}", total())}</strong>
                {move || match balance() {
                    Some(available) => format!(" • Balance: {available}"),
                    None => " • Balance: --".to_string(),
                }}
            </div>

            <button
                class="btn btn-primary"
                id="sendBtn"
                on:click=on_send
                disabled=move || !sendable()
            >
                {move || if submit_state.with(|s| s.is_sending()) {
                    "Sending..."
                } else {
                    "Send tokens"
                }}
            </button>

            {move || match submit_state.get() {
                SubmitState::Success { signature, recipient_count } => view! {
                    <div class="send-success">
                        {format!(
                            "Sent to {} recipients • Signature: {}",
                            recipient_count,
                            short_signature(&signature)
                        )}
                    </div>
                }.into_view(),
                SubmitState::Failed(message) => view! {
                    <div class="error-message">{message}</div>
                }.into_view(),
                _ => view! { }.into_view(),
            }}
        </div>
    }
}
