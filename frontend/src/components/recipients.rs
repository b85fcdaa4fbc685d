//! Manual recipient row editor.
//!
//! Renders one row per recipient with address and amount inputs, an
//! inline validation message, and add/remove controls. The list
//! itself lives in a signal owned by the parent; every edit here also
//! drops the submission state back to idle so stale success or error
//! banners disappear as soon as the user keeps working.

use leptos::*;
use massdrop_core::{RecipientField, RecipientList};
use web_sys::Event;

use crate::types::SubmitState;

#[component]
pub fn RecipientEditor(
    recipients: ReadSignal<RecipientList>,
    set_recipients: WriteSignal<RecipientList>,
    set_submit_state: WriteSignal<SubmitState>,
) -> impl IntoView {
    let edit_field = move |index: usize, field: RecipientField, ev: &Event| {
        let value = event_target_value(ev);
        set_recipients.update(|list| list.set_field(index, field, value));
        set_submit_state.set(SubmitState::Idle);
    };

    let on_add = move |_| {
        set_recipients.update(|list| list.add());
        set_submit_state.set(SubmitState::Idle);
    };

    view! {
        <div class="recipients-section">
            <div class="recipients-header">
                <span class="recipients-title">"Recipients"</span>
                <span class="recipients-count">
                    {move || recipients.with(|list| format!("{} rows", list.len()))}
                </span>
            </div>

            <div class="recipients-list">
                <For
                    each={move || (0..recipients.with(|list| list.len())).collect::<Vec<_>>()}
                    key=|index| *index
                    children=move |index| {
                        // Cells read through the list signal so edits
                        // re-render without recreating the row.
                        let address = move || {
                            recipients.with(|list| {
                                list.rows().get(index).map(|r| r.address.clone()).unwrap_or_default()
                            })
                        };
                        let amount = move || {
                            recipients.with(|list| {
                                list.rows().get(index).map(|r| r.amount.clone()).unwrap_or_default()
                            })
                        };
                        let row_error = move || {
                            recipients.with(|list| {
                                list.rows().get(index).and_then(|r| r.error.clone())
                            })
                        };
                        let last_row = move || recipients.with(|list| list.len() == 1);

                        let on_remove = move |_| {
                            set_recipients.update(|list| {
                                list.remove(index);
                            });
                            set_submit_state.set(SubmitState::Idle);
                        };

                        view! {
                            <div class="recipient-row">
                                <input
                                    type="text"
                                    class="recipient-address"
                                    placeholder="Recipient address"
                                    prop:value=address
                                    on:input=move |ev| edit_field(index, RecipientField::Address, &ev)
                                />
                                <input
                                    type="text"
                                    class="recipient-amount"
                                    placeholder="Amount"
                                    prop:value=amount
                                    on:input=move |ev| edit_field(index, RecipientField::Amount, &ev)
                                />
                                <button
                                    class="btn btn-remove"
                                    on:click=on_remove
                                    disabled=last_row
                                >
                                    "✕"
                                </button>
                                <Show
                                    when=move || row_error().is_some()
                                    fallback=|| view! { }
                                >
                                    <div class="row-error">
                                        {move || row_error().unwrap_or_default()}
                                    </div>
                                </Show>
                            </div>
                        }
                    }
                />
            </div>

            <button class="btn btn-secondary" id="addRecipientBtn" on:click=on_add>
                "+ Add recipient"
            </button>
        </div>
    }
}
