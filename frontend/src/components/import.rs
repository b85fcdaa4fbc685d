//! CSV import component.
//!
//! Accepts a single uploaded file, parses it with the core import
//! rules and destructively replaces the recipient list on success.
//! A parse failure reports the error and leaves the current list
//! untouched.

use leptos::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, HtmlInputElement};

use massdrop_core::{parse_recipient_bytes, RecipientList};

use crate::config::MAX_FILE_SIZE;
use crate::types::SubmitState;

#[component]
pub fn ImportSection(
    set_recipients: WriteSignal<RecipientList>,
    set_submit_state: WriteSignal<SubmitState>,
) -> impl IntoView {
    let (import_error, set_import_error) = create_signal(None::<String>);
    let (import_summary, set_import_summary) = create_signal(None::<String>);

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);

        let Some(files) = input.files() else { return };
        let Some(file) = files.get(0) else { return };

        // Clear the input so picking the same file again still fires
        // a change event (re-import after fixing the file).
        input.set_value("");

        set_import_error.set(None);
        set_import_summary.set(None);

        if file.size() > MAX_FILE_SIZE {
            set_import_error.set(Some("File is too large".to_string()));
            return;
        }

        spawn_local(async move {
            let buffer = match JsFuture::from(file.array_buffer()).await {
                Ok(buffer) => buffer,
                Err(e) => {
                    log::error!("Failed to read file: {e:?}");
                    set_import_error.set(Some("Failed to read file".to_string()));
                    return;
                }
            };
            let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

            match parse_recipient_bytes(&bytes) {
                Ok(rows) => {
                    let count = rows.len();
                    set_recipients.update(|list| list.replace(rows));
                    set_submit_state.set(SubmitState::Idle);
                    set_import_summary.set(Some(format!("Imported {count} recipients")));
                    log::info!("CSV import replaced the list with {count} rows");
                }
                Err(e) => {
                    // Keep the existing list on parse failure.
                    log::error!("CSV import failed: {e}");
                    set_import_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let trigger_file_input = move |_| {
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(input) = document.get_element_by_id("csvInput") {
                    if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
                        html_input.click();
                    }
                }
            }
        }
    };

    view! {
        <div class="import-section" id="importZone" on:click=trigger_file_input>
            <div class="upload-icon">"📤"</div>
            <div class="upload-text">"Import recipients from CSV"</div>
            <div class="upload-hint">
                "Two columns, no header: address,amount. Importing replaces the current list."
            </div>

            <input
                type="file"
                id="csvInput"
                accept=".csv"
                style="display:none"
                on:change=on_file_change
            />

            <Show
                when=move || import_summary.get().is_some()
                fallback=|| view! { }
            >
                <div class="import-summary">
                    {move || import_summary.get().unwrap_or_default()}
                </div>
            </Show>

            <Show
                when=move || import_error.get().is_some()
                fallback=|| view! { }
            >
                <div class="error-message">
                    {move || import_error.get().unwrap_or_default()}
                </div>
            </Show>

            <a
                href="/assets/airdrop-template.csv"
                download="airdrop-template.csv"
                class="template-link"
                on:click=|ev| ev.stop_propagation()
            >
                "Download CSV template"
            </a>
        </div>
    }
}
