//! Dialog for mapping event-log columns to the fields the backend needs.
//!
//! Rendered inside the upload form, so the dialog body is not a `<form>`.

use leptos::*;
use web_sys::File;

use crate::upload::{ColumnMapping, EventLogField, UploadForm};

#[component]
pub fn ColumnMappingDialog(form: RwSignal<UploadForm<File>>) -> impl IntoView {
    let (open, set_open) = create_signal(false);
    let draft = create_rw_signal(ColumnMapping::default());
    let filled_in = create_memo(move |_| form.with(|f| f.mapping_filled_in()));

    let on_open = move |_: ev::MouseEvent| {
        draft.set(form.with_untracked(|f| f.column_mapping().clone()));
        set_open.set(true);
    };

    let on_save = move |_: ev::MouseEvent| {
        let mapping = draft.get_untracked();
        let complete = mapping.is_complete();
        match form.try_update(|f| f.update_column_mapping(mapping, complete)) {
            Some(Ok(())) => set_open.set(false),
            Some(Err(e)) => log::debug!("column mapping not saved: {}", e),
            None => {}
        }
    };

    view! {
        <button
            type="button"
            class="btn column-mapping-trigger"
            class:filled-in=move || filled_in.get()
            on:click=on_open
        >
            "Specify column mapping"
        </button>

        <Show when=move || open.get() fallback=|| ()>
            <div class="dialog-backdrop">
                <div class="dialog">
                    <h3 class="dialog-title">"Event log column mapping"</h3>
                    <p class="dialog-hint">"Enter the CSV column that holds each field."</p>
                    {EventLogField::ALL
                        .into_iter()
                        .map(|field| view! {
                            <label class="dialog-field">
                                <span>{field.label()}</span>
                                <input
                                    type="text"
                                    prop:value=move || draft.with(|m| m.get(field).to_string())
                                    on:keydown=move |ev: ev::KeyboardEvent| {
                                        if ev.key() == "Enter" {
                                            ev.prevent_default();
                                        }
                                    }
                                    on:input=move |ev| {
                                        let column = event_target_value(&ev);
                                        draft.update(|m| m.set(field, column));
                                    }
                                />
                            </label>
                        })
                        .collect_view()}
                    <div class="dialog-actions">
                        <button type="button" class="btn btn-secondary" on:click=move |_| set_open.set(false)>
                            "Cancel"
                        </button>
                        <button type="button" class="btn btn-primary" on:click=on_save>"Save"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
