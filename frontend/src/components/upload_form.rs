//! Asset upload form with drag & drop support.
//!
//! Every slot has a hidden file input (for the "select a file" link) and a
//! drop area. Which slots are shown, which files are sent and when the
//! submit button unlocks all come from [`UploadForm`].

use leptos::*;
use web_sys::File;

use crate::components::{report_error, ColumnMappingDialog, Toaster};
use crate::services::upload_assets;
use crate::session::SessionContext;
use crate::types::AppError;
use crate::upload::{
    AssetType, DropEffect, DropOutcome, FilePicker, HiddenFileInput, HiddenFilePicker, SlotKind,
    UploadForm,
};

#[component]
pub fn DragAndDropForm(
    project_id: String,
    #[prop(optional)] initial_asset_type: Option<AssetType>,
    #[prop(into)] on_uploaded: Callback<()>,
    /// Told whenever an upload starts or settles.
    #[prop(optional, into)]
    on_busy: Option<Callback<bool>>,
) -> impl IntoView {
    let session = SessionContext::get();
    let toaster = Toaster::get();

    let form = create_rw_signal(UploadForm::<File>::new(
        initial_asset_type.unwrap_or(AssetType::EventLog),
    ));
    let pickers = [
        HiddenFileInput::new(),
        HiddenFileInput::new(),
        HiddenFileInput::new(),
    ];
    let picker = move |kind: SlotKind| pickers[kind.index()];

    let asset_type = create_memo(move |_| form.with(|f| f.asset_type()));
    let ready = create_memo(move |_| form.with(|f| f.is_ready()));
    let submitting = create_memo(move |_| form.with(|f| f.is_submitting()));
    let mapping_enabled = create_memo(move |_| form.with(|f| f.column_mapping_enabled()));

    create_effect(move |_| {
        let busy = submitting.get();
        if let Some(on_busy) = on_busy {
            on_busy.call(busy);
        }
    });

    let on_asset_type_change = move |ev: ev::Event| {
        let Ok(selected) = event_target_value(&ev).parse::<AssetType>() else {
            return;
        };
        if let Some(Err(e)) = form.try_update(|f| f.set_asset_type(selected)) {
            log::debug!("asset type change ignored: {}", e);
        }
    };

    let on_file_selected = move |kind: SlotKind, file: File| {
        if let Some(Err(e)) = form.try_update(|f| f.select_file(kind, file)) {
            log::debug!("file selection ignored: {}", e);
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let Some(token) = session.token() else {
            report_error(toaster, session, AppError::Unauthorized);
            return;
        };
        let request = match form.try_update(|f| f.submit()) {
            Some(Ok(request)) => request,
            Some(Err(e)) => {
                log::debug!("submit ignored: {}", e);
                return;
            }
            None => return,
        };

        // Inputs of pruned slots must not keep a stale selection either.
        let contract = request.asset_type.contract();
        for kind in SlotKind::ALL {
            if !contract.uses(kind) {
                picker(kind).clear();
            }
        }

        let project_id = project_id.clone();
        spawn_local(async move {
            let result = upload_assets(&project_id, &request, &token).await;
            // The form may be gone if the user navigated away meanwhile.
            form.try_update(|f| f.finish_submission(result.is_ok()));
            match result {
                Ok(()) => {
                    for kind in SlotKind::ALL {
                        picker(kind).clear();
                    }
                    toaster.success(format!("{} uploaded", request.asset_type.label()));
                    on_uploaded.call(());
                }
                Err(e) => report_error(toaster, session, e),
            }
        });
    };

    view! {
        <form class="upload-form" on:submit=on_submit>
            <label class="upload-type">
                "Asset type"
                <select
                    name="assetType"
                    on:change=on_asset_type_change
                    disabled=move || submitting.get()
                >
                    {AssetType::ALL
                        .into_iter()
                        .map(|t| view! {
                            <option value=t.as_str() selected=move || asset_type.get() == t>
                                {t.label()}
                            </option>
                        })
                        .collect_view()}
                </select>
            </label>

            // Hidden inputs behind the "select a file" links.
            {SlotKind::ALL
                .into_iter()
                .map(|kind| view! {
                    <HiddenFilePicker
                        kind=kind
                        picker=picker(kind)
                        on_select=move |file: File| on_file_selected(kind, file)
                    />
                })
                .collect_view()}

            <div class="upload-slots">
                {move || {
                    asset_type
                        .get()
                        .contract()
                        .slots
                        .iter()
                        .map(|kind| view! {
                            <DragAndDropContainer kind=*kind form=form picker=picker(*kind)/>
                        })
                        .collect_view()
                }}
            </div>

            <Show when=move || mapping_enabled.get() fallback=|| ()>
                <div class="column-mapping">
                    <div class="column-mapping-arrow" aria-hidden="true">"↓"</div>
                    <ColumnMappingDialog form=form/>
                </div>
            </Show>

            <button class="btn btn-primary upload-submit" type="submit" disabled=move || !ready.get()>
                {move || form.with(|f| f.submit_label())}
            </button>
        </form>
    }
}

/// Drop area of one slot.
#[component]
fn DragAndDropContainer(
    kind: SlotKind,
    form: RwSignal<UploadForm<File>>,
    picker: HiddenFileInput,
) -> impl IntoView {
    let hover = move |ev: ev::DragEvent, active: bool| {
        ev.prevent_default();
        ev.stop_propagation();

        let effect = form
            .try_update(|f| f.set_drag_active(kind, active))
            .and_then(Result::ok)
            .unwrap_or(DropEffect::None);
        if let Some(transfer) = ev.data_transfer() {
            transfer.set_drop_effect(effect.as_str());
        }
    };

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();

        let file = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0));
        match form.try_update(|f| f.drop_file(kind, file)) {
            Some(Ok(DropOutcome::Rejected)) => {
                log::debug!("{} already has a file, remove it first", kind.label())
            }
            Some(Err(e)) => log::debug!("drop ignored: {}", e),
            _ => {}
        }
    };

    let on_remove = move |_: ev::MouseEvent| {
        if let Some(Ok(())) = form.try_update(|f| f.clear_slot(kind)) {
            picker.clear();
        }
    };

    let drag_active = move || form.with(|f| f.slot(kind).is_drag_active());
    let file_name = move || form.with(|f| f.file_name(kind));

    view! {
        <div
            class="dropzone"
            class:drag-active=drag_active
            on:dragenter=move |ev| hover(ev, true)
            on:dragover=move |ev| hover(ev, true)
            on:dragleave=move |ev| hover(ev, false)
            on:drop=on_drop
        >
            <div class="dropzone-header">
                <p class="dropzone-title">"Add " {kind.label()}</p>
                <p>
                    "Drag & Drop or "
                    <span class="dropzone-select" on:click=move |_| picker.open()>
                        "select a file"
                    </span>
                    " to upload"
                </p>
            </div>
            {move || file_name().map(|name| view! {
                <div class="dropped-file">
                    <span class="dropped-file-icon" aria-hidden="true">"📄"</span>
                    <div class="dropped-file-body">
                        <p class="dropped-file-name">{name}</p>
                        <span class="dropped-file-remove" on:click=on_remove>"Remove"</span>
                    </div>
                </div>
            })}
        </div>
    }
}
