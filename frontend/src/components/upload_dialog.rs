use leptos::*;

use crate::components::DragAndDropForm;

/// "Upload asset" button and the modal holding the upload form.
#[component]
pub fn UploadAssetDialog(project_id: String, #[prop(into)] on_uploaded: Callback<()>) -> impl IntoView {
    let (open, set_open) = create_signal(false);
    // Closing would unmount the form under a running upload.
    let (busy, set_busy) = create_signal(false);

    let uploaded = Callback::new(move |_: ()| {
        set_busy.set(false);
        set_open.set(false);
        on_uploaded.call(());
    });

    view! {
        <button type="button" class="btn btn-primary" on:click=move |_| set_open.set(true)>
            "Upload asset"
        </button>

        <Show when=move || open.get() fallback=|| ()>
            <div class="dialog-backdrop">
                <div class="dialog dialog-wide">
                    <div class="dialog-header">
                        <h3 class="dialog-title">"Upload asset"</h3>
                        <button
                            type="button"
                            class="dialog-close"
                            disabled=move || busy.get()
                            on:click=move |_| {
                                if !busy.get_untracked() {
                                    set_open.set(false);
                                }
                            }
                        >
                            "×"
                        </button>
                    </div>
                    <DragAndDropForm
                        project_id=project_id.clone()
                        on_uploaded=uploaded
                        on_busy=move |busy: bool| set_busy.set(busy)
                    />
                </div>
            </div>
        </Show>
    }
}
