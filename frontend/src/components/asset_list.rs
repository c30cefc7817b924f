//! Assets of the current project.

use leptos::*;

use crate::components::{report_error, Toaster};
use crate::services::remove_asset_from_project;
use crate::session::SessionContext;
use crate::types::{format_timestamp, Asset};

#[component]
pub fn AssetList(
    project_id: String,
    assets: Vec<Asset>,
    #[prop(into)] on_removed: Callback<()>,
) -> impl IntoView {
    let session = SessionContext::get();
    let toaster = Toaster::get();
    let (removing, set_removing) = create_signal(None::<String>);

    let remove = move |asset_id: String, project_id: String| {
        let Some(token) = session.token() else {
            return;
        };
        set_removing.set(Some(asset_id.clone()));
        spawn_local(async move {
            match remove_asset_from_project(&asset_id, &project_id, &token).await {
                Ok(()) => on_removed.call(()),
                Err(e) => report_error(toaster, session, e),
            }
            set_removing.set(None);
        });
    };

    if assets.is_empty() {
        return view! {
            <p class="asset-list-empty">"No assets yet. Upload an event log or a process model to get started."</p>
        }
        .into_view();
    }

    view! {
        <ul class="asset-list">
            {assets
                .into_iter()
                .map(|asset| {
                    let id = asset.id.clone();
                    let busy_id = asset.id.clone();
                    let project_id = project_id.clone();
                    view! {
                        <li class="asset-item">
                            <span class="asset-type">{asset.asset_type.label()}</span>
                            <span class="asset-name">{asset.name}</span>
                            <span class="asset-time">{format_timestamp(&asset.creation_time)}</span>
                            <button
                                class="btn btn-secondary"
                                disabled=move || removing.get().as_deref() == Some(busy_id.as_str())
                                on:click=move |_| remove(id.clone(), project_id.clone())
                            >
                                "Remove"
                            </button>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_view()
}
