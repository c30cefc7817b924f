//! Processing page, nested under a project.

use leptos::*;
use leptos_router::*;

use crate::components::ProcessingSetup;
use crate::pages::ProjectContext;
use crate::types::ProcessingType;

#[component]
pub fn ProcessingPage() -> impl IntoView {
    let params = use_params_map();
    let ctx = expect_context::<ProjectContext>();

    let slug = move || params.with(|p| p.get("processing_type").cloned().unwrap_or_default());

    move || {
        let Some(processing_type) = ProcessingType::from_slug(&slug()) else {
            log::warn!("unknown processing type {:?}", slug());
            return view! {
                <p class="error-message">"Invalid processing type"</p>
            }
            .into_view();
        };
        match ctx.data.get() {
            Some(Ok(Some(data))) => view! {
                <ProcessingSetup
                    project_id=data.project.id
                    processing_type=processing_type
                    assets=data.assets
                />
            }
            .into_view(),
            _ => ().into_view(),
        }
    }
}
