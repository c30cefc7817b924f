//! Entry points to the processing pages of a project.

use leptos::*;
use leptos_router::*;

use crate::types::ProcessingType;

fn processing_href(project_id: &str, processing_type: ProcessingType) -> String {
    format!("/projects/{}/{}", project_id, processing_type.slug())
}

/// Full-size card, shown on the project overview.
#[component]
pub fn ProcessingCard(project_id: String, processing_type: ProcessingType) -> impl IntoView {
    view! {
        <A href=processing_href(&project_id, processing_type) class="processing-card">
            <h3>{processing_type.label()}</h3>
            <p>{processing_type.description()}</p>
        </A>
    }
}

/// Compact tab, shown above an open processing page.
#[component]
pub fn ProcessingCardMini(
    project_id: String,
    processing_type: ProcessingType,
    #[prop(into)] active: Signal<bool>,
) -> impl IntoView {
    view! {
        <A
            href=processing_href(&project_id, processing_type)
            class="processing-card-mini"
        >
            <span class:active=move || active.get()>{processing_type.label()}</span>
        </A>
    }
}
