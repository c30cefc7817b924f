use leptos::*;
use leptos_router::*;

use crate::components::UploadAssetDialog;
use crate::types::Project;

/// Breadcrumb bar of a project page with the upload entry point.
#[component]
pub fn ProjectNav(project: Project, #[prop(into)] on_uploaded: Callback<()>) -> impl IntoView {
    view! {
        <nav class="project-nav">
            <A href="/projects" class="project-nav-home">"⌂"</A>
            <span class="project-nav-separator">"›"</span>
            <div class="project-nav-body">
                <h2 id="project-name" class="project-nav-title">{project.name.clone()}</h2>
                <UploadAssetDialog project_id=project.id on_uploaded=on_uploaded/>
            </div>
        </nav>
    }
}
