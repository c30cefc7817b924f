use leptos::*;

use crate::types::{format_timestamp, Project};

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let assets = project.assets_ids.len();
    let runs = project.processing_requests_ids.len();

    view! {
        <li class="project-card">
            <h3 class="project-card-title">{project.name}</h3>
            {project.description.map(|d| view! { <p class="project-card-description">{d}</p> })}
            <p class="project-card-meta">
                {format!("{} assets • {} processing requests", assets, runs)}
            </p>
            <p class="project-card-meta">"Created " {format_timestamp(&project.creation_time)}</p>
        </li>
    }
}
