//! Single project: navigation, assets and processing entry points.

use leptos::*;
use leptos_router::*;

use crate::components::{
    report_error, AssetList, Header, ProcessingCard, ProcessingCardMini, ProjectNav, Toaster,
};
use crate::services::{get_assets, get_project};
use crate::session::SessionContext;
use crate::types::{AppResult, Asset, ProcessingType, Project};

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectData {
    pub project: Project,
    pub assets: Vec<Asset>,
}

/// Loaded project, shared with the nested processing page.
#[derive(Clone, Copy)]
pub struct ProjectContext {
    pub data: Resource<(String, u32), AppResult<Option<ProjectData>>>,
    pub refresh: WriteSignal<u32>,
}

impl ProjectContext {
    pub fn reload(&self) {
        self.refresh.update(|n| *n += 1);
    }
}

/// Processing slug of `/projects/:project_id/:processing_type`, if any.
pub fn processing_slug(path: &str) -> Option<&str> {
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    match (segments.next(), segments.next(), segments.next()) {
        (Some("projects"), Some(_), Some(slug)) => Some(slug),
        _ => None,
    }
}

async fn load_project(project_id: String, token: Option<String>) -> AppResult<Option<ProjectData>> {
    let Some(token) = token else {
        return Ok(None);
    };
    let project = get_project(&project_id, &token).await?;
    let assets = get_assets(&project.assets_ids, &token).await?;
    Ok(Some(ProjectData { project, assets }))
}

#[component]
pub fn ProjectPage() -> impl IntoView {
    let session = SessionContext::get();
    let toaster = Toaster::get();
    let params = use_params_map();
    let location = use_location();

    let project_id = move || params.with(|p| p.get("project_id").cloned().unwrap_or_default());
    let (refresh, set_refresh) = create_signal(0u32);
    let data = create_local_resource(
        move || (project_id(), refresh.get()),
        move |(id, _)| load_project(id, session.token()),
    );
    let ctx = ProjectContext {
        data,
        refresh: set_refresh,
    };
    provide_context(ctx);

    create_effect(move |_| {
        if let Some(Err(e)) = data.get() {
            report_error(toaster, session, e);
        }
    });

    let active_slug = create_memo(move |_| {
        location
            .pathname
            .with(|path| processing_slug(path).map(str::to_string))
    });

    let processing_cards = move |project_id: String| {
        move || match active_slug.get() {
            None => view! {
                <div class="processing-grid">
                    {ProcessingType::ALL
                        .into_iter()
                        .map(|t| view! { <ProcessingCard project_id=project_id.clone() processing_type=t/> })
                        .collect_view()}
                </div>
            }
            .into_view(),
            Some(slug) => view! {
                <div class="processing-tabs">
                    {ProcessingType::ALL
                        .into_iter()
                        .map(|t| {
                            let active = t.slug() == slug;
                            view! {
                                <ProcessingCardMini
                                    project_id=project_id.clone()
                                    processing_type=t
                                    active=Signal::derive(move || active)
                                />
                            }
                        })
                        .collect_view()}
                </div>
            }
            .into_view(),
        }
    };

    view! {
        <div class="project-page">
            <Header/>
            <Suspense fallback=|| view! { <p class="loading">"Loading project..."</p> }>
                {move || data.get().map(|result| match result {
                    Ok(Some(ProjectData { project, assets })) => {
                        let cards = processing_cards(project.id.clone());
                        let project_id = project.id.clone();
                        view! {
                            <ProjectNav project=project on_uploaded=move |_: ()| ctx.reload()/>
                            {cards}
                            <Show when=move || active_slug.with(Option::is_none) fallback=|| ()>
                                <section class="project-assets">
                                    <h3>"Assets"</h3>
                                    <AssetList
                                        project_id=project_id.clone()
                                        assets=assets.clone()
                                        on_removed=move |_: ()| ctx.reload()
                                    />
                                </section>
                            </Show>
                            <Outlet/>
                        }
                        .into_view()
                    }
                    Ok(None) => ().into_view(),
                    Err(_) => view! {
                        <p class="error-message">"Project could not be loaded."</p>
                    }
                    .into_view(),
                })}
            </Suspense>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processing_slug() {
        assert_eq!(processing_slug("/projects/42/simulation"), Some("simulation"));
        assert_eq!(processing_slug("/projects/42/waiting-time/"), Some("waiting-time"));
        assert_eq!(processing_slug("/projects/42"), None);
        assert_eq!(processing_slug("/projects"), None);
        assert_eq!(processing_slug("/login"), None);
    }
}
