//! Project overview of the logged-in user.

use leptos::*;
use leptos_router::*;

use crate::components::{report_error, Header, ProjectCard, Toaster};
use crate::services::list_projects_for_user;
use crate::session::SessionContext;
use crate::types::{AppResult, Project};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let session = SessionContext::get();
    let toaster = Toaster::get();

    let projects = create_local_resource(
        move || session.session.with(|s| s.as_ref().map(|s| (s.user.id.clone(), s.token.clone()))),
        |auth| async move {
            let Some((user_id, token)) = auth else {
                return AppResult::Ok(Vec::<Project>::new());
            };
            list_projects_for_user(&user_id, &token).await
        },
    );

    create_effect(move |_| {
        if let Some(Err(e)) = projects.get() {
            report_error(toaster, session, e);
        }
    });

    view! {
        <Header/>
        <section class="projects">
            <Suspense fallback=|| view! { <p class="loading">"Loading projects..."</p> }>
                {move || projects.get().map(|result| match result {
                    Ok(list) if list.is_empty() => view! {
                        <p class="projects-empty">"You have no projects yet."</p>
                    }.into_view(),
                    Ok(list) => view! {
                        <ul class="project-grid">
                            {list
                                .into_iter()
                                .map(|project| {
                                    let href = format!("/projects/{}", project.id);
                                    view! {
                                        <A href=href class="project-link">
                                            <ProjectCard project=project/>
                                        </A>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }.into_view(),
                    Err(_) => view! {
                        <p class="error-message">"Projects could not be loaded."</p>
                    }.into_view(),
                })}
            </Suspense>
        </section>
    }
}
