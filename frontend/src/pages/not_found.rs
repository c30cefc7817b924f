use leptos::*;
use leptos_router::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h2>"Page not found"</h2>
            <A href="/projects">"Back to projects"</A>
        </div>
    }
}
