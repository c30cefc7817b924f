use leptos::*;
use leptos_router::*;

use crate::session::SessionContext;
use crate::APP_NAME;

#[component]
pub fn Header() -> impl IntoView {
    let session = SessionContext::get();
    let email = move || session.session.with(|s| s.as_ref().map(|s| s.user.email.clone()));

    view! {
        <header>
            <div class="header-left">
                <A href="/projects" class="logo">{APP_NAME}</A>
            </div>
            <div class="header-right">
                {move || match email() {
                    Some(email) => view! {
                        <span class="user-email">{email}</span>
                        <A href="/logout" class="header-link">"Log out"</A>
                    }.into_view(),
                    None => view! {
                        <A href="/login" class="header-link">"Log in"</A>
                    }.into_view(),
                }}
            </div>
        </header>
    }
}
