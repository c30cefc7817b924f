use leptos::*;
use leptos_router::*;

use crate::session::SessionContext;

/// Drops the session and goes back to the start page.
#[component]
pub fn LogoutPage() -> impl IntoView {
    SessionContext::get().logout();
    log::info!("Logged out");

    view! { <Redirect path="/"/> }
}
