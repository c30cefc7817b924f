//! Route guard for pages that need a logged-in user.

use leptos::*;
use leptos_router::*;

use crate::session::{login_path, SessionContext};

/// Renders nested routes for logged-in users, otherwise redirects to the
/// login page with a `redirectTo` back to the requested path.
#[component]
pub fn RequireSession() -> impl IntoView {
    let session = SessionContext::get();
    let location = use_location();
    let logged_in = create_memo(move |_| session.session.with(Option::is_some));

    move || {
        if logged_in.get() {
            view! { <Outlet/> }.into_view()
        } else {
            let path = location.pathname.get_untracked();
            log::debug!("no session, redirecting {} to login", path);
            view! { <Redirect path=login_path(&path)/> }.into_view()
        }
    }
}
