//! Login page.

use leptos::html::Input;
use leptos::*;
use leptos_router::*;

use crate::components::{Header, Toaster};
use crate::services::login;
use crate::session::{safe_redirect, SessionContext};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = SessionContext::get();
    let toaster = Toaster::get();
    let query = use_query_map();
    let navigate = use_navigate();

    let redirect_to = move || safe_redirect(query.with(|q| q.get("redirectTo").cloned()).as_deref());

    // Logged-in users (including right after a successful login) move on.
    create_effect(move |_| {
        if session.session.with(Option::is_some) {
            navigate(&redirect_to(), NavigateOptions::default());
        }
    });

    let email_ref = create_node_ref::<Input>();
    let password_ref = create_node_ref::<Input>();
    let remember_ref = create_node_ref::<Input>();
    let (pending, set_pending) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let (Some(email), Some(password)) = (email_ref.get_untracked(), password_ref.get_untracked()) else {
            return;
        };
        let email = email.value();
        let password = password.value();
        let remember = remember_ref
            .get_untracked()
            .map(|input| input.checked())
            .unwrap_or(false);

        set_pending.set(true);
        spawn_local(async move {
            match login(&email, &password).await {
                Ok(new_session) => {
                    log::info!("Logged in as {}", new_session.user.email);
                    session.login(new_session, remember);
                }
                Err(e) => toaster.error(e.to_string()),
            }
            set_pending.set(false);
        });
    };

    view! {
        <Header/>
        <div class="login">
            <h2 class="login-title">"Sign in to your account"</h2>
            <form class="login-form" on:submit=on_submit>
                <label for="email">"Email address"</label>
                <input id="email" name="email" type="email" autocomplete="email" required=true node_ref=email_ref/>

                <label for="password">"Password"</label>
                <input
                    id="password"
                    name="password"
                    type="password"
                    autocomplete="current-password"
                    required=true
                    node_ref=password_ref
                />

                <div class="login-remember">
                    <input id="remember" name="remember" type="checkbox" node_ref=remember_ref/>
                    <label for="remember">"Remember me"</label>
                </div>

                <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
                    {move || if pending.get() { "Logging in..." } else { "Log in" }}
                </button>
            </form>
        </div>
    }
}
