//! Entry point for the WASM application

use leptos::*;
use pix_frontend::{backend_url, App, APP_NAME};

pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Starting {} (backend: {})", APP_NAME, backend_url());

    mount_to_body(|| view! { <App/> })
}
