//! Application configuration.
//!
//! Centralized configuration for the PIX Portal frontend. Values are
//! compiled in; the backend URL can be overridden at build time with the
//! `PIX_BACKEND_URL` environment variable.

/// Backend API base URL used when `PIX_BACKEND_URL` is not set.
///
/// Must end with a slash: request paths are appended to it.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:9999/api/v1/";

/// Application name shown in the header and page titles.
pub const APP_NAME: &str = "PIX Portal";

/// Key under which the session is kept in browser storage.
pub const SESSION_STORAGE_KEY: &str = "pix.session";

/// Where users land after logging in.
pub const DEFAULT_REDIRECT: &str = "/projects";

/// How long a toast stays on screen (ms).
pub const TOAST_DURATION_MS: u32 = 6_000;

/// Maximum toasts shown at once.
pub const MAX_TOASTS: usize = 5;

/// Backend API base URL.
pub fn backend_url() -> &'static str {
    option_env!("PIX_BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL)
}

/// Absolute URL for a backend path such as `projects/42`.
pub fn api_url(path: &str) -> String {
    let base = backend_url();
    let path = path.trim_start_matches('/');
    if base.ends_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_once() {
        let url = api_url("/projects/1");
        assert!(url.ends_with("/projects/1"));
        assert!(!url.contains("//projects"));
    }
}
