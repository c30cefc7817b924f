//! Browser-side session.
//!
//! The backend owns token validation; the client only remembers the token
//! and the user it belongs to. "Remember me" sessions go to `localStorage`,
//! others to `sessionStorage` and die with the tab.

use leptos::*;
use serde::{Deserialize, Serialize};
use web_sys::Storage;

use crate::config::{DEFAULT_REDIRECT, SESSION_STORAGE_KEY};
use crate::types::{AppError, AppResult, User};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub token: String,
}

impl Session {
    /// Restore a stored session, local storage first.
    pub fn load() -> Option<Session> {
        [local_storage(), session_storage()]
            .into_iter()
            .filter_map(Result::ok)
            .find_map(|storage| read_session(&storage))
    }

    pub fn save(&self, remember: bool) -> AppResult<()> {
        let storage = if remember {
            local_storage()?
        } else {
            session_storage()?
        };
        let json = serde_json::to_string(self).map_err(|e| AppError::Storage(e.to_string()))?;
        storage
            .set_item(SESSION_STORAGE_KEY, &json)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }

    /// Remove the session from both storages.
    pub fn clear() {
        for storage in [local_storage(), session_storage()].into_iter().flatten() {
            if let Err(e) = storage.remove_item(SESSION_STORAGE_KEY) {
                log::warn!("Failed to clear session: {:?}", e);
            }
        }
    }
}

fn read_session(storage: &Storage) -> Option<Session> {
    let raw = storage.get_item(SESSION_STORAGE_KEY).ok()??;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            log::warn!("Discarding corrupt session: {}", e);
            None
        }
    }
}

fn local_storage() -> AppResult<Storage> {
    web_sys::window()
        .ok_or_else(|| AppError::Storage("no window".into()))?
        .local_storage()
        .map_err(|e| AppError::Storage(format!("{:?}", e)))?
        .ok_or_else(|| AppError::Storage("localStorage unavailable".into()))
}

fn session_storage() -> AppResult<Storage> {
    web_sys::window()
        .ok_or_else(|| AppError::Storage("no window".into()))?
        .session_storage()
        .map_err(|e| AppError::Storage(format!("{:?}", e)))?
        .ok_or_else(|| AppError::Storage("sessionStorage unavailable".into()))
}

// =============================================================================
// Reactive context
// =============================================================================

/// App-wide session signal, provided by `App`.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: RwSignal<Option<Session>>,
}

impl SessionContext {
    pub fn provide() -> Self {
        let ctx = Self {
            session: create_rw_signal(Session::load()),
        };
        provide_context(ctx);
        ctx
    }

    pub fn get() -> Self {
        expect_context::<SessionContext>()
    }

    pub fn login(&self, session: Session, remember: bool) {
        if let Err(e) = session.save(remember) {
            log::warn!("Session not persisted: {}", e);
        }
        self.session.set(Some(session));
    }

    pub fn logout(&self) {
        Session::clear();
        self.session.set(None);
    }

    pub fn token(&self) -> Option<String> {
        self.session.with_untracked(|s| s.as_ref().map(|s| s.token.clone()))
    }
}

// =============================================================================
// Redirects
// =============================================================================

/// Only allow same-site absolute paths as post-login targets.
pub fn safe_redirect(to: Option<&str>) -> String {
    match to {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_string(),
        _ => DEFAULT_REDIRECT.to_string(),
    }
}

/// Login URL that comes back to `path` afterwards.
pub fn login_path(path: &str) -> String {
    format!(
        "/login?redirectTo={}",
        String::from(js_sys::encode_uri_component(path))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_redirect() {
        assert_eq!(safe_redirect(Some("/projects/42")), "/projects/42");
        assert_eq!(safe_redirect(Some("//evil.example")), "/projects");
        assert_eq!(safe_redirect(Some("https://evil.example")), "/projects");
        assert_eq!(safe_redirect(Some("")), "/projects");
        assert_eq!(safe_redirect(None), "/projects");
    }

    #[test]
    fn test_session_serialization() {
        let session = Session {
            user: User {
                id: "u1".into(),
                email: "ana@example.com".into(),
                first_name: Some("Ana".into()),
                last_name: None,
                is_superuser: false,
            },
            token: "jwt".into(),
        };
        let json = serde_json::to_string(&session).unwrap();
        let restored: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
    }
}
