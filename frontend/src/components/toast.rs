//! Toast notifications.
//!
//! A [`Toaster`] is provided at the app root; any component can push an
//! error or success message. Toasts expire on their own and can be
//! dismissed by hand.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::config::{MAX_TOASTS, TOAST_DURATION_MS};
use crate::session::SessionContext;
use crate::types::AppError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Success,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Error => "toast toast-error",
            ToastKind::Success => "toast toast-success",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Error => "✖",
            ToastKind::Success => "✔",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Append a toast, dropping the oldest ones beyond `max`.
fn push_bounded(toasts: &mut Vec<Toast>, toast: Toast, max: usize) {
    toasts.push(toast);
    if toasts.len() > max {
        let excess = toasts.len() - max;
        toasts.drain(..excess);
    }
}

#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    pub fn provide() -> Self {
        let toaster = Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        };
        provide_context(toaster);
        toaster
    }

    pub fn get() -> Self {
        expect_context::<Toaster>()
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        match kind {
            ToastKind::Error => log::error!("{}", message),
            ToastKind::Success => log::info!("{}", message),
        }
        self.toasts
            .update(|toasts| push_bounded(toasts, Toast { id, kind, message }, MAX_TOASTS));

        let toaster = *self;
        Timeout::new(TOAST_DURATION_MS, move || toaster.dismiss(id)).forget();
    }
}

/// Show a backend error. An expired session also logs the user out, which
/// sends the route guard back to the login page.
pub fn report_error(toaster: Toaster, session: SessionContext, err: AppError) {
    if err == AppError::Unauthorized {
        session.logout();
    }
    toaster.error(err.to_string());
}

/// Renders the active toasts. Mounted once, at the app root.
#[component]
pub fn Toasts() -> impl IntoView {
    let toaster = Toaster::get();

    view! {
        <div class="toasts">
            <For
                each=move || toaster.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.css_class() role="alert">
                            <span class="toast-icon" aria-hidden="true">{toast.kind.icon()}</span>
                            <p class="toast-message">{toast.message}</p>
                            <button class="toast-close" on:click=move |_| toaster.dismiss(id)>
                                <span class="sr-only">"Close"</span>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u64) -> Toast {
        Toast {
            id,
            kind: ToastKind::Error,
            message: format!("error {}", id),
        }
    }

    #[test]
    fn test_push_bounded_drops_oldest() {
        let mut toasts = Vec::new();
        for id in 0..7 {
            push_bounded(&mut toasts, toast(id), 5);
        }
        assert_eq!(toasts.len(), 5);
        assert_eq!(toasts.first().map(|t| t.id), Some(2));
        assert_eq!(toasts.last().map(|t| t.id), Some(6));
    }
}
