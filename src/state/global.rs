//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use crate::api::client;
use crate::api::models::{CompanySettings, User};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Signed-in user, `None` when logged out
    pub user: RwSignal<Option<User>>,
    /// Company profile used for branding, tax rate, and currency symbol
    pub company: RwSignal<CompanySettings>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree, restoring any saved session
/// so a page reload keeps the user signed in.
pub fn provide_global_state() {
    let session_user = client::load_session().map(|(user, _token)| user);

    let state = GlobalState {
        user: create_rw_signal(session_user),
        company: create_rw_signal(CompanySettings::default()),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Whether a user is signed in
    pub fn is_logged_in(&self) -> bool {
        self.user.with(|u| u.is_some())
    }

    /// Whether the signed-in user has the admin role
    pub fn is_admin(&self) -> bool {
        self.user.with(|u| u.as_ref().map(|u| u.is_admin()).unwrap_or(false))
    }

    /// Store the session and mark the user signed in
    pub fn sign_in(&self, user: User, token: &str) {
        client::store_session(&user, token);
        self.user.set(Some(user));
    }

    /// Drop the session and reset company branding to defaults
    pub fn sign_out(&self) {
        client::clear_session();
        self.user.set(None);
        self.company.set(CompanySettings::default());
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        }).forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        }).forget();
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}
