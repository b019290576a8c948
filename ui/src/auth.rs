//! Authentication context and hooks for the UI.

use dioxus::prelude::*;

/// Authentication state for the application.
///
/// There is no backend: logging in just records the email the user signed
/// in with, and the session lives exactly as long as the process.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthState {
    /// Email address of the signed-in user, if any.
    pub user: Option<String>,
}

impl AuthState {
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth_state = use_signal(AuthState::default);
    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();

    let onclick = move |_| {
        tracing::info!("user signed out");
        auth_state.set(AuthState::default());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
