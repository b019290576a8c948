//! Login page view for the web app.

use dioxus::prelude::*;
use ui::{use_auth, AuthState, LoginForm};

use crate::Route;

/// Login page component for the web app.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();

    // If already signed in, go straight home
    if auth().is_logged_in() {
        nav.replace(Route::Home {});
    }

    let handle_login = move |(email, _password): (String, String)| {
        auth.set(AuthState { user: Some(email) });
        nav.replace(Route::Home {});
    };

    rsx! {
        LoginForm { on_login: handle_login }
    }
}
