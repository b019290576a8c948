//! Landing page shown after a successful login.

use dioxus::prelude::*;
use ui::{use_auth, LogoutButton};
use ui::components::Card;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    if !auth().is_logged_in() {
        nav.replace(Route::Login {});
    }

    let user = auth().user.unwrap_or_default();

    rsx! {
        Card {
            class: "home",
            h1 { "Welcome back!" }
            p { "Signed in as {user}" }
            LogoutButton { class: "btn btn-primary" }
        }
    }
}
