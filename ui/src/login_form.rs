//! Login form with per-field validation and debounced submit gating.

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Card, Input};
use crate::field::{form_is_valid, reduce_email, reduce_password, FieldAction, FieldState};

const LOGIN_CSS: Asset = asset!("/assets/login.css");

/// Quiet period after the last validity change before the aggregate form
/// validity is recomputed.
const SETTLE_MS: u64 = 500;

async fn settle() {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(SETTLE_MS)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(SETTLE_MS)).await;
}

/// Email/password login form.
///
/// Each field tracks its own validity per keystroke, but the submit button
/// only becomes enabled once both fields have been valid for [`SETTLE_MS`]
/// with no further change. Submitting calls `on_login` with the raw field
/// values; what happens with them is entirely the caller's concern.
#[component]
pub fn LoginForm(on_login: EventHandler<(String, String)>) -> Element {
    let mut email = use_signal(FieldState::default);
    let mut password = use_signal(FieldState::default);
    let mut form_valid = use_signal(|| false);

    // At most one outstanding debounce task; replaced on every change.
    let mut debounce: Signal<Option<Task>> = use_signal(|| None);

    let email_valid = use_memo(move || email().is_valid);
    let password_valid = use_memo(move || password().is_valid);

    use_effect(move || {
        let email_ok = email_valid();
        let password_ok = password_valid();
        if let Some(task) = *debounce.peek() {
            task.cancel();
        }
        let task = spawn(async move {
            settle().await;
            form_valid.set(form_is_valid(email_ok, password_ok));
            debounce.set(None);
        });
        debounce.set(Some(task));
    });

    use_drop(move || {
        if let Some(task) = *debounce.peek() {
            task.cancel();
        }
    });

    // The disabled attribute is the only gate: no validity check here.
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        tracing::debug!("login form submitted");
        let email_value = email.peek().value.clone();
        let password_value = password.peek().value.clone();
        on_login.call((email_value, password_value));
    };

    rsx! {
        document::Link { rel: "stylesheet", href: LOGIN_CSS }
        Card {
            class: "login",
            form {
                onsubmit: handle_submit,

                div {
                    class: if email().is_valid == Some(false) { "form-control invalid" } else { "form-control" },
                    label { r#for: "email", "E-Mail" }
                    Input {
                        id: "email",
                        r#type: "email",
                        value: email().value,
                        oninput: move |evt: FormEvent| {
                            let next = reduce_email(&email.peek(), FieldAction::Input(evt.value()));
                            email.set(next);
                        },
                        onblur: move |_| {
                            let next = reduce_email(&email.peek(), FieldAction::Blur);
                            email.set(next);
                        },
                    }
                }

                div {
                    class: if password().is_valid == Some(false) { "form-control invalid" } else { "form-control" },
                    label { r#for: "password", "Password" }
                    Input {
                        id: "password",
                        r#type: "password",
                        value: password().value,
                        oninput: move |evt: FormEvent| {
                            let next = reduce_password(&password.peek(), FieldAction::Input(evt.value()));
                            password.set(next);
                        },
                        onblur: move |_| {
                            let next = reduce_password(&password.peek(), FieldAction::Blur);
                            password.set(next);
                        },
                    }
                }

                div {
                    class: "form-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: !form_valid(),
                        "Login"
                    }
                }
            }
        }
    }
}
