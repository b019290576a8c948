//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

pub mod field;
pub use field::{
    form_is_valid, is_valid_email, is_valid_password, reduce_email, reduce_password, FieldAction,
    FieldState,
};

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

mod login_form;
pub use login_form::LoginForm;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
