//! Leptos UI components.

pub mod login_modal;
