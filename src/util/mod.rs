//! Collaborator seams for the login dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module pairs a narrow trait with the browser-backed implementation
//! the dialog uses at runtime, keeping `state::login` free of web-sys glue.

pub mod events;
pub mod modal;
pub mod navigation;
pub mod state_storage;
