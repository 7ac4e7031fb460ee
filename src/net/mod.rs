//! Networking modules for the login dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` submits credentials to the server and `types` defines the shared
//! wire and event shapes.

pub mod api;
pub mod types;
