//! Authentication failures surfaced by `net::api`.
//!
//! ERROR HANDLING
//! ==============
//! Only the auth service produces these. The login view-model consumes them
//! by flipping its error flag, so nothing here ever reaches the UI as a panic.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("authentication rejected: {status}")]
    Rejected { status: u16 },
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid request body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}
