//! Wire and event types shared by the login dialog and its collaborators.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Form input submitted to the authentication endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub username: Option<String>,
    pub password: Option<String>,
    pub remember_me: bool,
}

impl Default for Credentials {
    fn default() -> Self {
        Self { username: None, password: None, remember_me: true }
    }
}

impl Credentials {
    /// Drop username and password, keeping the remember-me choice.
    pub fn clear(&mut self) {
        self.username = None;
        self.password = None;
    }
}

/// Application-wide notification sent through an `EventBroadcaster`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthEvent {
    pub name: String,
    pub content: String,
}

impl AuthEvent {
    /// The event announced after a successful login.
    #[must_use]
    pub fn authentication_success(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            content: "Sending Authentication Success".to_owned(),
        }
    }
}

/// Why the dialog was closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissReason {
    LoginSuccess,
    Cancel,
    ToRegister,
    ToRequestReset,
}

impl DismissReason {
    /// Reason string handed to the modal host.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LoginSuccess => "login success",
            Self::Cancel => "cancel",
            Self::ToRegister => "to state register",
            Self::ToRequestReset => "to state requestReset",
        }
    }
}

impl std::fmt::Display for DismissReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
