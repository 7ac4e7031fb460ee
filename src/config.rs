//! Login dialog settings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Defaults match the server's routes. A host page can override any subset by
//! embedding a JSON object and passing it through `LoginConfig::from_json`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Endpoint, storage key, routes and event name used by the login dialog.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct LoginConfig {
    pub auth_endpoint: String,
    pub redirect_storage_key: String,
    pub register_route: Vec<String>,
    pub reset_request_route: Vec<String>,
    pub home_route: Vec<String>,
    pub success_event: String,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            auth_endpoint: "/api/authentication".to_owned(),
            redirect_storage_key: "previousUrl".to_owned(),
            register_route: vec!["/register".to_owned()],
            reset_request_route: vec!["/reset".to_owned(), "request".to_owned()],
            home_route: vec![String::new()],
            success_event: "authenticationSuccess".to_owned(),
        }
    }
}

impl LoginConfig {
    /// Parse a JSON override; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when `raw` is not a JSON object of the
    /// expected shape.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Borrow a route stored as owned segments in the form `Navigator` accepts.
pub fn route_segments(route: &[String]) -> Vec<&str> {
    route.iter().map(String::as_str).collect()
}
