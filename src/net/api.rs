//! Authentication service used by the login dialog.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): `AuthError::Unavailable`, since logging in is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is mapped to `AuthError`; callers decide how to surface it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Credentials;
use crate::error::AuthError;

/// Submits credentials and resolves once the server accepts or rejects them.
#[allow(async_fn_in_trait)]
pub trait AuthService {
    async fn login(&self, credentials: &Credentials) -> Result<(), AuthError>;
}

/// `AuthService` backed by `POST {endpoint}` with a JSON credentials body.
#[derive(Clone, Debug)]
pub struct HttpAuthService {
    endpoint: String,
}

impl HttpAuthService {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn classify_status(status: u16) -> Result<(), AuthError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(AuthError::Rejected { status })
    }
}

impl AuthService for HttpAuthService {
    async fn login(&self, credentials: &Credentials) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .json(credentials)
                .map_err(|e| AuthError::Decode(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Network(e.to_string()))?;
            classify_status(resp.status())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(AuthError::Unavailable)
        }
    }
}
