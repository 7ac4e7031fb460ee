//! Storage for the URL a user was headed to before login was required.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards store the target before opening the login dialog; the dialog
//! consumes it once after a successful login.

#[cfg(test)]
#[path = "state_storage_test.rs"]
mod state_storage_test;

use std::cell::RefCell;

pub trait StateStorage {
    /// Previously stored redirect target, if any.
    fn get_url(&self) -> Option<String>;
    /// Store a new target, or clear it with `None`.
    fn store_url(&self, url: Option<&str>);
}

/// `StateStorage` backed by `window.sessionStorage`.
#[derive(Clone, Debug)]
pub struct SessionStateStorage {
    key: String,
}

impl SessionStateStorage {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl StateStorage for SessionStateStorage {
    fn get_url(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten())?;
            let raw = storage.get_item(&self.key).ok().flatten()?;
            serde_json::from_str(&raw).ok()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn store_url(&self, url: Option<&str>) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) else {
                return;
            };
            match url {
                Some(url) => {
                    let Ok(raw) = serde_json::to_string(url) else {
                        return;
                    };
                    let _ = storage.set_item(&self.key, &raw);
                }
                None => {
                    let _ = storage.remove_item(&self.key);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.key, url);
        }
    }
}

/// In-process `StateStorage`, used during SSR and by tests.
#[derive(Debug, Default)]
pub struct MemoryStateStorage {
    url: RefCell<Option<String>>,
}

impl MemoryStateStorage {
    #[must_use]
    pub fn with_url(url: &str) -> Self {
        Self { url: RefCell::new(Some(url.to_owned())) }
    }
}

impl StateStorage for MemoryStateStorage {
    fn get_url(&self) -> Option<String> {
        self.url.borrow().clone()
    }

    fn store_url(&self, url: Option<&str>) {
        *self.url.borrow_mut() = url.map(str::to_owned);
    }
}
