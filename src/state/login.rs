//! View-model behind the login dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the credentials form and the authentication error flag. Everything
//! outside the dialog (server, redirect storage, router, event bus, modal
//! host) is reached through the traits in `net::api` and `util`.
//!
//! DESIGN
//! ======
//! Operations take `&self` with `Cell`/`RefCell` state so the rendered
//! component can share one instance between event handlers and the spawned
//! login task without holding a borrow across the await.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::cell::{Cell, RefCell};

use crate::config::{LoginConfig, route_segments};
use crate::net::api::AuthService;
use crate::net::types::{AuthEvent, Credentials, DismissReason};
use crate::util::events::EventBroadcaster;
use crate::util::modal::ModalHandle;
use crate::util::navigation::{Navigator, is_auth_route};
use crate::util::state_storage::StateStorage;

pub struct LoginModal<A, S, N, E, M> {
    credentials: RefCell<Credentials>,
    authentication_error: Cell<bool>,
    focus_username: Cell<bool>,
    config: LoginConfig,
    auth: A,
    storage: S,
    navigator: N,
    events: E,
    modal: M,
}

impl<A, S, N, E, M> LoginModal<A, S, N, E, M>
where
    A: AuthService,
    S: StateStorage,
    N: Navigator,
    E: EventBroadcaster,
    M: ModalHandle,
{
    pub fn new(auth: A, storage: S, navigator: N, events: E, modal: M) -> Self {
        Self {
            credentials: RefCell::new(Credentials::default()),
            authentication_error: Cell::new(false),
            focus_username: Cell::new(false),
            config: LoginConfig::default(),
            auth,
            storage,
            navigator,
            events,
            modal,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: LoginConfig) -> Self {
        self.config = config;
        self
    }

    pub fn credentials(&self) -> Credentials {
        self.credentials.borrow().clone()
    }

    pub fn set_credentials(&self, credentials: Credentials) {
        *self.credentials.borrow_mut() = credentials;
    }

    pub fn set_username(&self, value: &str) {
        self.credentials.borrow_mut().username = non_empty(value);
    }

    pub fn set_password(&self, value: &str) {
        self.credentials.borrow_mut().password = non_empty(value);
    }

    pub fn set_remember_me(&self, value: bool) {
        self.credentials.borrow_mut().remember_me = value;
    }

    /// Whether the last login attempt was rejected.
    pub fn authentication_error(&self) -> bool {
        self.authentication_error.get()
    }

    /// True once after `open`; the component uses it to focus the username input.
    pub fn take_focus_request(&self) -> bool {
        self.focus_username.replace(false)
    }

    /// Prepare the dialog for display.
    pub fn open(&self) {
        self.authentication_error.set(false);
        self.focus_username.set(true);
    }

    /// Submit the current credentials.
    ///
    /// Failure only sets the error flag; the dialog stays open for another try.
    pub async fn login(&self) {
        let credentials = self.credentials();
        log::debug!("login attempt for {:?}", credentials.username);
        match self.auth.login(&credentials).await {
            Ok(()) => self.finish_login(),
            Err(e) => {
                log::warn!("login failed: {e}");
                self.authentication_error.set(true);
            }
        }
    }

    fn finish_login(&self) {
        self.authentication_error.set(false);
        self.modal.dismiss(DismissReason::LoginSuccess);

        if is_auth_route(&self.navigator.current_url()) {
            self.navigator.navigate(&route_segments(&self.config.home_route));
        }

        self.events
            .broadcast(&AuthEvent::authentication_success(&self.config.success_event));

        // Consumed once: clear before following it.
        if let Some(redirect) = self.storage.get_url() {
            self.storage.store_url(None);
            self.navigator.navigate(&[redirect.as_str()]);
        }
    }

    pub fn cancel(&self) {
        self.credentials.borrow_mut().clear();
        self.authentication_error.set(false);
        self.modal.dismiss(DismissReason::Cancel);
    }

    pub fn register(&self) {
        self.modal.dismiss(DismissReason::ToRegister);
        self.navigator.navigate(&route_segments(&self.config.register_route));
    }

    pub fn request_reset_password(&self) {
        self.modal.dismiss(DismissReason::ToRequestReset);
        self.navigator.navigate(&route_segments(&self.config.reset_request_route));
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() { None } else { Some(value.to_owned()) }
}
