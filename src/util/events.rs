//! In-process event fan-out for application-wide notifications.
//!
//! DESIGN
//! ======
//! Listeners register by event name; clones of an `EventManager` share one
//! listener table so any component holding a clone can broadcast.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::net::types::AuthEvent;

pub trait EventBroadcaster {
    fn broadcast(&self, event: &AuthEvent);
}

type Listener = Rc<dyn Fn(&AuthEvent)>;

/// Handle returned by `EventManager::subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subscription(u64);

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, String, Listener)>,
}

#[derive(Clone, Default)]
pub struct EventManager {
    inner: Rc<RefCell<Listeners>>,
}

impl EventManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `listener` for every broadcast whose name equals `name`.
    pub fn subscribe(&self, name: &str, listener: impl Fn(&AuthEvent) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.entries.push((id, name.to_owned(), Rc::new(listener)));
        Subscription(id)
    }

    pub fn unsubscribe(&self, subscription: Subscription) {
        self.inner.borrow_mut().entries.retain(|(id, _, _)| *id != subscription.0);
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }
}

impl EventBroadcaster for EventManager {
    fn broadcast(&self, event: &AuthEvent) {
        // Snapshot so listeners may subscribe or unsubscribe while running.
        let matching: Vec<Listener> = self
            .inner
            .borrow()
            .entries
            .iter()
            .filter(|(_, name, _)| *name == event.name)
            .map(|(_, _, listener)| Rc::clone(listener))
            .collect();
        log::debug!("broadcast {} to {} listener(s)", event.name, matching.len());
        for listener in matching {
            listener(event);
        }
    }
}

impl std::fmt::Debug for EventManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventManager")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
