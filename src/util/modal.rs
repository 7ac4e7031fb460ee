//! Handle the login dialog uses to close itself.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::net::types::DismissReason;

pub trait ModalHandle {
    fn dismiss(&self, reason: DismissReason);
}

/// `ModalHandle` that forwards dismissals to the host's close callback.
#[derive(Clone)]
pub struct ActiveModal {
    on_dismiss: Rc<dyn Fn(DismissReason)>,
    last_reason: Rc<Cell<Option<DismissReason>>>,
}

impl ActiveModal {
    pub fn new(on_dismiss: impl Fn(DismissReason) + 'static) -> Self {
        Self {
            on_dismiss: Rc::new(on_dismiss),
            last_reason: Rc::new(Cell::new(None)),
        }
    }

    /// Reason of the most recent dismissal, if the dialog has been closed.
    #[must_use]
    pub fn last_reason(&self) -> Option<DismissReason> {
        self.last_reason.get()
    }
}

impl ModalHandle for ActiveModal {
    fn dismiss(&self, reason: DismissReason) {
        log::debug!("login dialog dismissed: {reason}");
        self.last_reason.set(Some(reason));
        (self.on_dismiss)(reason);
    }
}

impl std::fmt::Debug for ActiveModal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActiveModal")
            .field("last_reason", &self.last_reason.get())
            .finish_non_exhaustive()
    }
}
