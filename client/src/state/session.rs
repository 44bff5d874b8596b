//! Session store: the single source of truth for "is the user signed in" and
//! "has the startup check finished".
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by `ApiClient`, which performs the only transitions. Route guards and
//! the header read snapshots or subscribe to the two streams below.
//!
//! ORDERING
//! ========
//! Login-state subscribers see nothing until the initial check completes, then
//! the settled value exactly once, then every later transition. On completion
//! the initial-check stream fires before login-state subscribers are notified.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::{Cell, RefCell};

use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};

/// Stream of session values; dropping it unsubscribes.
pub type SessionWatch = UnboundedReceiver<bool>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub logged_in: bool,
    pub initial_check_complete: bool,
}

#[derive(Default)]
pub struct SessionStore {
    state: Cell<SessionState>,
    /// Bumped by every explicit sign-in or sign-out.
    generation: Cell<u64>,
    login_watchers: RefCell<Vec<UnboundedSender<bool>>>,
    check_watchers: RefCell<Vec<UnboundedSender<bool>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.get()
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.get().logged_in
    }

    pub fn is_initial_check_complete(&self) -> bool {
        self.state.get().initial_check_complete
    }

    /// Subscribe to login state.
    pub fn observe_login_state(&self) -> SessionWatch {
        let (tx, rx) = unbounded();
        let state = self.state.get();
        if state.initial_check_complete {
            let _ = tx.unbounded_send(state.logged_in);
        }
        self.login_watchers.borrow_mut().push(tx);
        rx
    }

    /// Yields `true` once the startup check has finished, then ends.
    pub fn observe_initial_check_complete(&self) -> SessionWatch {
        let (tx, rx) = unbounded();
        if self.state.get().initial_check_complete {
            let _ = tx.unbounded_send(true);
        } else {
            self.check_watchers.borrow_mut().push(tx);
        }
        rx
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation.get()
    }

    /// Record a user-initiated sign-in or sign-out.
    ///
    /// Refreshes started before this call no longer decide the session.
    pub(crate) fn transition(&self, logged_in: bool) {
        self.generation.set(self.generation.get().wrapping_add(1));
        self.set_logged_in(logged_in);
    }

    pub(crate) fn set_logged_in(&self, logged_in: bool) {
        let mut state = self.state.get();
        state.logged_in = logged_in;
        self.state.set(state);
        if state.initial_check_complete {
            self.notify_login(logged_in);
        }
    }

    pub(crate) fn complete_initial_check(&self) {
        let mut state = self.state.get();
        if state.initial_check_complete {
            return;
        }
        state.initial_check_complete = true;
        self.state.set(state);

        let waiting = std::mem::take(&mut *self.check_watchers.borrow_mut());
        for tx in waiting {
            let _ = tx.unbounded_send(true);
        }
        self.notify_login(state.logged_in);
    }

    fn notify_login(&self, logged_in: bool) {
        self.login_watchers
            .borrow_mut()
            .retain(|tx| tx.unbounded_send(logged_in).is_ok());
    }

    #[cfg(test)]
    fn login_watcher_count(&self) -> usize {
        self.login_watchers.borrow().len()
    }
}
