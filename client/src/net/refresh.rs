//! Single-flight session refresh.
//!
//! Every caller that needs a refresh while one is outstanding attaches to the
//! same shared future, so one failure window produces one refresh request.
//! The slot is cleared by the refresh future itself when it settles.

#[cfg(test)]
#[path = "refresh_test.rs"]
mod refresh_test;

use std::cell::RefCell;
use std::rc::Rc;

use futures::FutureExt as _;
use futures::future::{LocalBoxFuture, Shared};

/// Outcome is `true` when the session was renewed.
pub type RefreshFuture = Shared<LocalBoxFuture<'static, bool>>;

/// Handle returned to a caller needing a refresh.
pub struct RefreshTicket {
    pub outcome: RefreshFuture,
    /// `true` for the caller whose request started this refresh.
    pub leader: bool,
}

#[derive(Default)]
pub struct RefreshCoordinator {
    in_flight: Rc<RefCell<Option<RefreshFuture>>>,
}

impl RefreshCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn is_refreshing(&self) -> bool {
        self.in_flight.borrow().is_some()
    }

    /// Attach to the outstanding refresh, or start one with `start`.
    ///
    /// `start` is only invoked when nothing is in flight.
    pub fn join_or_start<F>(&self, start: F) -> RefreshTicket
    where
        F: FnOnce() -> LocalBoxFuture<'static, bool>,
    {
        if let Some(outcome) = self.in_flight.borrow().as_ref() {
            return RefreshTicket { outcome: outcome.clone(), leader: false };
        }

        let slot = Rc::clone(&self.in_flight);
        let refresh = start();
        let outcome = async move {
            let renewed = refresh.await;
            slot.borrow_mut().take();
            renewed
        }
        .boxed_local()
        .shared();

        *self.in_flight.borrow_mut() = Some(outcome.clone());
        RefreshTicket { outcome, leader: true }
    }
}
