//! Route guard for pages that need a signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes wait for the startup session check before deciding, so a
//! returning user with a valid cookie is never bounced to `/login` while the
//! silent refresh is still in flight.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use futures::StreamExt as _;
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{SessionState, SessionStore, SessionWatch};

pub const LOGIN_ROUTE: &str = "/login";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
}

/// Decision for a settled session; `None` while the startup check is pending.
pub fn decide(state: SessionState) -> Option<GuardDecision> {
    if !state.initial_check_complete {
        return None;
    }
    Some(if state.logged_in { GuardDecision::Allow } else { GuardDecision::RedirectToLogin })
}

/// Wait for the startup check, then read the login state once.
pub async fn evaluate_guard(session: &SessionStore) -> GuardDecision {
    guard_after(session.observe_initial_check_complete(), || session.is_logged_in()).await
}

/// Redirects when the check stream ends without completing.
pub(crate) async fn guard_after(mut check: SessionWatch, logged_in: impl FnOnce() -> bool) -> GuardDecision {
    match check.next().await {
        Some(true) if logged_in() => GuardDecision::Allow,
        _ => GuardDecision::RedirectToLogin,
    }
}

/// Redirect to `/login` whenever the session has settled without a user.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if decide(session.get()) == Some(GuardDecision::RedirectToLogin) {
            navigate(LOGIN_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
