//! Session-aware API client.
//!
//! `ApiClient` owns the transport, the persisted hint, the session store and
//! the refresh coordinator. It is the only place session state changes.
//!
//! ERROR HANDLING
//! ==============
//! `refresh` and `logout` never return errors: both end in a definitive local
//! state (`logged_in` true/false) so the UI is never unsure about the session.
//! Recovery from an expired access token is one shared refresh followed by a
//! single replay of each failed request.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::rc::Rc;

use futures::FutureExt as _;

use super::endpoints::Endpoint;
use super::error::{ApiError, UNAUTHORIZED};
use super::refresh::RefreshCoordinator;
use super::transport::{HttpRequest, HttpResponse, Transport};
use super::types::Credentials;
use crate::state::session::SessionStore;
use crate::util::session_hint::HintStore;

struct Inner<T, H> {
    transport: T,
    hints: H,
    session: SessionStore,
    refresh: RefreshCoordinator,
}

pub struct ApiClient<T, H> {
    inner: Rc<Inner<T, H>>,
}

impl<T, H> Clone for ApiClient<T, H> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<T: Transport, H: HintStore> ApiClient<T, H> {
    pub fn new(transport: T, hints: H) -> Self {
        Self {
            inner: Rc::new(Inner { transport, hints, session: SessionStore::new(), refresh: RefreshCoordinator::new() }),
        }
    }

    /// Read-only view of the session for guards and UI.
    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    #[cfg(test)]
    pub(crate) fn is_refreshing(&self) -> bool {
        self.inner.refresh.is_refreshing()
    }

    /// Run the startup session check once.
    ///
    /// With a stored hint this validates the session through a refresh;
    /// without one the check completes immediately as logged out.
    pub async fn start(&self) {
        if self.inner.session.is_initial_check_complete() {
            return;
        }
        if self.inner.hints.was_logged_in() {
            log::debug!("session hint present, validating with refresh");
            self.refresh().await;
        }
        self.inner.session.complete_initial_check();
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns the server's rejection (`ApiError::Status` with its payload) or
    /// a transport failure. Session state is unchanged on error.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let request = Endpoint::Login.request().json(credentials)?;
        let response = self.inner.transport.send(request).await?;
        if !response.is_success() {
            return Err(ApiError::from_response(&response));
        }
        self.inner.hints.remember();
        self.inner.session.transition(true);
        log::info!("signed in");
        Ok(())
    }

    /// Sign out. Always ends logged out, whatever the network says.
    pub async fn logout(&self) {
        match self.inner.transport.send(Endpoint::Logout.request()).await {
            Ok(response) if response.is_success() => {}
            Ok(response) => log::warn!("logout returned {}; clearing session locally", response.status),
            Err(e) => log::warn!("logout failed: {e}; clearing session locally"),
        }
        self.inner.hints.forget();
        self.inner.session.transition(false);
    }

    /// Renew the session cookie. Returns `true` when renewed.
    ///
    /// Joins an outstanding refresh instead of issuing a second one.
    pub async fn refresh(&self) -> bool {
        self.join_refresh().outcome.await
    }

    /// Send a request, recovering once from an expired access token.
    ///
    /// # Errors
    ///
    /// Non-2xx responses become `ApiError::Status`. When recovery fails the
    /// original 401 is returned and the session is signed out.
    pub async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let response = self.inner.transport.send(request.clone()).await?;
        if response.status != UNAUTHORIZED || !request.recover_on_unauthorized {
            return into_result(response);
        }

        let ticket = self.join_refresh();
        if !ticket.leader {
            log::debug!("{} {} waiting on in-flight refresh", request.method.as_str(), request.path);
        }
        if ticket.outcome.await {
            let replay = self.inner.transport.send(request).await?;
            return into_result(replay);
        }

        if ticket.leader {
            log::info!("session refresh failed, signing out");
            self.logout().await;
        }
        Err(ApiError::from_response(&response))
    }

    fn join_refresh(&self) -> super::refresh::RefreshTicket {
        let inner = Rc::clone(&self.inner);
        self.inner
            .refresh
            .join_or_start(move || async move { run_refresh(&inner).await }.boxed_local())
    }
}

async fn run_refresh<T: Transport, H: HintStore>(inner: &Inner<T, H>) -> bool {
    let generation = inner.session.generation();
    let renewed = match inner.transport.send(Endpoint::TokenRefresh.request()).await {
        Ok(response) => response.is_success(),
        Err(e) => {
            log::warn!("token refresh failed: {e}");
            false
        }
    };
    if inner.session.generation() != generation {
        // A login or logout landed while this refresh was in flight.
        log::debug!("discarding stale refresh result (renewed={renewed})");
        return inner.session.is_logged_in();
    }
    if renewed {
        inner.session.set_logged_in(true);
    } else {
        inner.hints.forget();
        inner.session.set_logged_in(false);
    }
    renewed
}

fn into_result(response: HttpResponse) -> Result<HttpResponse, ApiError> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(ApiError::from_response(&response))
    }
}
