//! Registration and password flows.
//!
//! All four calls report server business errors as `ApiError::Status` with
//! the payload intact; pages show them through `ApiError::user_message`.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use serde::Serialize;

use super::client::ApiClient;
use super::endpoints::Endpoint;
use super::error::ApiError;
use super::transport::Transport;
use super::types::{NewPasswordForm, PasswordResetRequest, RegistrationForm};
use crate::util::session_hint::HintStore;
use crate::util::slug::is_path_token;

impl<T: Transport, H: HintStore> ApiClient<T, H> {
    /// # Errors
    ///
    /// Server rejection (e.g. email already taken) or transport failure.
    pub async fn register(&self, form: &RegistrationForm) -> Result<(), ApiError> {
        self.post(Endpoint::Register, form).await
    }

    /// # Errors
    ///
    /// Server rejection or transport failure.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), ApiError> {
        self.post(Endpoint::PasswordReset, &PasswordResetRequest { email: email.trim().to_owned() })
            .await
    }

    /// # Errors
    ///
    /// `ApiError::InvalidLink` without a request when `uid` or `token` is not
    /// a plain path token. Otherwise an expired or rejected link, a rejected
    /// password, or a transport failure.
    pub async fn confirm_password_reset(&self, uid: &str, token: &str, form: &NewPasswordForm) -> Result<(), ApiError> {
        if !is_path_token(uid) || !is_path_token(token) {
            return Err(ApiError::InvalidLink);
        }
        self.post(Endpoint::PasswordConfirm { uid, token }, form).await
    }

    /// Change the signed-in user's password.
    ///
    /// # Errors
    ///
    /// Server rejection, transport failure, or an expired session that could
    /// not be renewed.
    pub async fn set_password(&self, form: &NewPasswordForm) -> Result<(), ApiError> {
        self.post(Endpoint::SetPassword, form).await
    }

    async fn post<B: Serialize>(&self, endpoint: Endpoint<'_>, body: &B) -> Result<(), ApiError> {
        let request = endpoint.request().json(body)?;
        self.send(request).await.map(drop)
    }
}
