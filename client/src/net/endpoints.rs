//! REST endpoint table.
//!
//! DESIGN
//! ======
//! Session-establishing endpoints (login, logout, refresh, registration and
//! password reset) are built with recovery disabled: a 401 there is a real
//! answer, and retrying logout or refresh through the refresh path would loop.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use super::transport::{HttpRequest, Method};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Register,
    Login,
    Logout,
    TokenRefresh,
    PasswordReset,
    PasswordConfirm { uid: &'a str, token: &'a str },
    SetPassword,
    Videos,
}

impl Endpoint<'_> {
    pub fn path(&self) -> String {
        match self {
            Self::Register => "/register/".to_owned(),
            Self::Login => "/login/".to_owned(),
            Self::Logout => "/logout/".to_owned(),
            Self::TokenRefresh => "/token/refresh/".to_owned(),
            Self::PasswordReset => "/password_reset/".to_owned(),
            Self::PasswordConfirm { uid, token } => format!("/password_confirm/{uid}/{token}/"),
            Self::SetPassword => "/set_password/".to_owned(),
            Self::Videos => "/video/".to_owned(),
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Self::Videos => Method::Get,
            _ => Method::Post,
        }
    }

    /// Whether a 401 from this endpoint should go through session refresh.
    pub fn recovers_on_unauthorized(&self) -> bool {
        matches!(self, Self::Videos | Self::SetPassword)
    }

    pub fn request(&self) -> HttpRequest {
        let request = HttpRequest::new(self.method(), self.path());
        if self.recovers_on_unauthorized() {
            request
        } else {
            request.without_recovery()
        }
    }
}
