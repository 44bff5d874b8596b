//! Wire DTOs for the REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON exactly so serde needs no renames on
//! the hot paths; optional catalog fields default instead of failing the list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A catalog record from `GET /video/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Absolute or host-relative thumbnail URL; empty when missing.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub thumbnail_url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
    /// ISO-8601 creation time as sent by the server.
    pub created_at: String,
    pub slug: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegistrationForm {
    pub email: String,
    pub password: String,
    pub confirmed_password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

/// New password for the reset-confirm and set-password endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewPasswordForm {
    pub new_password: String,
    pub confirm_password: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
