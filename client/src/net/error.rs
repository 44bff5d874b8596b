//! Error type for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses keep the server's JSON payload so business errors (for
//! example a registration conflict) can be shown to the user verbatim.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

use super::transport::HttpResponse;

pub const UNAUTHORIZED: u16 = 401;

/// Keys checked, in order, for a top-level human-readable message.
const MESSAGE_KEYS: [&str; 4] = ["detail", "error", "message", "non_field_errors"];

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("request failed: {status}")]
    Status { status: u16, payload: Option<Value> },
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid request body: {0}")]
    Encode(String),
    #[error("malformed link parameter")]
    InvalidLink,
}

impl ApiError {
    /// Build a status error, keeping the body when it parses as JSON.
    pub fn from_response(response: &HttpResponse) -> Self {
        let payload = serde_json::from_str::<Value>(&response.body).ok();
        Self::Status { status: response.status, payload }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(UNAUTHORIZED)
    }

    /// Text suitable for showing under a form.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { status, payload } => payload
                .as_ref()
                .and_then(payload_message)
                .unwrap_or_else(|| format!("Request failed ({status}).")),
            Self::Transport(_) => "Could not reach the server. Check your connection.".to_owned(),
            Self::Decode(_) | Self::Encode(_) => "Unexpected response from the server.".to_owned(),
            Self::InvalidLink => "This link is invalid. Request a new one.".to_owned(),
        }
    }
}

/// Pull the first message out of a DRF-style error payload.
pub(crate) fn payload_message(payload: &Value) -> Option<String> {
    match payload {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_owned()),
        Value::Array(items) => items.iter().find_map(payload_message),
        Value::Object(map) => MESSAGE_KEYS
            .iter()
            .filter_map(|key| map.get(*key))
            .chain(map.values())
            .find_map(payload_message),
        _ => None,
    }
}
