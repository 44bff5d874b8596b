//! HTTP transport with credential augmentation.
//!
//! Client-side (hydrate): `BrowserTransport` issues credentialed `fetch`
//! calls via `gloo-net` and echoes the anti-forgery cookie into a header on
//! mutating requests. Everything above this layer talks to the `Transport`
//! trait, so session and refresh logic run natively in tests against fakes.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::future::Future;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// Methods that change server state and therefore need the CSRF header.
    pub fn is_mutating(self) -> bool {
        !matches!(self, Self::Get)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// A request relative to the API base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
    /// Whether a 401 on this request may trigger a session refresh and replay.
    pub recover_on_unauthorized: bool,
}

impl HttpRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), body: None, recover_on_unauthorized: true }
    }

    #[cfg(test)]
    pub(crate) fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    #[cfg(test)]
    pub(crate) fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Encode` if `body` cannot be serialized.
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    #[must_use]
    pub fn without_recovery(mut self) -> Self {
        self.recover_on_unauthorized = false;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` when the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Sends one request and reports the raw response.
///
/// Non-2xx statuses are `Ok`; only failures to get a response at all are
/// `Err`. Status handling belongs to `ApiClient`.
pub trait Transport: 'static {
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse, ApiError>>;
}

/// Join the API base and a request path with exactly one slash between them.
pub fn endpoint_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Find `name` in a `document.cookie` style string.
pub fn read_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key.trim() == name).then(|| value.trim().to_owned())
    })
}

/// Header to attach to `method`, given the current cookie string.
pub fn csrf_header(method: Method, cookies: &str, cookie_name: &str, header_name: &str) -> Option<(String, String)> {
    if !method.is_mutating() {
        return None;
    }
    let token = read_cookie(cookies, cookie_name).filter(|t| !t.is_empty())?;
    Some((header_name.to_owned(), token))
}

/// `fetch`-backed transport used in the browser.
#[derive(Clone, Debug)]
pub struct BrowserTransport {
    base_url: String,
}

impl BrowserTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }
}

impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let url = endpoint_url(&self.base_url, &request.path);
            let mut builder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Patch => Request::patch(&url),
                Method::Delete => Request::delete(&url),
            }
            .credentials(web_sys::RequestCredentials::Include);

            if let Some((name, token)) = csrf_header(
                request.method,
                &document_cookies(),
                crate::config::CSRF_COOKIE_NAME,
                crate::config::CSRF_HEADER_NAME,
            ) {
                builder = builder.header(&name, &token);
            }

            let sent = match &request.body {
                Some(body) => builder.json(body).map_err(|e| ApiError::Encode(e.to_string()))?.send().await,
                None => builder.send().await,
            };
            let resp = sent.map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let url = endpoint_url(&self.base_url, &request.path);
            Err(ApiError::Transport(format!("{url}: not available during server render")))
        }
    }
}

#[cfg(feature = "hydrate")]
fn document_cookies() -> String {
    use wasm_bindgen::JsCast as _;

    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
        .and_then(|d| d.cookie().ok())
        .unwrap_or_default()
}
