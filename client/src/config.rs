//! Deploy-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API base URL and media host are fixed when the WASM bundle is built, so
//! they are read through `option_env!` rather than at runtime. Names agreed
//! with the backend (cookie, header, storage key) are plain constants.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_MEDIA_HOST: &str = "http://localhost:8000";
pub const DEFAULT_PREVIEW_MIN_WIDTH_PX: u32 = 1024;

/// Cookie the backend sets with the anti-forgery token.
pub const CSRF_COOKIE_NAME: &str = "csrftoken";
/// Header mutating requests echo the anti-forgery token in.
pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";
/// `localStorage` key of the "was logged in" hint.
pub const SESSION_HINT_KEY: &str = "streamhall_logged_in";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// REST API root, without trailing slash.
    pub api_base_url: String,
    /// Origin serving `/media/videos/hls/...`, without trailing slash.
    pub media_host: String,
    /// Viewport width at which the inline catalog preview is shown.
    pub preview_min_width_px: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            media_host: DEFAULT_MEDIA_HOST.to_owned(),
            preview_min_width_px: DEFAULT_PREVIEW_MIN_WIDTH_PX,
        }
    }
}

impl ClientConfig {
    /// Build the config baked in at compile time.
    ///
    /// Optional:
    /// - `STREAMHALL_API_BASE_URL`
    /// - `STREAMHALL_MEDIA_HOST`
    /// - `STREAMHALL_PREVIEW_MIN_WIDTH`
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("STREAMHALL_API_BASE_URL"),
            option_env!("STREAMHALL_MEDIA_HOST"),
            option_env!("STREAMHALL_PREVIEW_MIN_WIDTH"),
        )
    }

    fn from_values(api_base_url: Option<&str>, media_host: Option<&str>, preview_min_width: Option<&str>) -> Self {
        Self {
            api_base_url: normalize_base(api_base_url, DEFAULT_API_BASE_URL),
            media_host: normalize_base(media_host, DEFAULT_MEDIA_HOST),
            preview_min_width_px: preview_min_width
                .and_then(|raw| raw.trim().parse::<u32>().ok())
                .filter(|px| *px > 0)
                .unwrap_or(DEFAULT_PREVIEW_MIN_WIDTH_PX),
        }
    }
}

fn normalize_base(raw: Option<&str>, default: &str) -> String {
    let value = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(default);
    value.trim_end_matches('/').to_owned()
}
