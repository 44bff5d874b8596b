//! Browser bindings for the `hls.js` engine and the `<video>` element.
//!
//! `hls.js` is loaded by a `<script>` tag in the shell; when it is missing or
//! reports no MSE support, `engine_for` returns `None` and playback falls
//! back to native HLS.

use js_sys::Reflect;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlMediaElement, HtmlVideoElement};

use super::playback::{AdaptiveEngine, MediaSurface};

const HLS_MIME: &str = "application/vnd.apple.mpegurl";
const ERROR_EVENT: &str = "hlsError";

#[wasm_bindgen]
extern "C" {
    #[derive(Clone, Debug)]
    type Hls;

    #[wasm_bindgen(static_method_of = Hls, js_name = isSupported)]
    fn is_supported() -> bool;

    #[wasm_bindgen(constructor)]
    fn new() -> Hls;

    #[wasm_bindgen(method, js_name = loadSource)]
    fn load_source(this: &Hls, url: &str);

    #[wasm_bindgen(method, js_name = attachMedia)]
    fn attach_media(this: &Hls, media: &HtmlMediaElement);

    #[wasm_bindgen(method, js_name = startLoad)]
    fn start_load(this: &Hls);

    #[wasm_bindgen(method, js_name = recoverMediaError)]
    fn recover_media_error(this: &Hls);

    #[wasm_bindgen(method)]
    fn destroy(this: &Hls);

    #[wasm_bindgen(method)]
    fn on(this: &Hls, event: &str, callback: &js_sys::Function);
}

fn hls_available() -> bool {
    Reflect::has(&js_sys::global(), &JsValue::from_str("Hls")).unwrap_or(false)
}

/// `<video>` element adapter.
#[derive(Clone)]
pub struct VideoSurface(pub HtmlVideoElement);

impl MediaSurface for VideoSurface {
    fn supports_native_hls(&self) -> bool {
        !self.0.can_play_type(HLS_MIME).is_empty()
    }

    fn set_source(&self, url: &str) {
        self.0.set_src(url);
    }

    fn clear_source(&self) {
        let _ = self.0.remove_attribute("src");
    }

    fn reload(&self) {
        self.0.load();
    }
}

/// An `hls.js` instance attached to one element.
pub struct HlsEngine {
    hls: Hls,
    _on_error: Closure<dyn FnMut(JsValue, JsValue)>,
}

impl HlsEngine {
    fn attach(surface: &VideoSurface) -> Self {
        let hls = Hls::new();
        hls.attach_media(&surface.0);

        let handle = hls.clone();
        let on_error = Closure::<dyn FnMut(JsValue, JsValue)>::new(move |_event: JsValue, data: JsValue| {
            recover(&handle, &data);
        });
        hls.on(ERROR_EVENT, on_error.as_ref().unchecked_ref());
        Self { hls, _on_error: on_error }
    }
}

/// Fatal network errors restart loading; fatal media errors try the engine's
/// media recovery. Anything else is logged and left to the element.
fn recover(hls: &Hls, data: &JsValue) {
    let field = |name: &str| Reflect::get(data, &JsValue::from_str(name)).ok();
    let fatal = field("fatal").and_then(|v| v.as_bool()).unwrap_or(false);
    let kind = field("type").and_then(|v| v.as_string()).unwrap_or_default();
    let details = field("details").and_then(|v| v.as_string()).unwrap_or_default();

    if !fatal {
        log::debug!("hls: {kind} {details}");
        return;
    }
    match kind.as_str() {
        "networkError" => {
            log::warn!("hls: fatal network error ({details}), restarting load");
            hls.start_load();
        }
        "mediaError" => {
            log::warn!("hls: fatal media error ({details}), recovering");
            hls.recover_media_error();
        }
        _ => log::warn!("hls: unrecoverable error {kind} ({details})"),
    }
}

impl AdaptiveEngine for HlsEngine {
    fn load(&self, url: &str) {
        self.hls.load_source(url);
    }

    fn destroy(&self) {
        self.hls.destroy();
    }
}

/// Adaptive engine for `surface`, if `hls.js` is present and supported.
pub fn engine_for(surface: &VideoSurface) -> Option<HlsEngine> {
    if !hls_available() {
        log::debug!("hls.js not loaded");
        return None;
    }
    if !Hls::is_supported() {
        return None;
    }
    Some(HlsEngine::attach(surface))
}
