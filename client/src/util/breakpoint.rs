//! Responsive preview switching.
//!
//! The catalog shows an inline preview player only on wide viewports. A
//! `(min-width: N px)` media query reports changes; `PreviewController`
//! turns them into show/hide transitions, emitted only on crossings.
//!
//! TRADE-OFFS
//! ==========
//! SSR and native builds have no viewport and report narrow, so the preview
//! renders only after hydration.

#[cfg(test)]
#[path = "breakpoint_test.rs"]
mod breakpoint_test;

pub fn min_width_query(px: u32) -> String {
    format!("(min-width: {px}px)")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewTransition {
    Show,
    Hide,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PreviewController {
    wide: bool,
}

impl PreviewController {
    pub fn new(wide: bool) -> Self {
        Self { wide }
    }

    pub fn is_wide(self) -> bool {
        self.wide
    }

    /// Record the viewport state; returns a transition only on a crossing.
    pub fn on_viewport(&mut self, wide: bool) -> Option<PreviewTransition> {
        if wide == self.wide {
            return None;
        }
        self.wide = wide;
        Some(if wide { PreviewTransition::Show } else { PreviewTransition::Hide })
    }
}

/// Whether the viewport currently matches `(min-width: px)`.
pub fn viewport_is_wide(px: u32) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(&min_width_query(px)).ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = px;
        false
    }
}

/// Live subscription to a min-width media query; the listener is removed on drop.
#[cfg(feature = "hydrate")]
pub struct ViewportWatch {
    query: web_sys::MediaQueryList,
    listener: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(feature = "hydrate")]
impl ViewportWatch {
    /// Call `on_change(wide)` whenever the query's match state changes.
    pub fn min_width(px: u32, mut on_change: impl FnMut(bool) + 'static) -> Option<Self> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let query = web_sys::window()?.match_media(&min_width_query(px)).ok().flatten()?;
        let source = query.clone();
        let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
            on_change(source.matches());
        });
        query
            .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { query, listener })
    }
}

#[cfg(feature = "hydrate")]
impl Drop for ViewportWatch {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;
        let _ = self
            .query
            .remove_event_listener_with_callback("change", self.listener.as_ref().unchecked_ref());
    }
}
