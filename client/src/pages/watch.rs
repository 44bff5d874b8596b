//! Full-screen player for `/watch/:slug`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Resolves the route slug through `ApiClient::find_by_slug`; unknown or
//! malformed slugs go to `/not-found`. The title overlay and resolution
//! picker hide after a few seconds without pointer movement.

#[cfg(test)]
#[path = "watch_test.rs"]
mod watch_test;

use leptos::prelude::*;

use crate::components::video_player::VideoPlayer;
use crate::config::ClientConfig;
use crate::state::catalog::CatalogEntry;
use crate::util::stream_url::{Resolution, build_stream_url};

#[cfg(feature = "hydrate")]
const OVERLAY_IDLE_MS: u32 = 3_000;

#[component]
pub fn WatchPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let entry = RwSignal::new(None::<CatalogEntry>);
    let error = RwSignal::new(None::<String>);
    let resolution = RwSignal::new(Resolution::default());
    let overlay_visible = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        use leptos_router::NavigateOptions;
        use leptos_router::hooks::{use_navigate, use_params_map};

        use crate::net::catalog::SlugLookup;

        let params = use_params_map();
        let navigate = use_navigate();
        let client = crate::app::use_client();
        Effect::new(move || {
            let raw = params.read().get("slug").unwrap_or_default();
            let Some(client) = client.get() else {
                return;
            };
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let lookup = client.find_by_slug(&raw).await;
                let showing = params.try_with_untracked(|p| p.get("slug")).flatten();
                if entry.is_disposed() || !lookup_is_current(&raw, showing.as_deref()) {
                    log::debug!("dropping lookup for {raw:?}; page moved on");
                    return;
                }
                match lookup {
                    Ok(SlugLookup::Found(found)) => {
                        let _ = entry.try_set(Some(found));
                    }
                    Ok(SlugLookup::NotFound) => {
                        navigate("/not-found", NavigateOptions { replace: true, ..NavigateOptions::default() });
                    }
                    Err(e) => {
                        log::warn!("video lookup failed: {e}");
                        let _ = error.try_set(Some(e.user_message()));
                    }
                }
            });
        });
    }

    let idle_timer = IdleTimer::new(overlay_visible);
    idle_timer.poke();
    on_cleanup(move || idle_timer.cancel());

    let media_host = config.media_host;
    let src = Signal::derive(move || {
        entry.with(|e| {
            e.as_ref()
                .map(|e| build_stream_url(&media_host, e.video.id, resolution.get()))
                .unwrap_or_default()
        })
    });

    view! {
        <div
            class="watch-page"
            class:watch-page--idle=move || !overlay_visible.get()
            on:pointermove=move |_| idle_timer.poke()
        >
            <VideoPlayer src autoplay=true class="watch-page__player"/>
            <Show when=move || overlay_visible.get()>
                <div class="watch-page__overlay">
                    <a class="watch-page__back" href="/videos">"← Back"</a>
                    <h1 class="watch-page__title">
                        {move || entry.with(|e| e.as_ref().map(|e| e.video.title.clone()).unwrap_or_default())}
                    </h1>
                    <label class="watch-page__quality">
                        "Quality "
                        <select on:change=move |ev| {
                            if let Ok(next) = event_target_value(&ev).parse::<Resolution>() {
                                resolution.set(next);
                            }
                        }>
                            {Resolution::ALL
                                .into_iter()
                                .map(|r| {
                                    view! {
                                        <option value=r.as_str() selected=move || resolution.get() == r>
                                            {r.as_str()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                </div>
            </Show>
            {move || error.get().map(|message| view! { <p class="watch-page__error">{message}</p> })}
        </div>
    }
}

/// A finished lookup applies only while the route still shows the slug it
/// was started for. `showing` is `None` once the route is gone.
#[cfg(any(feature = "hydrate", test))]
fn lookup_is_current(requested: &str, showing: Option<&str>) -> bool {
    showing == Some(requested)
}

/// Hides the overlay after a stretch of pointer inactivity.
#[derive(Clone, Copy)]
struct IdleTimer {
    visible: RwSignal<bool>,
    #[cfg(feature = "hydrate")]
    pending: StoredValue<Option<gloo_timers::callback::Timeout>, leptos::reactive::owner::LocalStorage>,
}

impl IdleTimer {
    fn new(visible: RwSignal<bool>) -> Self {
        Self {
            visible,
            #[cfg(feature = "hydrate")]
            pending: StoredValue::new_local(None),
        }
    }

    /// Show the overlay and restart the countdown.
    fn poke(self) {
        self.visible.set(true);
        #[cfg(feature = "hydrate")]
        {
            let visible = self.visible;
            let timeout = gloo_timers::callback::Timeout::new(OVERLAY_IDLE_MS, move || {
                let _ = visible.try_set(false);
            });
            // Replacing the old timeout drops and cancels it.
            self.pending.set_value(Some(timeout));
        }
    }

    fn cancel(self) {
        #[cfg(feature = "hydrate")]
        {
            let _ = self.pending.try_update_value(Option::take);
        }
    }
}
