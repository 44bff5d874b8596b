//! `<video>` element driven by a `PlaybackSession`.
//!
//! DESIGN
//! ======
//! The live session sits in a `PlayerSlot` the parent may hold on to. That
//! lets the catalog release playback before it hides the preview element,
//! instead of waiting for the component's own cleanup.

use leptos::html::Video;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

#[cfg(feature = "hydrate")]
use crate::util::hls::{HlsEngine, VideoSurface, engine_for};
#[cfg(feature = "hydrate")]
use crate::util::playback::PlaybackSession;

#[cfg(feature = "hydrate")]
type ActiveSession = PlaybackSession<VideoSurface, HlsEngine>;
#[cfg(not(feature = "hydrate"))]
type ActiveSession = ();

/// Owner of at most one live playback session.
#[derive(Clone, Copy)]
pub struct PlayerSlot {
    session: StoredValue<Option<ActiveSession>, LocalStorage>,
}

impl PlayerSlot {
    pub fn new() -> Self {
        Self { session: StoredValue::new_local(None) }
    }

    /// Tear down the current session, if any.
    pub fn release(self) {
        // Take first so teardown runs outside the storage borrow.
        let taken = self.session.try_update_value(Option::take).flatten();
        drop(taken);
    }

    #[cfg(feature = "hydrate")]
    fn replace(self, next: ActiveSession) {
        self.release();
        self.session.set_value(Some(next));
    }
}

impl Default for PlayerSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Plays the HLS manifest at `src`, re-attaching whenever it changes.
#[component]
pub fn VideoPlayer(
    #[prop(into)] src: Signal<String>,
    #[prop(optional)] slot: Option<PlayerSlot>,
    #[prop(optional)] muted: bool,
    #[prop(optional)] autoplay: bool,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let slot = slot.unwrap_or_default();
    let video_ref = NodeRef::<Video>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let url = src.get();
        let Some(video) = video_ref.get() else {
            return;
        };
        if url.is_empty() {
            slot.release();
            return;
        }
        slot.replace(PlaybackSession::attach(VideoSurface(video), &url, engine_for));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = src;

    on_cleanup(move || slot.release());

    view! {
        <video
            class=format!("video-player {class}")
            node_ref=video_ref
            controls=true
            playsinline=true
            muted=muted
            autoplay=autoplay
        ></video>
    }
}
