//! Player lifecycle independent of the browser.
//!
//! DESIGN
//! ======
//! `PlaybackSession` owns the media surface and, when available, the adaptive
//! engine driving it. Choosing the path happens once in `attach`:
//! adaptive engine first, native HLS second, otherwise log and leave the
//! element empty.
//!
//! Teardown order is fixed: destroy the engine, clear the source, reload the
//! element so the browser drops buffered segments. `Drop` runs teardown, so a
//! session that goes out of scope on any path releases the element.

#[cfg(test)]
#[path = "playback_test.rs"]
mod playback_test;

/// The `<video>` element as seen by the player.
pub trait MediaSurface {
    fn supports_native_hls(&self) -> bool;
    fn set_source(&self, url: &str);
    fn clear_source(&self);
    fn reload(&self);
}

/// An adaptive-bitrate engine bound to one surface.
pub trait AdaptiveEngine {
    fn load(&self, url: &str);
    fn destroy(&self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackMode {
    Adaptive,
    Native,
    Unsupported,
}

pub struct PlaybackSession<S: MediaSurface, E: AdaptiveEngine> {
    surface: S,
    engine: Option<E>,
    #[cfg(test)]
    mode: PlaybackMode,
    released: bool,
}

impl<S: MediaSurface, E: AdaptiveEngine> PlaybackSession<S, E> {
    /// Start playback of `url` on `surface`.
    ///
    /// `make_engine` returns `None` when the adaptive engine is unavailable
    /// in this environment.
    pub fn attach(surface: S, url: &str, make_engine: impl FnOnce(&S) -> Option<E>) -> Self {
        let (engine, mode) = match make_engine(&surface) {
            Some(engine) => {
                engine.load(url);
                (Some(engine), PlaybackMode::Adaptive)
            }
            None if surface.supports_native_hls() => {
                surface.set_source(url);
                (None, PlaybackMode::Native)
            }
            None => {
                log::warn!("HLS playback unsupported in this browser: {url}");
                (None, PlaybackMode::Unsupported)
            }
        };
        log::debug!("playback attached ({mode:?}): {url}");
        Self {
            surface,
            engine,
            #[cfg(test)]
            mode,
            released: false,
        }
    }

    #[cfg(test)]
    pub(crate) fn mode(&self) -> PlaybackMode {
        self.mode
    }

    #[cfg(test)]
    pub(crate) fn is_released(&self) -> bool {
        self.released
    }

    /// Release the engine and the element. Later calls do nothing.
    pub fn teardown(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        if let Some(engine) = self.engine.take() {
            engine.destroy();
        }
        self.surface.clear_source();
        self.surface.reload();
    }
}

impl<S: MediaSurface, E: AdaptiveEngine> Drop for PlaybackSession<S, E> {
    fn drop(&mut self) {
        self.teardown();
    }
}
