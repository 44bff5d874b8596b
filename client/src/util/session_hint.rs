//! Persisted "was logged in" hint.
//!
//! The hint only decides whether startup attempts a silent refresh; it is
//! never trusted as proof of a session.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR and native builds
//! read `false` and ignore writes.

#[cfg(test)]
#[path = "session_hint_test.rs"]
mod session_hint_test;

use std::cell::Cell;
use std::rc::Rc;

pub trait HintStore: 'static {
    fn was_logged_in(&self) -> bool;
    fn remember(&self);
    fn forget(&self);
}

impl<H: HintStore> HintStore for Rc<H> {
    fn was_logged_in(&self) -> bool {
        (**self).was_logged_in()
    }

    fn remember(&self) {
        (**self).remember();
    }

    fn forget(&self) {
        (**self).forget();
    }
}

/// Hint kept in `localStorage` under a fixed key.
#[derive(Clone, Copy, Debug)]
pub struct LocalStorageHint {
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    key: &'static str,
}

impl LocalStorageHint {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    #[cfg(feature = "hydrate")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl HintStore for LocalStorageHint {
    fn was_logged_in(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()
                .and_then(|s| s.get_item(self.key).ok().flatten())
                .is_some_and(|v| v == "true")
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    fn remember(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = Self::storage() {
                let _ = storage.set_item(self.key, "true");
            }
        }
    }

    fn forget(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = Self::storage() {
                let _ = storage.remove_item(self.key);
            }
        }
    }
}

/// In-process hint, for SSR and tests.
#[derive(Debug, Default)]
pub struct MemoryHint {
    set: Cell<bool>,
}

impl MemoryHint {
    pub fn new(was_logged_in: bool) -> Self {
        Self { set: Cell::new(was_logged_in) }
    }
}

impl HintStore for MemoryHint {
    fn was_logged_in(&self) -> bool {
        self.set.get()
    }

    fn remember(&self) {
        self.set.set(true);
    }

    fn forget(&self) {
        self.set.set(false);
    }
}
