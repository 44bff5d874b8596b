//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod auth;
pub mod breakpoint;
pub mod form;
#[cfg(feature = "hydrate")]
pub mod hls;
pub mod playback;
pub mod session_hint;
pub mod slug;
pub mod stream_url;
