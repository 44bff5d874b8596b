//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and media surfaces while reading shared
//! state from Leptos context providers.

pub mod genre_row;
pub mod header;
pub mod protected;
pub mod video_card;
pub mod video_player;
