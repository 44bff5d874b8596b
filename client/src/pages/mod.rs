//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod catalog;
pub mod change_password;
pub mod forgot_password;
pub mod login;
pub mod not_found;
pub mod register;
pub mod reset_password;
pub mod watch;
