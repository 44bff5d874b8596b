//! Application state held outside the reactive graph.

pub mod catalog;
pub mod session;
