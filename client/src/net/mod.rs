//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` sends credentialed requests, `client` layers session refresh
//! on top, and `catalog`/`account` are the typed calls pages use. `types`
//! defines the shared wire schema.

pub mod account;
pub mod catalog;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod refresh;
#[cfg(test)]
pub(crate) mod testing;
pub mod transport;
pub mod types;
