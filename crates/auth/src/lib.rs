//! Session state and mock authentication for PayDash.
//!
//! This crate provides:
//! - The credential table for the three canonical login actors
//! - The [`Session`] state machine (logged out / logged in)
//! - Snapshot persistence so a session survives an application restart
//!
//! Authentication is deliberately fake: credentials are fixed literal
//! records and the login delay is a cosmetic stand-in for a network
//! round trip.

mod credentials;
mod error;
mod session;
mod snapshot;

pub use credentials::*;
pub use error::*;
pub use session::*;
pub use snapshot::*;

/// Simulated network latency applied before a login attempt is evaluated.
pub const LOGIN_LATENCY: std::time::Duration = std::time::Duration::from_millis(1000);
