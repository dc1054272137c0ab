//! Core entity definitions for PayDash.
//!
//! This crate defines the data types shared across the PayDash mock
//! payment platform: users, transactions, system statistics, and the
//! literal seed records the in-memory stores start from.

mod stats;
mod transaction;
mod user;

pub mod seed;

pub use stats::*;
pub use transaction::*;
pub use user::*;
