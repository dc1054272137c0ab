//! In-memory user and transaction directory for PayDash.
//!
//! The [`Directory`] owns the mock platform dataset: the user accounts,
//! the transaction history (newest first), and the display-only system
//! statistics. State is seeded from fixed records at construction and is
//! not persisted anywhere.

mod error;
mod ids;
mod store;

pub use error::*;
pub use store::*;
