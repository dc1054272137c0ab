//! Platform-wide statistics.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate platform statistics shown on the super-admin dashboard.
///
/// This is a display-only snapshot seeded at startup. It is not derived
/// from the live user or transaction collections and is never updated by
/// directory mutations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemStats {
    /// Total number of payments processed.
    pub total_payments: u64,
    /// Number of active users.
    pub active_users: u64,
    /// Total platform revenue.
    pub total_revenue: Decimal,
    /// Month-over-month growth, in percent.
    pub monthly_growth: Decimal,
}
