//! Transaction-related entity definitions.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// Outgoing payment to another party.
    Send,
    /// Incoming payment.
    Receive,
    /// Cash withdrawal.
    Withdrawal,
    /// Cash deposit.
    Deposit,
}

impl TransactionType {
    /// Whether this kind of transaction debits the acting user's wallet.
    pub fn is_debit(self) -> bool {
        matches!(self, Self::Send | Self::Withdrawal)
    }
}

/// Lifecycle status of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    /// Submitted, not yet settled.
    Pending,
    /// Settled successfully.
    Completed,
    /// Settlement failed.
    Failed,
}

impl Default for TransactionStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// A payment transaction. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier. Timestamp-derived, monotonically increasing.
    pub id: String,
    /// Transaction amount. Always positive.
    pub amount: Decimal,
    /// Kind of transaction.
    pub kind: TransactionType,
    /// Lifecycle status.
    pub status: TransactionStatus,
    /// Date the transaction was recorded.
    pub date: NaiveDate,
    /// Human-readable description.
    pub description: String,
    /// Recipient user id, when the recipient is a platform user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<String>,
    /// Recipient display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,
}

/// Input for submitting a new transaction.
///
/// The directory assigns `id` and `date` and fixes the status at
/// [`TransactionStatus::Pending`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTransaction {
    /// Transaction amount. Must be positive.
    pub amount: Decimal,
    /// Kind of transaction.
    pub kind: TransactionType,
    /// Human-readable description.
    pub description: String,
    /// Recipient user id, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<String>,
    /// Recipient display name, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,
}

impl NewTransaction {
    /// Creates a new transaction input.
    pub fn new(amount: Decimal, kind: TransactionType, description: impl Into<String>) -> Self {
        Self {
            amount,
            kind,
            description: description.into(),
            recipient_id: None,
            recipient_name: None,
        }
    }

    /// Sets the recipient user id.
    pub fn with_recipient_id(mut self, id: impl Into<String>) -> Self {
        self.recipient_id = Some(id.into());
        self
    }

    /// Sets the recipient display name.
    pub fn with_recipient_name(mut self, name: impl Into<String>) -> Self {
        self.recipient_name = Some(name.into());
        self
    }
}
