//! The in-memory directory store.

use chrono::Utc;
use entities::{
    seed, NewAdmin, NewTransaction, SystemStats, Transaction, TransactionStatus, User, UserPatch,
    UserRole,
};
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use crate::ids::IdSource;
use crate::{DirectoryError, DirectoryResult};

#[derive(Debug)]
struct DirectoryState {
    users: Vec<User>,
    /// Newest first. Ordering is structural: records are prepended on
    /// submission, never sorted at read time.
    transactions: Vec<Transaction>,
    stats: SystemStats,
    ids: IdSource,
}

/// The in-memory directory of users, transactions, and system statistics.
///
/// There is exactly one logical writer (the UI event loop); the lock
/// exists for shared `&self` access, not for parallelism. Every mutation
/// runs to completion once invoked.
#[derive(Debug)]
pub struct Directory {
    inner: RwLock<DirectoryState>,
}

impl Directory {
    /// Creates a directory populated with the seed dataset.
    pub fn new() -> Self {
        Self::with_data(seed::users(), seed::transactions(), seed::system_stats())
    }

    /// Creates a directory with explicit contents.
    pub fn with_data(
        users: Vec<User>,
        transactions: Vec<Transaction>,
        stats: SystemStats,
    ) -> Self {
        Self {
            inner: RwLock::new(DirectoryState {
                users,
                transactions,
                stats,
                ids: IdSource::default(),
            }),
        }
    }

    // =========================================================================
    // Read operations
    // =========================================================================

    /// Returns all users.
    pub async fn users(&self) -> Vec<User> {
        self.inner.read().await.users.clone()
    }

    /// Returns the user with the given id, if any.
    pub async fn user(&self, id: &str) -> Option<User> {
        let state = self.inner.read().await;
        state.users.iter().find(|u| u.id == id).cloned()
    }

    /// Returns all regular (non-admin) users.
    pub async fn regular_users(&self) -> Vec<User> {
        let state = self.inner.read().await;
        state
            .users
            .iter()
            .filter(|u| u.role == UserRole::User)
            .cloned()
            .collect()
    }

    /// Returns all admins.
    pub async fn admins(&self) -> Vec<User> {
        let state = self.inner.read().await;
        state
            .users
            .iter()
            .filter(|u| u.role == UserRole::Admin)
            .cloned()
            .collect()
    }

    /// Returns the transaction history, newest first.
    pub async fn transactions(&self) -> Vec<Transaction> {
        self.inner.read().await.transactions.clone()
    }

    /// Returns the display-only system statistics snapshot.
    pub async fn system_stats(&self) -> SystemStats {
        self.inner.read().await.stats.clone()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Sets a user's active flag.
    pub async fn update_user_status(&self, id: &str, is_active: bool) -> DirectoryResult<User> {
        let mut state = self.inner.write().await;
        let user = state
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| DirectoryError::not_found("User", id))?;

        user.is_active = is_active;
        tracing::debug!(user_id = %id, is_active, "updated user status");
        Ok(user.clone())
    }

    /// Merges a partial update into a user record.
    pub async fn update_user(&self, id: &str, patch: UserPatch) -> DirectoryResult<User> {
        let mut state = self.inner.write().await;
        let user = state
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| DirectoryError::not_found("User", id))?;

        user.apply(patch);
        tracing::debug!(user_id = %id, "updated user");
        Ok(user.clone())
    }

    /// Records a transaction submitted by the user with id `actor_id`.
    ///
    /// Assigns a fresh id and today's date, fixes the status at
    /// [`TransactionStatus::Pending`], and applies the balance change to
    /// the actor's wallet: debits for send/withdrawal, credits for
    /// receive/deposit. A debit larger than the available balance fails
    /// with [`DirectoryError::InsufficientFunds`] and records nothing.
    pub async fn add_transaction(
        &self,
        actor_id: &str,
        input: NewTransaction,
    ) -> DirectoryResult<Transaction> {
        if input.amount <= Decimal::ZERO {
            return Err(DirectoryError::InvalidAmount(input.amount));
        }

        let mut state = self.inner.write().await;
        let actor = state
            .users
            .iter_mut()
            .find(|u| u.id == actor_id)
            .ok_or_else(|| DirectoryError::not_found("User", actor_id))?;

        if input.kind.is_debit() {
            if input.amount > actor.wallet_balance {
                return Err(DirectoryError::InsufficientFunds {
                    requested: input.amount,
                    available: actor.wallet_balance,
                });
            }
            actor.wallet_balance -= input.amount;
        } else {
            actor.wallet_balance += input.amount;
        }

        let transaction = Transaction {
            id: state.ids.next_id(),
            amount: input.amount,
            kind: input.kind,
            status: TransactionStatus::Pending,
            date: Utc::now().date_naive(),
            description: input.description,
            recipient_id: input.recipient_id,
            recipient_name: input.recipient_name,
        };

        tracing::info!(
            transaction_id = %transaction.id,
            actor_id = %actor_id,
            amount = %transaction.amount,
            kind = ?transaction.kind,
            "recorded transaction"
        );
        state.transactions.insert(0, transaction.clone());
        Ok(transaction)
    }

    /// Creates a new admin account.
    ///
    /// Assigns a fresh id and today's joined-date. The account is active
    /// and its role is [`UserRole::Admin`]; neither is caller-controlled.
    pub async fn add_admin(&self, input: NewAdmin) -> DirectoryResult<User> {
        if input.wallet_balance < Decimal::ZERO {
            return Err(DirectoryError::InvalidAmount(input.wallet_balance));
        }

        let mut state = self.inner.write().await;
        let admin = User::new(
            state.ids.next_id(),
            input.name,
            input.email,
            UserRole::Admin,
            Utc::now().date_naive(),
        )
        .with_balance(input.wallet_balance);

        tracing::info!(user_id = %admin.id, email = %admin.email, "created admin");
        state.users.push(admin.clone());
        Ok(admin)
    }

    /// Removes the admin with the given id.
    ///
    /// Only an entry matching both the id and the [`UserRole::Admin`]
    /// role is removed; a regular user or super admin with the same id
    /// is never touched.
    pub async fn remove_admin(&self, id: &str) -> DirectoryResult<User> {
        let mut state = self.inner.write().await;
        let index = state
            .users
            .iter()
            .position(|u| u.id == id && u.role == UserRole::Admin)
            .ok_or_else(|| DirectoryError::not_found("Admin", id))?;

        let removed = state.users.remove(index);
        tracing::info!(user_id = %id, "removed admin");
        Ok(removed)
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities::TransactionType;

    fn send(amount: Decimal) -> NewTransaction {
        NewTransaction::new(amount, TransactionType::Send, "test payment")
            .with_recipient_name("Test Merchant")
    }

    #[tokio::test]
    async fn test_seeded_directory_shape() {
        let directory = Directory::new();

        assert_eq!(directory.users().await.len(), 5);
        assert_eq!(directory.regular_users().await.len(), 3);
        assert_eq!(directory.admins().await.len(), 1);
        assert_eq!(directory.transactions().await.len(), 3);
        assert_eq!(directory.system_stats().await.total_payments, 125_000);
    }

    #[tokio::test]
    async fn test_update_user_status_toggles_flag() {
        let directory = Directory::new();

        let updated = directory.update_user_status("5", true).await.unwrap();
        assert!(updated.is_active);

        let updated = directory.update_user_status("5", false).await.unwrap();
        assert!(!updated.is_active);
    }

    #[tokio::test]
    async fn test_update_user_status_unknown_id_is_not_found() {
        let directory = Directory::new();

        let err = directory.update_user_status("999", true).await.unwrap_err();
        assert!(matches!(err, DirectoryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_add_transaction_prepends_newest_first() {
        let directory = Directory::new();

        let first = directory
            .add_transaction("1", send(Decimal::new(10_00, 2)))
            .await
            .unwrap();
        let second = directory
            .add_transaction("1", send(Decimal::new(20_00, 2)))
            .await
            .unwrap();

        let transactions = directory.transactions().await;
        assert_eq!(transactions[0].id, second.id);
        assert_eq!(transactions[1].id, first.id);
    }

    #[tokio::test]
    async fn test_transaction_ids_are_unique_and_increasing() {
        let directory = Directory::new();

        let mut ids: Vec<i64> = Vec::new();
        for _ in 0..20 {
            let tx = directory
                .add_transaction("1", send(Decimal::new(1_00, 2)))
                .await
                .unwrap();
            ids.push(tx.id.parse().unwrap());
        }

        for pair in ids.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[tokio::test]
    async fn test_send_debits_and_checks_balance() {
        let directory = Directory::new();

        // John starts at 2500.50.
        directory
            .add_transaction("1", send(Decimal::new(500_50, 2)))
            .await
            .unwrap();
        let john = directory.user("1").await.unwrap();
        assert_eq!(john.wallet_balance, Decimal::new(2_000_00, 2));

        let err = directory
            .add_transaction("1", send(Decimal::new(9_999_00, 2)))
            .await
            .unwrap_err();
        assert!(matches!(err, DirectoryError::InsufficientFunds { .. }));

        // The failed submission recorded nothing and changed no balance.
        let john = directory.user("1").await.unwrap();
        assert_eq!(john.wallet_balance, Decimal::new(2_000_00, 2));
        assert_eq!(directory.transactions().await.len(), 4);
    }

    #[tokio::test]
    async fn test_deposit_credits_balance() {
        let directory = Directory::new();

        directory
            .add_transaction(
                "1",
                NewTransaction::new(Decimal::new(100_00, 2), TransactionType::Deposit, "top-up"),
            )
            .await
            .unwrap();

        let john = directory.user("1").await.unwrap();
        assert_eq!(john.wallet_balance, Decimal::new(2_600_50, 2));
    }

    #[tokio::test]
    async fn test_add_transaction_rejects_non_positive_amounts() {
        let directory = Directory::new();

        let err = directory
            .add_transaction("1", send(Decimal::ZERO))
            .await
            .unwrap_err();
        assert!(matches!(err, DirectoryError::InvalidAmount(_)));

        let err = directory
            .add_transaction("1", send(Decimal::new(-5_00, 2)))
            .await
            .unwrap_err();
        assert!(matches!(err, DirectoryError::InvalidAmount(_)));
    }

    #[tokio::test]
    async fn test_add_transaction_status_is_always_pending() {
        let directory = Directory::new();

        let tx = directory
            .add_transaction("1", send(Decimal::new(10_00, 2)))
            .await
            .unwrap();
        assert_eq!(tx.status, TransactionStatus::Pending);
    }

    #[tokio::test]
    async fn test_add_admin_assigns_fresh_identity() {
        let directory = Directory::new();

        let admin = directory
            .add_admin(NewAdmin::new("New Admin", "new.admin@example.com"))
            .await
            .unwrap();

        assert_eq!(admin.role, UserRole::Admin);
        assert!(admin.is_active);
        assert_eq!(admin.joined_date, Utc::now().date_naive());

        let users = directory.users().await;
        assert_eq!(users.len(), 6);
        assert_eq!(users.iter().filter(|u| u.id == admin.id).count(), 1);
    }

    #[tokio::test]
    async fn test_add_admin_rejects_negative_balance() {
        let directory = Directory::new();

        let input = NewAdmin::new("Bad Admin", "bad@example.com")
            .with_balance(Decimal::new(-1_00, 2));
        let err = directory.add_admin(input).await.unwrap_err();
        assert!(matches!(err, DirectoryError::InvalidAmount(_)));
    }

    #[tokio::test]
    async fn test_remove_admin_removes_exactly_the_admin() {
        let directory = Directory::new();

        let removed = directory.remove_admin("2").await.unwrap();
        assert_eq!(removed.name, "Jane Smith");
        assert_eq!(directory.users().await.len(), 4);
        assert!(directory.admins().await.is_empty());
    }

    #[tokio::test]
    async fn test_remove_admin_never_removes_other_roles() {
        let directory = Directory::new();

        // "1" is a regular user, "3" a super admin.
        for id in ["1", "3", "999"] {
            let err = directory.remove_admin(id).await.unwrap_err();
            assert!(matches!(err, DirectoryError::NotFound { .. }));
        }
        assert_eq!(directory.users().await.len(), 5);
    }
}
