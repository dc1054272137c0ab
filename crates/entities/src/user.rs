//! User-related entity definitions.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Role of a user within the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Regular account holder.
    User,
    /// Can manage regular users.
    Admin,
    /// Can manage admins and view system statistics.
    SuperAdmin,
}

impl Default for UserRole {
    fn default() -> Self {
        Self::User
    }
}

/// A user account in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier (opaque string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Role within the platform.
    pub role: UserRole,
    /// Whether the account is active.
    pub is_active: bool,
    /// Current wallet balance. Never negative.
    pub wallet_balance: Decimal,
    /// Date the account was created.
    pub joined_date: NaiveDate,
    /// Login password. Only present on the canonical seed actors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl User {
    /// Creates a new active user with a zero balance joined on `joined_date`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: UserRole,
        joined_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
            is_active: true,
            wallet_balance: Decimal::ZERO,
            joined_date,
            password: None,
        }
    }

    /// Sets the wallet balance.
    pub fn with_balance(mut self, balance: Decimal) -> Self {
        self.wallet_balance = balance;
        self
    }

    /// Sets the active flag.
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Sets the login password.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Applies a partial update to this record.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(balance) = patch.wallet_balance {
            self.wallet_balance = balance;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
    }
}

/// Partial update for a [`User`]. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPatch {
    /// New display name.
    pub name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New wallet balance.
    pub wallet_balance: Option<Decimal>,
    /// New active flag.
    pub is_active: Option<bool>,
}

impl UserPatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the email address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the wallet balance.
    pub fn wallet_balance(mut self, balance: Decimal) -> Self {
        self.wallet_balance = Some(balance);
        self
    }

    /// Sets the active flag.
    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

/// Input for creating a new admin account.
///
/// The role is always [`UserRole::Admin`] and the account starts active;
/// neither is caller-controlled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAdmin {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Starting wallet balance.
    pub wallet_balance: Decimal,
}

impl NewAdmin {
    /// Creates a new admin input with a zero starting balance.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            wallet_balance: Decimal::ZERO,
        }
    }

    /// Sets the starting wallet balance.
    pub fn with_balance(mut self, balance: Decimal) -> Self {
        self.wallet_balance = balance;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_user_builder() {
        let user = User::new("7", "Test User", "test@example.com", UserRole::User, date(2024, 6, 1))
            .with_balance(Decimal::new(10_00, 2))
            .with_active(false);

        assert_eq!(user.id, "7");
        assert!(!user.is_active);
        assert_eq!(user.wallet_balance, Decimal::new(10_00, 2));
        assert!(user.password.is_none());
    }

    #[test]
    fn test_patch_merges_only_present_fields() {
        let mut user =
            User::new("7", "Before", "before@example.com", UserRole::User, date(2024, 6, 1))
                .with_balance(Decimal::new(100_00, 2));

        user.apply(UserPatch::new().name("After").wallet_balance(Decimal::new(50_00, 2)));

        assert_eq!(user.name, "After");
        assert_eq!(user.email, "before@example.com");
        assert_eq!(user.wallet_balance, Decimal::new(50_00, 2));
        assert!(user.is_active);
    }
}
