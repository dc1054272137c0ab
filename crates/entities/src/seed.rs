//! Literal seed records for the mock dataset.
//!
//! There is no loading step and no external configuration: the directory
//! and the credential table are initialized from these fixed records at
//! process start.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{
    SystemStats, Transaction, TransactionStatus, TransactionType, User, UserRole,
};

/// Canonical user-role login email.
pub const USER_EMAIL: &str = "user@example.com";
/// Canonical admin-role login email.
pub const ADMIN_EMAIL: &str = "admin@example.com";
/// Canonical super-admin-role login email.
pub const SUPER_ADMIN_EMAIL: &str = "superadmin@example.com";

/// Canonical user-role login password.
pub const USER_PASSWORD: &str = "userpass";
/// Canonical admin-role login password.
pub const ADMIN_PASSWORD: &str = "adminpass";
/// Canonical super-admin-role login password.
pub const SUPER_ADMIN_PASSWORD: &str = "superpass";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Seed users. The three canonical login actors carry credentials; the
/// remaining accounts exist only to populate the admin views.
pub fn users() -> Vec<User> {
    vec![
        User::new("1", "John Doe", USER_EMAIL, UserRole::User, date(2024, 1, 15))
            .with_balance(Decimal::new(2_500_50, 2))
            .with_password(USER_PASSWORD),
        User::new("2", "Jane Smith", ADMIN_EMAIL, UserRole::Admin, date(2023, 8, 20))
            .with_balance(Decimal::new(5_000_00, 2))
            .with_password(ADMIN_PASSWORD),
        User::new(
            "3",
            "Alex Johnson",
            SUPER_ADMIN_EMAIL,
            UserRole::SuperAdmin,
            date(2023, 1, 10),
        )
        .with_balance(Decimal::new(10_000_00, 2))
        .with_password(SUPER_ADMIN_PASSWORD),
        User::new("4", "Sarah Wilson", "sarah@example.com", UserRole::User, date(2024, 2, 10))
            .with_balance(Decimal::new(1_800_25, 2)),
        User::new("5", "Mike Brown", "mike@example.com", UserRole::User, date(2024, 3, 5))
            .with_balance(Decimal::new(950_75, 2))
            .with_active(false),
    ]
}

/// Seed transactions, newest first.
pub fn transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "1".to_string(),
            amount: Decimal::new(250_00, 2),
            kind: TransactionType::Send,
            status: TransactionStatus::Completed,
            date: date(2024, 7, 7),
            description: "Payment to merchant".to_string(),
            recipient_id: None,
            recipient_name: Some("Amazon Store".to_string()),
        },
        Transaction {
            id: "2".to_string(),
            amount: Decimal::new(100_50, 2),
            kind: TransactionType::Receive,
            status: TransactionStatus::Completed,
            date: date(2024, 7, 6),
            description: "Refund from store".to_string(),
            recipient_id: None,
            recipient_name: Some("Tech Store".to_string()),
        },
        Transaction {
            id: "3".to_string(),
            amount: Decimal::new(75_25, 2),
            kind: TransactionType::Withdrawal,
            status: TransactionStatus::Pending,
            date: date(2024, 7, 5),
            description: "ATM withdrawal".to_string(),
            recipient_id: None,
            recipient_name: None,
        },
    ]
}

/// Seed system statistics.
pub fn system_stats() -> SystemStats {
    SystemStats {
        total_payments: 125_000,
        active_users: 1_250,
        total_revenue: Decimal::new(2_500_000_00, 2),
        monthly_growth: Decimal::new(12_5, 1),
    }
}
