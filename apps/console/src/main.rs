//! PayDash console walkthrough.
//!
//! Drives the three role journeys of the mock payment dashboard against
//! the in-memory core: a regular user sending money and paging through
//! transactions, an admin toggling account activation, and a super admin
//! managing the admin roster. All state changes go through the named
//! session and directory operations; collections are never touched
//! directly.

mod config;

use anyhow::Result;
use auth::{FileSnapshotStore, Session, SnapshotStore};
use directory::Directory;
use entities::{seed, NewAdmin, NewTransaction, Transaction, TransactionType, UserRole};
use pagination::{page_count, page_slice, page_window, PageItem};
use rust_decimal::Decimal;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(&config.log_level);

    tracing::info!(session_file = %config.session_file, "starting PayDash console");

    let directory = Directory::new();
    let mut session = Session::restore(FileSnapshotStore::new(&config.session_file))?;

    if session.is_authenticated() {
        let restored = session.resolve(&directory).await;
        match restored {
            Some(user) => println!("Restored session for {} ({:?})\n", user.name, user.role),
            None => println!("Restored a session with no matching directory record\n"),
        }
        session.logout()?;
    }

    user_journey(&directory, &mut session, config.page_size).await?;
    admin_journey(&directory, &mut session).await?;
    super_admin_journey(&directory, &mut session).await?;

    Ok(())
}

async fn user_journey<S: SnapshotStore>(
    directory: &Directory,
    session: &mut Session<S>,
    page_size: usize,
) -> Result<()> {
    println!("=== User dashboard ===");
    session
        .login(UserRole::User, seed::USER_EMAIL, seed::USER_PASSWORD)
        .await?;
    let user = session
        .resolve(directory)
        .await
        .ok_or_else(|| anyhow::anyhow!("logged-in user missing from directory"))?;
    println!("Logged in as {} | wallet: {}", user.name, user.wallet_balance);

    let sent = directory
        .add_transaction(
            &user.id,
            NewTransaction::new(Decimal::new(45_00, 2), TransactionType::Send, "Lunch split")
                .with_recipient_name("Sarah Wilson"),
        )
        .await?;
    println!("Sent {} to {}", sent.amount, sent.recipient_name.as_deref().unwrap_or("-"));

    let user = session
        .resolve(directory)
        .await
        .ok_or_else(|| anyhow::anyhow!("logged-in user missing from directory"))?;
    println!("Wallet after send: {}", user.wallet_balance);

    let transactions = directory.transactions().await;
    render_transaction_page(&transactions, 1, page_size);

    session.logout()?;
    Ok(())
}

async fn admin_journey<S: SnapshotStore>(
    directory: &Directory,
    session: &mut Session<S>,
) -> Result<()> {
    println!("\n=== Admin dashboard ===");
    session
        .login(UserRole::Admin, seed::ADMIN_EMAIL, seed::ADMIN_PASSWORD)
        .await?;

    for user in directory.regular_users().await {
        println!(
            "{:<12} {:<20} active: {}",
            user.name, user.email, user.is_active
        );
    }

    let reactivated = directory.update_user_status("5", true).await?;
    println!("Reactivated {}", reactivated.name);

    session.logout()?;
    Ok(())
}

async fn super_admin_journey<S: SnapshotStore>(
    directory: &Directory,
    session: &mut Session<S>,
) -> Result<()> {
    println!("\n=== Super admin dashboard ===");
    session
        .login(
            UserRole::SuperAdmin,
            seed::SUPER_ADMIN_EMAIL,
            seed::SUPER_ADMIN_PASSWORD,
        )
        .await?;

    let stats = directory.system_stats().await;
    println!(
        "Payments: {} | Active users: {} | Revenue: {} | Growth: {}%",
        stats.total_payments, stats.active_users, stats.total_revenue, stats.monthly_growth
    );

    let admin = directory
        .add_admin(NewAdmin::new("Robin Carter", "robin.carter@example.com"))
        .await?;
    println!("Added admin {} ({})", admin.name, admin.id);

    println!("Admins now:");
    for user in directory.admins().await {
        println!("  {:<14} {}", user.name, user.email);
    }

    let removed = directory.remove_admin(&admin.id).await?;
    println!("Removed admin {}", removed.name);

    // Stay logged in so the next run demonstrates snapshot restore.
    println!("Leaving the super admin session logged in.");
    Ok(())
}

/// Prints one page of the transaction list plus the pagination control.
fn render_transaction_page(transactions: &[Transaction], page: u32, page_size: usize) {
    println!("Recent transactions (page {page}):");
    for tx in page_slice(transactions, page, page_size) {
        println!(
            "  {} {:>10} {:<12} {:?} - {}",
            tx.date,
            tx.amount.to_string(),
            format!("{:?}", tx.kind),
            tx.status,
            tx.description
        );
    }

    let window = page_window(page_count(transactions.len(), page_size), page);
    let control: Vec<String> = window
        .iter()
        .map(|item| match item {
            PageItem::Page(n) if *n == page => format!("[{n}]"),
            PageItem::Page(n) => n.to_string(),
            PageItem::Ellipsis => "…".to_string(),
        })
        .collect();
    println!("  {}", control.join(" "));
}

/// Initializes tracing with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry().with(filter).with(fmt::layer()).init();
}
