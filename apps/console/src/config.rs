//! Console configuration.

use std::env;

/// Console configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the persisted session snapshot.
    pub session_file: String,
    /// Items per page in transaction listings.
    pub page_size: usize,
    /// Log level.
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let session_file = env::var("PAYDASH_SESSION_FILE")
            .unwrap_or_else(|_| ".paydash/session.json".to_string());

        let page_size = match env::var("PAYDASH_PAGE_SIZE") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("PAYDASH_PAGE_SIZE must be a positive integer"))?,
            Err(_) => 2,
        };
        if page_size == 0 {
            anyhow::bail!("PAYDASH_PAGE_SIZE must be a positive integer");
        }

        let log_level = env::var("PAYDASH_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            session_file,
            page_size,
            log_level,
        })
    }
}
