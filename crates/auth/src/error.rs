//! Authentication error types.

use thiserror::Error;

/// Errors that can occur while persisting or restoring a session snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Reading or writing the backing storage failed.
    #[error("Snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing or deserializing the snapshot failed.
    #[error("Snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors that can occur during session operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Role, email, and password did not match the seed record.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The operation requires a logged-in session.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// A directory lookup or write-through failed.
    #[error(transparent)]
    Directory(#[from] directory::DirectoryError),

    /// Snapshot persistence failed.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// Result type for session operations.
pub type AuthResult<T> = Result<T, AuthError>;
