//! Session snapshot persistence.
//!
//! The session mirrors its state into a named storage slot on every
//! mutation and reads it back once at construction. The contract is
//! deliberately thin: write on change, read once at init, treat absence
//! as logged out.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::{SessionUser, SnapshotError};

/// Result type for snapshot store operations.
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Persisted session state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// The logged-in actor, if any.
    pub current_user: Option<SessionUser>,
    /// Whether the session is authenticated.
    pub is_authenticated: bool,
}

/// Backing storage for session snapshots.
pub trait SnapshotStore {
    /// Reads the stored snapshot. `None` means nothing has been stored.
    fn load(&self) -> SnapshotResult<Option<SessionSnapshot>>;

    /// Overwrites the stored snapshot.
    fn save(&self, snapshot: &SessionSnapshot) -> SnapshotResult<()>;

    /// Removes the stored snapshot.
    fn clear(&self) -> SnapshotResult<()>;
}

/// Snapshot store that keeps the snapshot in memory.
///
/// Used in tests and wherever persistence across restarts is not wanted.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    slot: Mutex<Option<SessionSnapshot>>,
}

impl MemorySnapshotStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> SnapshotResult<Option<SessionSnapshot>> {
        Ok(self.slot.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }

    fn save(&self, snapshot: &SessionSnapshot) -> SnapshotResult<()> {
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = Some(snapshot.clone());
        Ok(())
    }

    fn clear(&self) -> SnapshotResult<()> {
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }
}

/// Snapshot store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    /// Creates a store writing to `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> SnapshotResult<Option<SessionSnapshot>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&contents)?))
    }

    fn save(&self, snapshot: &SessionSnapshot) -> SnapshotResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_vec_pretty(snapshot)?)?;
        Ok(())
    }

    fn clear(&self) -> SnapshotResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
