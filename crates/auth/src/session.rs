//! The session state machine.

use directory::Directory;
use entities::{User, UserPatch, UserRole};
use serde::{Deserialize, Serialize};

use crate::{
    AuthError, AuthResult, CredentialTable, SessionSnapshot, SnapshotStore, LOGIN_LATENCY,
};

/// The logged-in actor, as a lookup key into the directory.
///
/// The session holds only the identity; the full user record lives in
/// the directory and is resolved on demand, so the two containers can
/// never hold diverging copies of the same logical user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Directory id of the user record.
    pub id: String,
    /// Role the actor logged in as.
    pub role: UserRole,
}

/// The current authentication session.
///
/// Two states: logged out (initial) and logged in. [`Session::login`]
/// is the only transition into the logged-in state; [`Session::logout`]
/// the only one out of it. Every state change overwrites the snapshot
/// in the backing [`SnapshotStore`].
#[derive(Debug)]
pub struct Session<S: SnapshotStore> {
    current: Option<SessionUser>,
    credentials: CredentialTable,
    store: S,
}

impl<S: SnapshotStore> Session<S> {
    /// Creates a session, restoring any snapshot held by `store`.
    ///
    /// A missing or unauthenticated snapshot yields a logged-out
    /// session; storage errors propagate.
    pub fn restore(store: S) -> AuthResult<Self> {
        let current = store
            .load()?
            .filter(|snapshot| snapshot.is_authenticated)
            .and_then(|snapshot| snapshot.current_user);

        if let Some(user) = &current {
            tracing::info!(user_id = %user.id, role = ?user.role, "restored session");
        }

        Ok(Self {
            current,
            credentials: CredentialTable::seeded(),
            store,
        })
    }

    /// Whether an actor is currently logged in.
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// The logged-in actor, if any.
    pub fn current_user(&self) -> Option<&SessionUser> {
        self.current.as_ref()
    }

    /// The logged-in actor's role, if any.
    pub fn current_role(&self) -> Option<UserRole> {
        self.current.as_ref().map(|user| user.role)
    }

    /// Attempts to log in as `role`.
    ///
    /// Sleeps for [`LOGIN_LATENCY`] before evaluating the match; the
    /// delay simulates a network round trip and has no retry or timeout
    /// semantics. On a credential mismatch the session state is left
    /// unchanged.
    pub async fn login(
        &mut self,
        role: UserRole,
        email: &str,
        password: &str,
    ) -> AuthResult<SessionUser> {
        tokio::time::sleep(LOGIN_LATENCY).await;

        let credential = self
            .credentials
            .verify(role, email, password)
            .ok_or(AuthError::InvalidCredentials)?;

        let user = SessionUser {
            id: credential.user_id.clone(),
            role: credential.role,
        };
        tracing::info!(user_id = %user.id, role = ?user.role, "logged in");

        self.current = Some(user.clone());
        self.persist()?;
        Ok(user)
    }

    /// Logs out. Idempotent; logging out of a logged-out session is a
    /// no-op that leaves the state logged out.
    pub fn logout(&mut self) -> AuthResult<()> {
        if let Some(user) = self.current.take() {
            tracing::info!(user_id = %user.id, "logged out");
        }
        self.store.clear()?;
        Ok(())
    }

    /// Resolves the logged-in actor's full record from the directory.
    pub async fn resolve(&self, directory: &Directory) -> Option<User> {
        match &self.current {
            Some(user) => directory.user(&user.id).await,
            None => None,
        }
    }

    /// Applies a profile update for the logged-in actor.
    ///
    /// The patch is written through [`Directory::update_user`], so the
    /// session and the directory always agree on the current user.
    pub async fn update_user(
        &mut self,
        directory: &Directory,
        patch: UserPatch,
    ) -> AuthResult<User> {
        let current = self.current.as_ref().ok_or(AuthError::NotAuthenticated)?;
        let updated = directory.update_user(&current.id, patch).await?;
        Ok(updated)
    }

    fn persist(&self) -> AuthResult<()> {
        let snapshot = SessionSnapshot {
            current_user: self.current.clone(),
            is_authenticated: self.current.is_some(),
        };
        self.store.save(&snapshot)?;
        Ok(())
    }
}
