//! The seed credential table.

use entities::{seed, UserRole};

/// Login credentials for one canonical seed actor.
#[derive(Debug, Clone)]
pub struct Credential {
    /// Role this credential authenticates as.
    pub role: UserRole,
    /// Directory id of the actor's user record.
    pub user_id: String,
    /// Login email.
    pub email: String,
    /// Login password.
    pub password: String,
}

/// The fixed role-to-credential table used by [`crate::Session::login`].
///
/// One entry per role, derived from the seed users that carry a password.
#[derive(Debug, Clone)]
pub struct CredentialTable {
    entries: Vec<Credential>,
}

impl CredentialTable {
    /// Builds the table from the seed dataset.
    pub fn seeded() -> Self {
        let entries = seed::users()
            .into_iter()
            .filter_map(|user| {
                user.password.map(|password| Credential {
                    role: user.role,
                    user_id: user.id,
                    email: user.email,
                    password,
                })
            })
            .collect();
        Self { entries }
    }

    /// Returns the credential for `role` when `email` and `password`
    /// exactly match its seed record.
    pub fn verify(&self, role: UserRole, email: &str, password: &str) -> Option<&Credential> {
        self.entries
            .iter()
            .find(|c| c.role == role && c.email == email && c.password == password)
    }
}

impl Default for CredentialTable {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_credential_per_role() {
        let table = CredentialTable::seeded();
        for role in [UserRole::User, UserRole::Admin, UserRole::SuperAdmin] {
            assert_eq!(table.entries.iter().filter(|c| c.role == role).count(), 1);
        }
    }

    #[test]
    fn test_verify_requires_exact_match() {
        let table = CredentialTable::seeded();

        assert!(table
            .verify(UserRole::Admin, seed::ADMIN_EMAIL, seed::ADMIN_PASSWORD)
            .is_some());
        assert!(table
            .verify(UserRole::Admin, seed::ADMIN_EMAIL, "wrongpass")
            .is_none());
        assert!(table
            .verify(UserRole::User, seed::ADMIN_EMAIL, seed::ADMIN_PASSWORD)
            .is_none());
        assert!(table
            .verify(UserRole::Admin, "Admin@Example.com", seed::ADMIN_PASSWORD)
            .is_none());
    }
}
