//! The signed-in user's role, with one explicit lifecycle.
//!
//! The role is read from storage once when the app starts and afterwards only
//! changes through [`UserSession::sign_in`], [`UserSession::switch_role`] and
//! [`UserSession::sign_out`]. Pages read it from the session instead of
//! touching storage themselves.

use std::cell::RefCell;

use serde::{Deserialize, Serialize};

use crate::models::{Role, StorageError};

/// Storage key holding the literal `"mentor"` or `"mentee"`.
pub const ROLE_STORAGE_KEY: &str = "userRole";

/// Persistence seam for the raw role string.
pub trait RoleStore {
    /// Reads the stored value, `None` when nothing is stored.
    fn load(&self) -> Option<String>;

    fn save(&self, value: &str) -> Result<(), StorageError>;

    fn clear(&self) -> Result<(), StorageError>;
}

/// In-memory [`RoleStore`] used by tests and non-browser callers.
#[derive(Debug, Default)]
pub struct MemoryRoleStore {
    value: RefCell<Option<String>>,
}

impl MemoryRoleStore {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: RefCell::new(Some(value.to_string())),
        }
    }
}

impl RoleStore for MemoryRoleStore {
    fn load(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn save(&self, value: &str) -> Result<(), StorageError> {
        *self.value.borrow_mut() = Some(value.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.value.borrow_mut().take();
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    role: Option<Role>,
}

impl UserSession {
    /// Restores the session from storage. Unknown stored values are ignored.
    pub fn restore(store: &impl RoleStore) -> Self {
        let role = store.load().and_then(|raw| match raw.parse::<Role>() {
            Ok(role) => Some(role),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring stored role");
                None
            }
        });
        tracing::debug!(role = ?role, "session restored");
        Self { role }
    }

    /// Starts a session as `role` and persists it.
    ///
    /// The in-memory role changes even when persisting fails.
    pub fn sign_in(&mut self, store: &impl RoleStore, role: Role) -> Result<(), StorageError> {
        self.role = Some(role);
        tracing::info!(role = %role, "signed in");
        store.save(role.as_str())
    }

    pub fn switch_role(&mut self, store: &impl RoleStore, role: Role) -> Result<(), StorageError> {
        self.role = Some(role);
        tracing::info!(role = %role, "role switched");
        store.save(role.as_str())
    }

    /// Ends the session and removes the stored role.
    pub fn sign_out(&mut self, store: &impl RoleStore) -> Result<(), StorageError> {
        self.role = None;
        tracing::info!("signed out");
        store.clear()
    }

    pub const fn role(&self) -> Option<Role> {
        self.role
    }

    /// The role pages render for; mentee when nobody is signed in.
    pub fn effective_role(&self) -> Role {
        self.role.unwrap_or_default()
    }

    pub const fn is_signed_in(&self) -> bool {
        self.role.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct FailingStore;

    impl RoleStore for FailingStore {
        fn load(&self) -> Option<String> {
            None
        }

        fn save(&self, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: ROLE_STORAGE_KEY.into(),
                reason: "quota exceeded".into(),
            })
        }

        fn clear(&self) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("private mode".into()))
        }
    }

    #[test]
    fn test_restore_reads_stored_role() {
        let store = MemoryRoleStore::with_value("mentor");
        let session = UserSession::restore(&store);
        assert_eq!(session.role(), Some(Role::Mentor));
        assert!(session.is_signed_in());
    }

    #[test]
    fn test_restore_ignores_unknown_value() {
        let store = MemoryRoleStore::with_value("admin");
        let session = UserSession::restore(&store);
        assert_eq!(session.role(), None);
        assert_eq!(session.effective_role(), Role::Mentee);
    }

    #[test]
    fn test_sign_in_switch_and_sign_out_persist() {
        let store = MemoryRoleStore::default();
        let mut session = UserSession::restore(&store);
        assert!(!session.is_signed_in());

        session.sign_in(&store, Role::Mentee).unwrap();
        assert_eq!(store.load().as_deref(), Some("mentee"));

        session.switch_role(&store, Role::Mentor).unwrap();
        assert_eq!(store.load().as_deref(), Some("mentor"));
        assert_eq!(session.effective_role(), Role::Mentor);

        session.sign_out(&store).unwrap();
        assert_eq!(store.load(), None);
        assert_eq!(session.role(), None);
    }

    #[test]
    fn test_storage_failure_still_updates_memory() {
        let mut session = UserSession::default();
        let err = session.sign_in(&FailingStore, Role::Mentor).unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
        assert_eq!(session.role(), Some(Role::Mentor));

        assert!(session.sign_out(&FailingStore).is_err());
        assert!(!session.is_signed_in());
    }
}
