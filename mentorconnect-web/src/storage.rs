//! Browser local-storage backing for the role session.

use gloo_storage::{LocalStorage, Storage};
use shared::models::StorageError;
use shared::session::{ROLE_STORAGE_KEY, RoleStore};

/// Stores the literal role string under `userRole`, not a JSON-encoded value,
/// so existing values written by other clients stay readable.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserRoleStore;

impl RoleStore for BrowserRoleStore {
    fn load(&self) -> Option<String> {
        LocalStorage::raw().get_item(ROLE_STORAGE_KEY).ok().flatten()
    }

    fn save(&self, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(ROLE_STORAGE_KEY, value)
            .map_err(|err| StorageError::Write {
                key: ROLE_STORAGE_KEY.to_string(),
                reason: format!("{err:?}"),
            })
    }

    fn clear(&self) -> Result<(), StorageError> {
        LocalStorage::raw()
            .remove_item(ROLE_STORAGE_KEY)
            .map_err(|err| StorageError::Write {
                key: ROLE_STORAGE_KEY.to_string(),
                reason: format!("{err:?}"),
            })
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use shared::models::Role;
    use shared::session::UserSession;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_role_is_stored_as_plain_string() {
        let store = BrowserRoleStore;
        let mut session = UserSession::default();
        session.sign_in(&store, Role::Mentor).expect("save role");
        assert_eq!(store.load().as_deref(), Some("mentor"));

        session.sign_out(&store).expect("clear role");
        assert_eq!(store.load(), None);
    }
}
