use shared::models::{Role, StorageError};
use shared::session::UserSession;
use yewdux::{Dispatch, Store};

use crate::storage::BrowserRoleStore;

/// Global application state. The session is restored once by `App` and
/// afterwards only changed through [`update_session`].
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub session: UserSession,
}

impl AppState {
    pub fn role(&self) -> Role {
        self.session.effective_role()
    }
}

/// Runs one session setter against local storage and publishes the result.
///
/// The store is updated even when persisting fails, matching `UserSession`.
pub fn update_session(
    dispatch: &Dispatch<AppState>,
    change: impl FnOnce(&mut UserSession, &BrowserRoleStore) -> Result<(), StorageError>,
) -> Result<(), StorageError> {
    let mut session = dispatch.get().session;
    let result = change(&mut session, &BrowserRoleStore);
    dispatch.reduce_mut(move |state| state.session = session);
    result
}
