use log::{debug, warn};
use shared::AuthState;

use crate::storage::error::StorageResult;
use crate::storage::record_store::{CollectionKey, RecordStore};
use crate::storage::traits::SessionStorage;

/// Repository for the single active session
#[derive(Clone)]
pub struct SessionRepository {
    store: RecordStore,
}

impl SessionRepository {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }
}

impl SessionStorage for SessionRepository {
    fn get_auth_state(&self) -> StorageResult<AuthState> {
        match self.store.read_record::<AuthState>(CollectionKey::AuthSession)? {
            Some(state) if state.is_consistent() => Ok(state),
            Some(_) => {
                warn!("Stored session is inconsistent, treating as logged out");
                Ok(AuthState::logged_out())
            }
            None => {
                debug!("No stored session, defaulting to logged out");
                Ok(AuthState::logged_out())
            }
        }
    }

    fn set_auth_state(&self, state: &AuthState) -> StorageResult<()> {
        self.store.write_record(CollectionKey::AuthSession, state)
    }
}
