//! Credential persistence in localStorage.
//!
//! The bearer token lives under a single key; a missing key means the
//! visitor is logged out.

use gamedesk_core::config::TOKEN_STORAGE_KEY;
use gamedesk_core::error::StorageError;
use gamedesk_core::session::{Credential, CredentialStore};

use super::dom;

/// [`CredentialStore`] backed by `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl CredentialStore for LocalStore {
    fn load(&self) -> Option<Credential> {
        let storage = dom::local_storage()?;
        storage
            .get_item(TOKEN_STORAGE_KEY)
            .ok()
            .flatten()
            .and_then(Credential::new)
    }

    fn save(&self, credential: &Credential) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(TOKEN_STORAGE_KEY, credential.as_str())
            .map_err(|_| StorageError::SaveFailed)
    }

    fn clear(&self) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .remove_item(TOKEN_STORAGE_KEY)
            .map_err(|_| StorageError::RemoveFailed)
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_save_load_clear() {
        let store = LocalStore;
        store.clear().unwrap();
        assert!(store.load().is_none());

        let credential = Credential::new("abc").unwrap();
        store.save(&credential).unwrap();
        assert_eq!(store.load(), Some(credential));
        assert_eq!(
            dom::local_storage().unwrap().get_item(TOKEN_STORAGE_KEY).unwrap().as_deref(),
            Some("abc")
        );

        store.clear().unwrap();
        assert!(store.load().is_none());
    }

    #[wasm_bindgen_test]
    fn test_blank_entry_is_logged_out() {
        dom::local_storage()
            .unwrap()
            .set_item(TOKEN_STORAGE_KEY, "")
            .unwrap();
        assert!(LocalStore.load().is_none());
        LocalStore.clear().unwrap();
    }
}
