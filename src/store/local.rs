//! Browser localStorage settings store

use web_sys::Storage;

use super::{storage_key, SettingsStore};

/// Settings store backed by the browser's `localStorage`.
///
/// Storage can be unavailable (disabled by the user, private browsing,
/// no window in a worker context); the constructor probes once and the
/// store then degrades to the contract's silent no-op behavior.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            web_sys::console::warn_1(
                &"localStorage unavailable; preferences will not survive reloads".into(),
            );
        }
        Self { storage }
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore for LocalStore {
    fn read(&self, name: &str) -> Option<String> {
        self.storage
            .as_ref()?
            .get_item(&storage_key(name))
            .ok()
            .flatten()
    }

    fn write(&self, name: &str, value: &str) {
        // set_item fails on quota exhaustion; persistence is best-effort.
        if let Some(storage) = &self.storage {
            let _ = storage.set_item(&storage_key(name), value);
        }
    }
}
