//! Preference & draft persistence
//!
//! A tiny namespaced key/value layer over whatever durable storage the
//! host offers: browser `localStorage` in WASM builds, an in-memory map
//! for tests and native builds. Failure is deliberately invisible: a
//! write against unavailable storage no-ops and a read behaves as
//! absent, so the session keeps working and merely loses persistence
//! across reloads.

mod memory;

pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
mod local;
#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
pub use local::LocalStore;

/// Prefix shared by every key this application stores, so its entries
/// are distinguishable from unrelated data in the same storage area.
pub const NAMESPACE: &str = "plantuml-previewer";

/// The physical storage key for a logical setting name.
pub fn storage_key(name: &str) -> String {
    format!("{NAMESPACE}-{name}")
}

/// Durable per-browser storage of settings and the diagram draft.
///
/// Implementations take logical setting names (`keybinding-value`,
/// `uml`, ...) and apply the [`NAMESPACE`] prefix themselves. There is
/// no delete: a setting only ever moves from unset to set, and the last
/// write wins. No cross-tab synchronization is attempted.
pub trait SettingsStore {
    /// Last-written value for a setting, or `None` if never written or
    /// storage is unavailable.
    fn read(&self, name: &str) -> Option<String>;

    /// Store a value, overwriting any prior one. Silently no-ops when
    /// storage is unavailable.
    fn write(&self, name: &str, value: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key_is_namespaced() {
        assert_eq!(storage_key("uml"), "plantuml-previewer-uml");
        assert_eq!(
            storage_key("keybinding-value"),
            "plantuml-previewer-keybinding-value"
        );
    }
}
