//! In-memory settings store

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use super::{storage_key, SettingsStore};

/// Settings store backed by a plain map.
///
/// Stands in for browser storage in unit tests and native builds.
/// Clones share the same backing map, which lets a test hand the "same
/// browser storage" to a second session and exercise restore paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<FxHashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store (a "fresh browser profile").
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries written so far.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SettingsStore for MemoryStore {
    fn read(&self, name: &str) -> Option<String> {
        self.entries.borrow().get(&storage_key(name)).cloned()
    }

    fn write(&self, name: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(storage_key(name), value.to_string());
    }
}
