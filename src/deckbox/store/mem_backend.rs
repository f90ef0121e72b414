use super::backend::StorageBackend;
use crate::error::{DeckboxError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

/// In-memory storage backend for testing.
///
/// Uses `Rc<RefCell<..>>` since deckbox is single-threaded. Clones share the
/// same slots, so a test can hand one clone to a store and keep another to
/// inspect (or corrupt) what was persisted.
#[derive(Clone, Default)]
pub struct MemBackend {
    slots: Rc<RefCell<HashMap<String, String>>>,
    simulate_read_error: Rc<Cell<bool>>,
    simulate_write_error: Rc<Cell<bool>>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable read error simulation for testing degraded startup.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Test helper: raw value under `key`, bypassing error simulation.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    /// Test helper: store a raw value directly (e.g. corrupt JSON).
    pub fn set_raw(&self, key: &str, value: &str) {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        if self.simulate_read_error.get() {
            return Err(DeckboxError::PersistenceRead {
                key: key.to_string(),
                reason: "Simulated read error".to_string(),
            });
        }
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(DeckboxError::PersistenceWrite {
                key: key.to_string(),
                reason: "Simulated write error".to_string(),
            });
        }
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn location(&self, key: &str) -> PathBuf {
        PathBuf::from(format!("memory://{}", key))
    }
}
