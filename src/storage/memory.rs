//! In-memory key-value storage.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::Result;

use super::Storage;

/// Storage that keeps values in a process-local map.
///
/// Used by tests and by sessions that have no data directory. Values do
/// not survive the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.slots.lock().expect("storage lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let slots = self.slots.lock().expect("storage lock poisoned");
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self.slots.lock().expect("storage lock poisoned");
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let mut slots = self.slots.lock().expect("storage lock poisoned");
        Ok(slots.remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());
        assert!(storage.read("anything").unwrap().is_none());
    }

    #[test]
    fn write_then_read() {
        let storage = MemoryStorage::new();
        storage.write("slot", "value").unwrap();
        assert_eq!(storage.read("slot").unwrap().unwrap(), "value");
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn remove_reports_presence() {
        let storage = MemoryStorage::new();
        storage.write("slot", "value").unwrap();

        assert!(storage.remove("slot").unwrap());
        assert!(!storage.remove("slot").unwrap());
    }
}
