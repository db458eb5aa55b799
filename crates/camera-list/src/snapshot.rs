//! Snapshot Persistence
//!
//! A key/value capability for the last known record list. The browser
//! shell backs it with `localStorage`; tests use the in-memory store.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::SnapshotResult;
use crate::models::CameraRecord;

/// Minimal key/value store holding serialized snapshots
pub trait SnapshotStore {
    fn get(&self, key: &str) -> SnapshotResult<Option<String>>;

    fn put(&self, key: &str, value: &str) -> SnapshotResult<()>;

    fn remove(&self, key: &str) -> SnapshotResult<()>;
}

/// In-memory store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshotStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn get(&self, key: &str) -> SnapshotResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> SnapshotResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> SnapshotResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// The record list stored under one key of a [`SnapshotStore`]
#[derive(Debug, Clone)]
pub struct Snapshot<S> {
    store: S,
    key: String,
}

impl<S: SnapshotStore> Snapshot<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// Stored records; unreadable or corrupt snapshots count as absent
    pub fn read(&self) -> Option<Vec<CameraRecord>> {
        let raw = match self.store.get(&self.key) {
            Ok(raw) => raw?,
            Err(e) => {
                log::warn!("[snapshot] Failed to read {}: {}", self.key, e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(records) => Some(records),
            Err(e) => {
                log::warn!("[snapshot] Ignoring corrupt snapshot {}: {}", self.key, e);
                None
            }
        }
    }

    pub fn write(&self, records: &[CameraRecord]) -> SnapshotResult<()> {
        let json = serde_json::to_string(records)?;
        self.store.put(&self.key, &json)?;
        log::debug!("[snapshot] Stored {} records under {}", records.len(), self.key);
        Ok(())
    }

    pub fn clear(&self) -> SnapshotResult<()> {
        self.store.remove(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read() {
        let store = MemorySnapshotStore::new();
        let snapshot = Snapshot::new(store.clone(), "cams");
        let records = vec![CameraRecord::new(1u64, "Lobby", "Denver, CO", "Active")];

        snapshot.write(&records).unwrap();
        assert_eq!(snapshot.read(), Some(records));
        assert!(store.get("cams").unwrap().is_some());
    }

    #[test]
    fn test_missing_and_corrupt_snapshots_read_as_none() {
        let store = MemorySnapshotStore::new();
        let snapshot = Snapshot::new(store.clone(), "cams");
        assert_eq!(snapshot.read(), None);

        store.put("cams", "{broken").unwrap();
        assert_eq!(snapshot.read(), None);
    }

    #[test]
    fn test_clear_removes_key() {
        let store = MemorySnapshotStore::new();
        let snapshot = Snapshot::new(store.clone(), "cams");
        snapshot.write(&[]).unwrap();
        snapshot.clear().unwrap();
        assert_eq!(store.get("cams").unwrap(), None);
    }
}
