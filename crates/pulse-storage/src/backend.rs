//! Slot backends: whole-value byte storage addressed by key

use crate::io::{atomic_write, read_optional};
use crate::paths::Paths;
use std::collections::HashMap;
use std::path::PathBuf;

/// Read-entire / write-entire storage keyed by slot name
pub trait StorageBackend {
    /// Read the whole value of a slot, `None` if it was never written
    fn read(&self, key: &str) -> std::io::Result<Option<Vec<u8>>>;

    /// Replace the whole value of a slot
    fn write(&mut self, key: &str, value: &[u8]) -> std::io::Result<()>;

    /// Delete a slot; removing a missing slot is not an error
    fn remove(&mut self, key: &str) -> std::io::Result<()>;
}

/// In-memory backend, used as a test double and for ephemeral journals
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    slots: HashMap<String, Vec<u8>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slot with raw bytes (e.g. corrupt JSON)
    pub fn with_slot(mut self, key: &str, value: impl Into<Vec<u8>>) -> Self {
        self.slots.insert(key.to_string(), value.into());
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> std::io::Result<Option<Vec<u8>>> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &[u8]) -> std::io::Result<()> {
        self.slots.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> std::io::Result<()> {
        self.slots.remove(key);
        Ok(())
    }
}

/// One JSON file per slot under a data directory
#[derive(Debug, Clone)]
pub struct FileBackend {
    paths: Paths,
}

impl FileBackend {
    pub fn new(paths: Paths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &Paths {
        &self.paths
    }

    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.paths.slot_file(key)
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> std::io::Result<Option<Vec<u8>>> {
        read_optional(&self.slot_path(key))
    }

    fn write(&mut self, key: &str, value: &[u8]) -> std::io::Result<()> {
        let path = self.slot_path(key);
        tracing::debug!(slot = key, path = %path.display(), bytes = value.len(), "writing slot");
        atomic_write(&path, value)
    }

    fn remove(&mut self, key: &str) -> std::io::Result<()> {
        match std::fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}
