//! Path resolution for journal data files

use std::path::{Path, PathBuf};

const APP_DIR: &str = "creative-pulse";

/// Resolves standard paths for journal data and exports
#[derive(Debug, Clone)]
pub struct Paths {
    pub data_root: PathBuf,
}

impl Paths {
    /// Create a resolver rooted at the platform data directory
    pub fn new() -> std::io::Result<Self> {
        let data = dirs::data_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "data directory not found")
        })?;

        Ok(Self {
            data_root: data.join(APP_DIR),
        })
    }

    /// Create a resolver rooted at an explicit directory
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        Self {
            data_root: root.as_ref().to_path_buf(),
        }
    }

    /// Directory holding the persisted slots
    pub fn slots_dir(&self) -> PathBuf {
        self.data_root.clone()
    }

    /// Get the file path backing a named slot
    pub fn slot_file(&self, key: &str) -> PathBuf {
        self.slots_dir().join(format!("{}.json", key))
    }

    /// Directory export artifacts are written to
    pub fn exports_dir(&self) -> PathBuf {
        self.data_root.join("exports")
    }
}
