//! Whole-file I/O and atomic file operations

use std::path::Path;

/// Read a file, returning `None` when it does not exist
pub fn read_optional(path: &Path) -> std::io::Result<Option<Vec<u8>>> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Write data atomically using temp file + rename
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, data)?;
    std::fs::rename(temp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atomic_write() {
        let temp = tempfile::TempDir::new().unwrap();
        let test_file = temp.path().join("nested").join("test_atomic.json");

        let data = b"[1,2,3]";
        atomic_write(&test_file, data).unwrap();

        let read_data = std::fs::read(&test_file).unwrap();
        assert_eq!(data, read_data.as_slice());
        assert!(!test_file.with_extension("tmp").exists());
    }

    #[test]
    fn test_read_optional_missing() {
        let temp = tempfile::TempDir::new().unwrap();
        let missing = temp.path().join("missing.json");
        assert_eq!(read_optional(&missing).unwrap(), None);
    }
}
