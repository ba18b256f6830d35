// Settings store for reading and writing per-key JSON values.
// Handles permissive decoding and atomic filesystem writes.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::Result;

/// Read a stored boolean from a key file.
///
/// A missing file yields `None`. Content that is not a valid JSON boolean
/// also yields `None`, with a warning: corrupt settings are treated as
/// absent so the caller falls back to its default.
pub fn read_bool(path: &Path) -> Option<bool> {
    if !path.exists() {
        return None;
    }

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            tracing::warn!("failed to read setting {}: {e}", path.display());
            return None;
        }
    };

    match serde_json::from_str::<bool>(contents.trim()) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("ignoring corrupt setting {}: {e}", path.display());
            None
        }
    }
}

/// Write a boolean to a key file as the literal JSON token `true` or `false`.
pub fn write_bool(path: &Path, value: bool) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string(&value)?;

    // Write atomically via temp file
    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(json.as_bytes())?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Delete a key file.
pub fn remove(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_and_read_bool() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("isSidebarOpen.json");

        write_bool(&path, true).unwrap();
        assert_eq!(read_bool(&path), Some(true));

        write_bool(&path, false).unwrap();
        assert_eq!(read_bool(&path), Some(false));
    }

    #[test]
    fn test_stored_format_is_literal_json_token() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("isSidebarOpen.json");

        write_bool(&path, true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "true");

        write_bool(&path, false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "false");
    }

    #[test]
    fn test_read_missing_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");
        assert_eq!(read_bool(&path), None);
    }

    #[test]
    fn test_read_corrupt_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("isSidebarOpen.json");

        fs::write(&path, "not json at all").unwrap();
        assert_eq!(read_bool(&path), None);

        fs::write(&path, "42").unwrap();
        assert_eq!(read_bool(&path), None);
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("key.json");

        write_bool(&path, true).unwrap();
        assert_eq!(read_bool(&path), Some(true));
    }

    #[test]
    fn test_remove() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("key.json");

        write_bool(&path, true).unwrap();
        remove(&path).unwrap();
        assert_eq!(read_bool(&path), None);

        // Removing a missing file is not an error.
        remove(&path).unwrap();
    }
}
