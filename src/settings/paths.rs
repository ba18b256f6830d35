// Settings path utilities.
// Constructs filesystem paths for per-key settings files.

use std::path::PathBuf;

use directories::ProjectDirs;

/// Storage key for the persisted sidebar-open flag.
pub const SIDEBAR_OPEN_KEY: &str = "isSidebarOpen";

/// Get the base settings directory (~/.config/vane on Linux).
pub fn settings_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "vane").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path to the settings file backing a single key.
pub fn key_path(key: &str) -> Option<PathBuf> {
    settings_dir().map(|dir| dir.join(format!("{}.json", sanitize_key(key))))
}

/// Sanitize a key for use in filesystem paths.
/// Replaces problematic characters with underscores.
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_key() {
        assert_eq!(sanitize_key("isSidebarOpen"), "isSidebarOpen");
        assert_eq!(sanitize_key("with/slash"), "with_slash");
        assert_eq!(sanitize_key("a:b"), "a_b");
    }

    #[test]
    fn test_key_path_shape() {
        // Path construction only; the directory itself may not exist.
        if let Some(path) = key_path(SIDEBAR_OPEN_KEY) {
            assert!(path.ends_with("isSidebarOpen.json"));
        }
    }
}
