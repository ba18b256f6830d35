// Settings module for persistent key/value storage.
// Each key is stored as a small JSON file under the per-user settings
// directory; environments without a resolvable directory get no-op storage.

pub mod paths;
pub mod store;

pub use paths::{SIDEBAR_OPEN_KEY, key_path, settings_dir};
pub use store::{read_bool, remove, write_bool};
