// Panel state for the dashboard shell.
// The sidebar flag is mirrored to persistent storage on every change; the
// other flags are plain in-memory booleans with fixed defaults.

use std::path::PathBuf;

use crate::settings;
use crate::store::{Store, Subscription};

/// UI panel flags.
///
/// `sidebar_open` is initialized from the settings file backing
/// [`settings::SIDEBAR_OPEN_KEY`] and written back through an internal
/// subscription whenever it changes. Storage failures are logged and
/// swallowed: the in-memory value stays authoritative for the session.
/// Constructed with `None`, storage is skipped entirely and the flag is an
/// ordinary boolean defaulting to `false`.
pub struct PanelState {
    sidebar_open: Store<bool>,
    settings_panel_open: Store<bool>,
    search_box_open: Store<bool>,
    loading: Store<bool>,
    storage_path: Option<PathBuf>,
    _persist: Option<Subscription>,
}

impl PanelState {
    pub fn new(storage_path: Option<PathBuf>) -> Self {
        let initial = storage_path
            .as_deref()
            .and_then(settings::read_bool)
            .unwrap_or(false);
        let sidebar_open = Store::new(initial);

        // Mirror every change (and the initial value) back to storage.
        let persist = storage_path.clone().map(|path| {
            sidebar_open.subscribe(move |open: &bool| {
                if let Err(e) = settings::write_bool(&path, *open) {
                    tracing::warn!("failed to persist sidebar state: {e}");
                }
            })
        });

        Self {
            sidebar_open,
            settings_panel_open: Store::new(false),
            search_box_open: Store::new(false),
            loading: Store::new(true),
            storage_path,
            _persist: persist,
        }
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open.get()
    }

    pub fn set_sidebar_open(&self, open: bool) {
        self.sidebar_open.set(open);
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| !open);
    }

    pub fn subscribe_sidebar(&self, on_change: impl FnMut(&bool) + 'static) -> Subscription {
        self.sidebar_open.subscribe(on_change)
    }

    /// Where the sidebar flag persists, if storage is available.
    pub fn storage_path(&self) -> Option<&PathBuf> {
        self.storage_path.as_ref()
    }

    pub fn settings_panel_open(&self) -> bool {
        self.settings_panel_open.get()
    }

    pub fn set_settings_panel_open(&self, open: bool) {
        self.settings_panel_open.set(open);
    }

    pub fn search_box_open(&self) -> bool {
        self.search_box_open.get()
    }

    pub fn set_search_box_open(&self, open: bool) {
        self.search_box_open.set(open);
    }

    pub fn loading(&self) -> bool {
        self.loading.get()
    }

    pub fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn key_file(dir: &TempDir) -> PathBuf {
        dir.path().join("isSidebarOpen.json")
    }

    #[test]
    fn test_defaults_without_storage() {
        let panels = PanelState::new(None);
        assert!(!panels.sidebar_open());
        assert!(!panels.settings_panel_open());
        assert!(!panels.search_box_open());
        assert!(panels.loading());
    }

    #[test]
    fn test_toggle_without_storage_does_not_fail() {
        let panels = PanelState::new(None);
        panels.toggle_sidebar();
        assert!(panels.sidebar_open());
        panels.toggle_sidebar();
        assert!(!panels.sidebar_open());
    }

    #[test]
    fn test_empty_storage_starts_closed_and_toggles_persist() {
        let dir = TempDir::new().unwrap();
        let path = key_file(&dir);

        let panels = PanelState::new(Some(path.clone()));
        assert!(!panels.sidebar_open());

        panels.toggle_sidebar();
        assert!(panels.sidebar_open());
        assert_eq!(fs::read_to_string(&path).unwrap(), "true");

        panels.toggle_sidebar();
        assert!(!panels.sidebar_open());
        assert_eq!(fs::read_to_string(&path).unwrap(), "false");
    }

    #[test]
    fn test_round_trip_across_sessions() {
        let dir = TempDir::new().unwrap();
        let path = key_file(&dir);

        {
            let panels = PanelState::new(Some(path.clone()));
            panels.set_sidebar_open(true);
        }
        let reloaded = PanelState::new(Some(path.clone()));
        assert!(reloaded.sidebar_open());

        reloaded.set_sidebar_open(false);
        let reloaded = PanelState::new(Some(path));
        assert!(!reloaded.sidebar_open());
    }

    #[test]
    fn test_corrupt_storage_falls_back_to_closed() {
        let dir = TempDir::new().unwrap();
        let path = key_file(&dir);
        fs::write(&path, "\"sideways\"").unwrap();

        let panels = PanelState::new(Some(path.clone()));
        assert!(!panels.sidebar_open());

        // The write-through subscription repairs the file.
        assert_eq!(fs::read_to_string(&path).unwrap(), "false");
    }

    #[test]
    fn test_sidebar_subscription_sees_changes() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let panels = PanelState::new(None);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = panels.subscribe_sidebar(move |open: &bool| sink.borrow_mut().push(*open));

        panels.toggle_sidebar();
        panels.toggle_sidebar();
        assert_eq!(*seen.borrow(), vec![false, true, false]);
    }
}
