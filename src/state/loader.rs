// Global loading signal.
// Combines the router-owned navigation signal with a manually toggled flag
// into one derived boolean: loading whenever either is raised.

use crate::store::{Derived, Store, Subscription, derived2};

/// Combined loading state for the whole shell.
///
/// The `navigating` store is owned by the router; this type only reads it.
/// The manual flag belongs to whoever last set it (wrap an expensive
/// operation in `set_manual(true)` / `set_manual(false)`). The derived
/// signal has no storage of its own and is recomputed synchronously inside
/// whichever `set` changed an input.
pub struct Loader {
    manual: Store<bool>,
    global: Derived<bool>,
}

impl Loader {
    pub fn new(navigating: &Store<bool>) -> Self {
        let manual = Store::new(false);
        let global = derived2(navigating, &manual, |nav, man| *nav || *man);
        Self { manual, global }
    }

    /// Raise or lower the manual loading flag.
    pub fn set_manual(&self, loading: bool) {
        self.manual.set(loading);
    }

    pub fn manual(&self) -> bool {
        self.manual.get()
    }

    /// Current combined value: navigating OR manually loading.
    pub fn is_loading(&self) -> bool {
        self.global.get()
    }

    /// Subscribe to the combined signal: immediate delivery of the current
    /// value, then delivery on every change.
    pub fn subscribe(&self, on_change: impl FnMut(&bool) + 'static) -> Subscription {
        self.global.subscribe(on_change)
    }
}
