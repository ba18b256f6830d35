// Observable value container with synchronous publish/subscribe.
// Stores are cheap cloneable handles over a shared single-threaded cell;
// all delivery happens inside the caller's turn, before `set` returns.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Inner<T> {
    value: T,
    subscribers: Vec<(u64, Callback<T>)>,
    next_id: u64,
}

/// A shared mutable value that notifies subscribers on every change.
///
/// Handles are `Rc`-based: cloning a `Store` yields another handle to the
/// same value. The store is intentionally not `Send`; the application runs
/// one logical event loop and all notification is synchronous within it.
///
/// Setting a value equal to the current one is a no-op: the value is not
/// replaced and no subscriber is notified.
pub struct Store<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Store {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Store<T> {
    pub fn new(value: T) -> Self {
        Store {
            inner: Rc::new(RefCell::new(Inner {
                value,
                subscribers: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Number of live subscriptions, for diagnostics.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

impl<T: Clone + 'static> Store<T> {
    /// Get a clone of the current value.
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Register a callback invoked immediately with the current value and
    /// again after every subsequent change, until the returned
    /// [`Subscription`] is unsubscribed or dropped.
    pub fn subscribe(&self, on_change: impl FnMut(&T) + 'static) -> Subscription {
        let callback: Callback<T> = Rc::new(RefCell::new(on_change));
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push((id, Rc::clone(&callback)));
            id
        };

        // Immediate delivery with the value at subscribe time.
        let current = self.inner.borrow().value.clone();
        (callback.borrow_mut())(&current);

        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().subscribers.retain(|(sid, _)| *sid != id);
                }
            })),
        }
    }

    /// Deliver the current value to all registered subscribers.
    ///
    /// The subscriber list is snapshotted up front; each entry is re-checked
    /// against the live list right before its callback runs, so a
    /// subscription cancelled mid-cycle is skipped rather than invoked.
    fn notify(&self) {
        let snapshot: Vec<(u64, Callback<T>)> = self
            .inner
            .borrow()
            .subscribers
            .iter()
            .map(|(id, cb)| (*id, Rc::clone(cb)))
            .collect();

        for (id, callback) in snapshot {
            let registered = self
                .inner
                .borrow()
                .subscribers
                .iter()
                .any(|(sid, _)| *sid == id);
            if !registered {
                continue;
            }
            let value = self.inner.borrow().value.clone();
            (callback.borrow_mut())(&value);
        }
    }
}

impl<T: Clone + PartialEq + 'static> Store<T> {
    /// Replace the value, notifying subscribers if it changed.
    pub fn set(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return;
            }
            inner.value = value;
        }
        self.notify();
    }

    /// Compute a new value from the current one and set it.
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.get());
        self.set(next);
    }
}

/// Handle that cancels delivery to one subscriber.
///
/// Cancellation happens on explicit [`unsubscribe`](Subscription::unsubscribe)
/// or on drop, and takes effect immediately: a notification cycle already in
/// progress skips the cancelled callback.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
