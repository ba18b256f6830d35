// Derived read-only stores.
// A derived store holds no independent state: its value is recomputed from
// its sources, synchronously, whenever any of them changes.

use std::rc::Rc;

use super::observable::{Store, Subscription};

/// A read-only store whose value is a pure function of its sources.
///
/// Recomputation runs eagerly inside the source's notification turn, so by
/// the time a `set` on a source returns, this store and its subscribers have
/// already observed the new derived value. Equality suppression applies: if
/// recomputation yields the current value, subscribers are not notified.
pub struct Derived<T> {
    output: Store<T>,
    _sources: Vec<Subscription>,
}

impl<T: Clone + 'static> Derived<T> {
    /// Get a clone of the current derived value.
    pub fn get(&self) -> T {
        self.output.get()
    }

    /// Subscribe with the same contract as [`Store::subscribe`]: immediate
    /// delivery of the current value, then delivery on every change.
    pub fn subscribe(&self, on_change: impl FnMut(&T) + 'static) -> Subscription {
        self.output.subscribe(on_change)
    }
}

/// Derive a store from two sources and a pure combining function.
pub fn derived2<A, B, T, F>(a: &Store<A>, b: &Store<B>, f: F) -> Derived<T>
where
    A: Clone + 'static,
    B: Clone + 'static,
    T: Clone + PartialEq + 'static,
    F: Fn(&A, &B) -> T + 'static,
{
    let f = Rc::new(f);
    let output = Store::new(f(&a.get(), &b.get()));

    let recompute_a = {
        let (a, b, output, f) = (a.clone(), b.clone(), output.clone(), Rc::clone(&f));
        move |_: &A| output.set(f(&a.get(), &b.get()))
    };
    let recompute_b = {
        let (a, b, output, f) = (a.clone(), b.clone(), output.clone(), Rc::clone(&f));
        move |_: &B| output.set(f(&a.get(), &b.get()))
    };

    let sources = vec![a.subscribe(recompute_a), b.subscribe(recompute_b)];
    Derived {
        output,
        _sources: sources,
    }
}
