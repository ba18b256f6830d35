// Reactive store primitives.
// Single-threaded value containers with synchronous change notification,
// plus derived stores recomputed from their sources.

pub mod derived;
pub mod observable;

pub use derived::{Derived, derived2};
pub use observable::{Store, Subscription};
