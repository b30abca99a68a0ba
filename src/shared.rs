//! Thread-safe handle around a single lendable item.
//!
//! Each operation takes the item's one lock for its whole duration, so two
//! threads racing to check out the same item can never both succeed.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{availability::Availability, events::ItemEvent, item::Lendable};

/// Cloneable, lock-protected handle to one item
#[derive(Debug)]
pub struct SharedItem<T> {
    /// The item behind its per-item lock
    inner: Arc<Mutex<T>>,
}

impl<T> Clone for SharedItem<T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T: Lendable> SharedItem<T> {
    /// Put an item behind its own lock
    #[must_use]
    pub fn new(item: T) -> Self {
        Self { inner: Arc::new(Mutex::new(item)) }
    }

    /// Check the item out; `false` if someone already holds it
    #[must_use]
    pub fn checkout(&self) -> bool {
        self.lock().checkout()
    }

    /// Check the item in, whatever its current state
    pub fn checkin(&self) {
        self.lock().checkin();
    }

    /// Apply an arbitrary event under the lock
    #[must_use]
    pub fn process_event(&self, event: ItemEvent) -> bool {
        self.lock().apply(event).accepted
    }

    /// Current availability, read under the lock
    #[must_use]
    pub fn availability(&self) -> Availability {
        self.lock().availability()
    }

    /// Run a read-only closure against the item while holding the lock
    pub fn with_item<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.lock())
    }

    /// Take the item's lock, recovering it if a previous holder panicked.
    ///
    /// A recovered guard holds whatever `T::apply` had committed when the
    /// panic hit. The crate's own items commit availability before anything
    /// that can panic runs. A `LendingTracker` also commits the history entry
    /// before notifying observers, so observers registered after a panicking
    /// one never see that event.
    fn lock(&self) -> MutexGuard<'_, T> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
