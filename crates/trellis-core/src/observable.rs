//! Observable properties: a value cell paired with its change signal.
//!
//! Controls expose derived state (for example a tab control's selected
//! content) as observable fields: readable by anyone, settable only by the
//! owning control, with a subscription mechanism for change notification.
//! [`ObservableProperty`] packages that pattern so owners don't have to keep
//! a [`Property`] and a [`Signal`] in sync by hand.

use std::fmt;

use crate::property::{Property, ReadOnlyProperty};
use crate::signal::{ConnectionGuard, ConnectionId, Signal};

/// A property with a built-in change signal.
///
/// `set()` assigns the value and emits [`changed`](Self::changed) only when
/// the value actually changed, so repeated assignment of an equal value is
/// observationally idempotent. `set_always()` assigns and notifies
/// unconditionally, for callers that re-project state and want downstream
/// observers refreshed even on equal values.
///
/// # Example
///
/// ```
/// use trellis_core::ObservableProperty;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let prop = ObservableProperty::new(0);
/// let notifications = Arc::new(AtomicUsize::new(0));
///
/// let n = notifications.clone();
/// prop.subscribe(move |_| {
///     n.fetch_add(1, Ordering::SeqCst);
/// });
///
/// prop.set(1); // notifies
/// prop.set(1); // no change, no notification
/// assert_eq!(notifications.load(Ordering::SeqCst), 1);
/// ```
pub struct ObservableProperty<T> {
    value: Property<T>,
    /// Emitted with the new value after each observable assignment.
    pub changed: Signal<T>,
}

impl<T: Clone + Send + 'static> ObservableProperty<T> {
    /// Create a new observable property with an initial value.
    ///
    /// The initial assignment does not notify.
    pub fn new(value: T) -> Self {
        Self {
            value: Property::new(value),
            changed: Signal::new(),
        }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.value.get()
    }

    /// Access the value through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        self.value.with(f)
    }

    /// A read-only view of the value.
    ///
    /// Owners use this to hand out read access while keeping the setters
    /// to themselves.
    pub fn read_only(&self) -> ReadOnlyProperty<'_, T> {
        ReadOnlyProperty::new(&self.value)
    }

    /// Subscribe to change notifications.
    ///
    /// Equivalent to `self.changed.connect(slot)`.
    pub fn subscribe<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.changed.connect(slot)
    }

    /// Subscribe with automatic disconnection when the guard is dropped.
    pub fn subscribe_scoped<F>(&self, slot: F) -> ConnectionGuard<T>
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.changed.connect_scoped(slot)
    }

    /// Assign the value unconditionally and notify subscribers.
    ///
    /// Unlike [`set`](Self::set) this emits `changed` even when the new
    /// value equals the current one. Re-assignment must therefore be safe
    /// for subscribers (last-write-wins; no rollback).
    pub fn set_always(&self, value: T) {
        self.value.set_silent(value.clone());
        self.changed.emit(value);
    }
}

impl<T: Clone + PartialEq + Send + 'static> ObservableProperty<T> {
    /// Assign the value, notifying subscribers only if it changed.
    ///
    /// Returns `true` if the value changed.
    pub fn set(&self, value: T) -> bool {
        if self.value.set(value.clone()) {
            self.changed.emit(value);
            true
        } else {
            false
        }
    }
}

impl<T: Clone + Default + Send + 'static> Default for ObservableProperty<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug + Send + 'static> fmt::Debug for ObservableProperty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableProperty")
            .field("value", &self.get())
            .field("subscribers", &self.changed.connection_count())
            .finish()
    }
}

// Observable state is shared between controls and presenters
static_assertions::assert_impl_all!(ObservableProperty<i32>: Send, Sync);
