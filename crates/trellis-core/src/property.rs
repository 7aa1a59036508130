//! Property system for Trellis.
//!
//! This module provides reactive properties with change detection. Properties
//! are the data backbone of the signal/slot system - when a property changes,
//! the owner emits a signal to notify interested parties.
//!
//! # Property Types
//!
//! - **Property<T>**: A value cell with change detection
//! - **ReadOnlyProperty<T>**: A read-only view over a `Property<T>`
//!
//! For a property with a built-in change signal, see
//! [`ObservableProperty`](crate::ObservableProperty).
//!
//! # Example
//!
//! ```
//! use trellis_core::{Property, Signal};
//!
//! struct Selection {
//!     index: Property<i32>,
//!     index_changed: Signal<i32>,
//! }
//!
//! impl Selection {
//!     fn new() -> Self {
//!         Self {
//!             index: Property::new(-1),
//!             index_changed: Signal::new(),
//!         }
//!     }
//!
//!     fn set_index(&self, new_index: i32) {
//!         if self.index.set(new_index) {
//!             self.index_changed.emit(new_index);
//!         }
//!     }
//! }
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A reactive property that tracks changes.
///
/// `Property<T>` wraps a value and provides change detection. When `set()` is
/// called, it compares the new value with the current one and returns whether
/// the value actually changed. This enables efficient change notification.
///
/// # Thread Safety
///
/// `Property<T>` uses interior mutability with `RwLock` and is `Send + Sync`.
///
/// # Example
///
/// ```
/// use trellis_core::Property;
///
/// let prop = Property::new(42);
/// assert_eq!(prop.get(), 42);
///
/// // Setting same value returns false (no change)
/// assert!(!prop.set(42));
///
/// // Setting different value returns true (changed)
/// assert!(prop.set(100));
/// assert_eq!(prop.get(), 100);
/// ```
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    ///
    /// This clones the value. For large types, consider using `with()`
    /// instead.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the value through a closure without cloning.
    ///
    /// This is more efficient for large types when you don't need ownership.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// Set the value without change notification.
    ///
    /// This is useful during initialization or batch updates where you
    /// want to defer notifications.
    pub fn set_silent(&self, value: T) {
        *self.value.write() = value;
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    ///
    /// This compares the new value with the current one using `PartialEq`.
    /// If they are equal, the value is not updated and `false` is returned.
    ///
    /// The caller should emit the associated notification signal when this
    /// returns `true`.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }

    /// Set the value, returning the old value if it changed.
    ///
    /// This is useful when you need to know the previous value for
    /// change notifications.
    pub fn replace(&self, value: T) -> Option<T> {
        let mut current = self.value.write();
        if *current != value {
            let old = std::mem::replace(&mut *current, value);
            Some(old)
        } else {
            None
        }
    }
}

impl<T: Clone> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}

// Property is Send + Sync when T is Send + Sync
unsafe impl<T: Send> Send for Property<T> {}
unsafe impl<T: Send + Sync> Sync for Property<T> {}

/// A read-only view of a property.
///
/// This provides read access without the ability to modify the underlying
/// value. Useful for exposing properties publicly while keeping the setter
/// private.
pub struct ReadOnlyProperty<'a, T> {
    inner: &'a Property<T>,
}

impl<'a, T: Clone> ReadOnlyProperty<'a, T> {
    /// Create a read-only view of a property.
    pub fn new(property: &'a Property<T>) -> Self {
        Self { inner: property }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.inner.get()
    }

    /// Access the value through a closure.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        self.inner.with(f)
    }
}

/// Error types for property operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyError {
    /// The property was not found.
    NotFound {
        /// The name of the property that was not found.
        name: String,
    },
    /// The property type did not match.
    TypeMismatch {
        /// The expected type name.
        expected: &'static str,
        /// The actual type name.
        got: &'static str,
    },
    /// The property is read-only and cannot be modified.
    ReadOnly {
        /// The name of the read-only property.
        name: String,
    },
}

impl fmt::Display for PropertyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { name } => write!(f, "Property '{}' not found", name),
            Self::TypeMismatch { expected, got } => {
                write!(f, "Property type mismatch: expected {}, got {}", expected, got)
            }
            Self::ReadOnly { name } => write!(f, "Property '{}' is read-only", name),
        }
    }
}

impl std::error::Error for PropertyError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_property_basic() {
        let prop = Property::new(42);
        assert_eq!(prop.get(), 42);
    }

    #[test]
    fn test_property_set_detects_change() {
        let prop = Property::new(10);

        // Same value - no change
        assert!(!prop.set(10));
        assert_eq!(prop.get(), 10);

        // Different value - changed
        assert!(prop.set(20));
        assert_eq!(prop.get(), 20);
    }

    #[test]
    fn test_property_set_silent() {
        let prop = Property::new(100);
        prop.set_silent(200);
        assert_eq!(prop.get(), 200);
    }

    #[test]
    fn test_property_replace() {
        let prop = Property::new("hello".to_string());

        // Same value - no change, returns None
        let old = prop.replace("hello".to_string());
        assert!(old.is_none());

        // Different value - returns old value
        let old = prop.replace("world".to_string());
        assert_eq!(old, Some("hello".to_string()));
        assert_eq!(prop.get(), "world");
    }

    #[test]
    fn test_property_with_closure() {
        let prop = Property::new(vec![1, 2, 3]);

        // Use with() to avoid cloning
        let sum: i32 = prop.with(|v| v.iter().sum());
        assert_eq!(sum, 6);
    }

    #[test]
    fn test_property_thread_safe() {
        let prop = Arc::new(Property::new(0));

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let prop = prop.clone();
                std::thread::spawn(move || {
                    for i in 0..100 {
                        prop.set_silent(i);
                        let _ = prop.get();
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }
    }

    #[test]
    fn test_read_only_property() {
        let prop = Property::new(42);
        let ro = ReadOnlyProperty::new(&prop);

        assert_eq!(ro.get(), 42);

        // Modify through original
        prop.set_silent(100);
        assert_eq!(ro.get(), 100);
    }

    #[test]
    fn test_property_default() {
        let prop: Property<i32> = Property::default();
        assert_eq!(prop.get(), 0);

        let prop: Property<String> = Property::default();
        assert_eq!(prop.get(), "");
    }
}
