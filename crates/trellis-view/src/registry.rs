//! Realized-container registry.
//!
//! The registry is the container-management collaborator of a selection-aware
//! control: it tracks which item indices currently have a realized container
//! and fires lifecycle signals as containers are prepared, re-indexed, and
//! reclaimed. The control drives it synchronously; external observers (a
//! virtualization scheduler, diagnostics) subscribe to the signals.

use std::collections::BTreeMap;

use trellis_core::Signal;

use crate::container::{ContainerId, SharedContainer};

/// Tracks realized containers by item index.
///
/// Indices are sparse: virtualization only realizes containers for items in
/// (or near) the visible range. Lookup by index is `O(log realized)`.
pub struct ContainerRegistry {
    realized: BTreeMap<usize, SharedContainer>,
    /// Emitted with the index after a container is (re)bound at it.
    pub container_prepared: Signal<usize>,
    /// Emitted with `(old_index, new_index)` after a container moves.
    pub container_index_changed: Signal<(usize, usize)>,
    /// Emitted with the container's identity after it is reclaimed.
    pub container_cleared: Signal<ContainerId>,
}

impl ContainerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            realized: BTreeMap::new(),
            container_prepared: Signal::new(),
            container_index_changed: Signal::new(),
            container_cleared: Signal::new(),
        }
    }

    /// Positional lookup: the container realized at `index`, if any.
    pub fn container_at(&self, index: usize) -> Option<SharedContainer> {
        self.realized.get(&index).cloned()
    }

    /// Whether a container is realized at `index`.
    pub fn is_realized(&self, index: usize) -> bool {
        self.realized.contains_key(&index)
    }

    /// The number of realized containers.
    pub fn realized_count(&self) -> usize {
        self.realized.len()
    }

    /// The realized indices, in ascending order.
    pub fn realized_indices(&self) -> Vec<usize> {
        self.realized.keys().copied().collect()
    }

    /// Register a container at `index`, replacing any previous occupant.
    ///
    /// Fires `container_prepared`. The displaced occupant, if any, is
    /// returned without a `container_cleared` signal - rebinding the same
    /// slot is preparation, not reclamation.
    pub fn insert(&mut self, index: usize, container: SharedContainer) -> Option<SharedContainer> {
        let displaced = self.realized.insert(index, container);
        tracing::trace!(target: "trellis_view", index, "container prepared");
        self.container_prepared.emit(index);
        displaced
    }

    /// Reclaim the container at `index`, firing `container_cleared`.
    pub fn remove(&mut self, index: usize) -> Option<SharedContainer> {
        let removed = self.realized.remove(&index);
        if let Some(container) = &removed {
            tracing::trace!(target: "trellis_view", index, "container cleared");
            self.container_cleared.emit(container.id());
        }
        removed
    }

    /// Move the container at `old_index` to `new_index`.
    ///
    /// Any occupant of `new_index` is displaced (returned by a subsequent
    /// lookup as absent). Fires `container_index_changed` and returns `true`
    /// when a container actually moved.
    pub fn move_index(&mut self, old_index: usize, new_index: usize) -> bool {
        if old_index == new_index {
            return false;
        }
        match self.realized.remove(&old_index) {
            Some(container) => {
                self.realized.insert(new_index, container);
                tracing::trace!(
                    target: "trellis_view",
                    old_index,
                    new_index,
                    "container index changed"
                );
                self.container_index_changed.emit((old_index, new_index));
                true
            }
            None => false,
        }
    }

    /// Reclaim every realized container, firing `container_cleared` for each.
    pub fn clear_all(&mut self) {
        let drained = std::mem::take(&mut self.realized);
        for (_, container) in drained {
            self.container_cleared.emit(container.id());
        }
    }
}

impl Default for ContainerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
