//! TabView control implementation.
//!
//! This module provides [`TabView`], a selection-aware tab container that
//! keeps a selected-content projection - the pair `(selected_content,
//! selected_content_template)` - synchronized with the container of the
//! selected item.
//!
//! # Example
//!
//! ```
//! use trellis_view::{Content, TabView};
//!
//! let mut tabs = TabView::new();
//! tabs.add_tab("Home");
//! tabs.add_tab("Settings");
//!
//! // Something is always selected once items exist
//! assert_eq!(tabs.selected_index(), 0);
//! assert_eq!(tabs.selected_content().get(), Content::from("Home"));
//!
//! // Observe projection changes
//! tabs.subscribe_selected_content(|content| {
//!     println!("now showing: {:?}", content);
//! });
//! tabs.set_selected_index(1);
//! ```

use trellis_core::{ConnectionGuard, ConnectionId, ObservableProperty, ReadOnlyProperty, Signal};

use crate::container::{
    ContainerKind, SharedContainer, TabItemContainer, TabPlacement, TabSource,
};
use crate::content::Content;
use crate::error::{Result, ViewError};
use crate::registry::ContainerRegistry;
use crate::selection::{coerce_index, SelectionMode};
use crate::template::{template_eq, SharedTemplate};

/// A tabbed container control with a synchronized selected-content
/// projection.
///
/// # Projection Invariant
///
/// At every quiescent point, `(selected_content,
/// selected_content_template)` equals the `(content, template)` pair of the
/// container at the selected index, or `(Content::None, None)` when nothing
/// is selected or no container is resolvable. Exactly four paths maintain
/// the invariant:
///
/// 1. [`set_selected_index`](Self::set_selected_index) - full recompute
/// 2. [`prepare_container`](Self::prepare_container) - refresh when the
///    prepared index is the selected one (covers "selected before realized")
/// 3. [`move_container`](Self::move_container) - recompute when either index
///    touches the selection
/// 4. [`clear_container`](Self::clear_container) - unconditional recompute
///
/// Resolution prefers a self-hosting container held by the selected item
/// itself, falling back to positional lookup in the realized-container
/// registry. Content and template are resolved independently; a container
/// without a template still projects its content.
///
/// # Threading
///
/// All operations are synchronous and complete before returning. Projection
/// writes notify subscribers in-line; re-entrant writes are last-write-wins.
pub struct TabView {
    /// The ordered items.
    items: Vec<TabSource>,

    /// Realized containers by index.
    registry: ContainerRegistry,

    /// Selected item index, `-1` for none.
    selected_index: i32,

    /// How the empty selection is treated.
    selection_mode: SelectionMode,

    /// Ambient content-template default assigned to containers on every
    /// preparation.
    content_template: Option<SharedTemplate>,

    /// Tab strip placement propagated to every prepared container.
    tab_placement: TabPlacement,

    /// The selected container's content. Exposed read-only through
    /// [`selected_content`](Self::selected_content); only this control
    /// writes it.
    selected_content: ObservableProperty<Content>,

    /// The selected container's content template, compared by identity.
    /// Exposed read-only through
    /// [`selected_content_template`](Self::selected_content_template).
    selected_content_template: ObservableProperty<Option<SharedTemplate>>,

    /// Emitted with `(old_index, new_index)` after the selection moves.
    pub selection_changed: Signal<(i32, i32)>,
}

impl TabView {
    /// Create an empty tab view.
    ///
    /// Defaults: [`SelectionMode::AlwaysSelected`], [`TabPlacement::Top`],
    /// no ambient content template, nothing selected.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            registry: ContainerRegistry::new(),
            selected_index: -1,
            selection_mode: SelectionMode::default(),
            content_template: None,
            tab_placement: TabPlacement::default(),
            selected_content: ObservableProperty::new(Content::None),
            selected_content_template: ObservableProperty::new(None),
            selection_changed: Signal::new(),
        }
    }

    /// Set the selection mode using the builder pattern.
    pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    /// Set the ambient content template using the builder pattern.
    pub fn with_content_template(mut self, template: SharedTemplate) -> Self {
        self.content_template = Some(template);
        self
    }

    /// Set the tab placement using the builder pattern.
    pub fn with_tab_placement(mut self, placement: TabPlacement) -> Self {
        self.tab_placement = placement;
        self
    }

    // =========================================================================
    // Item Management
    // =========================================================================

    /// Append a tab, returning its index.
    pub fn add_tab(&mut self, source: impl Into<TabSource>) -> usize {
        let index = self.items.len();
        self.insert_unchecked(index, source.into());
        index
    }

    /// Insert a tab at `index`, shifting later tabs up.
    pub fn insert_tab(&mut self, index: usize, source: impl Into<TabSource>) -> Result<usize> {
        if index > self.items.len() {
            return Err(ViewError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        self.insert_unchecked(index, source.into());
        Ok(index)
    }

    /// Remove the tab at `index`, shifting later tabs down.
    ///
    /// Under [`SelectionMode::AlwaysSelected`], removing the selected tab
    /// selects its successor (or the new last tab); removing the last
    /// remaining tab empties the selection.
    pub fn remove_tab(&mut self, index: usize) -> Result<TabSource> {
        if index >= self.items.len() {
            return Err(ViewError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }

        self.clear_container(index);
        let removed = self.items.remove(index);

        // Containers past the removal point slide down one slot
        for i in self.registry.realized_indices() {
            if i > index {
                self.move_container(i, i - 1);
            }
        }

        let old = self.selected_index;
        let requested = if old > index as i32 { old - 1 } else { old };
        self.finish_selection_change(old, requested);
        Ok(removed)
    }

    /// Remove all tabs, reclaiming every realized container.
    pub fn clear_tabs(&mut self) {
        let old = self.selected_index;
        self.registry.clear_all();
        self.items.clear();
        self.finish_selection_change(old, -1);
    }

    /// The number of tabs.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the view has no tabs.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item at `index`, if any.
    pub fn item(&self, index: usize) -> Option<&TabSource> {
        self.items.get(index)
    }

    /// The currently selected item, if any.
    pub fn selected_item(&self) -> Option<&TabSource> {
        if self.selected_index < 0 {
            None
        } else {
            self.items.get(self.selected_index as usize)
        }
    }

    fn insert_unchecked(&mut self, index: usize, source: TabSource) {
        // Containers at or past the insertion point slide up one slot,
        // highest first so moves never collide
        for i in self.registry.realized_indices().into_iter().rev() {
            if i >= index {
                self.move_container(i, i + 1);
            }
        }

        self.items.insert(index, source);
        self.prepare_at(index);

        let old = self.selected_index;
        let requested = if old >= index as i32 { old + 1 } else { old };
        self.finish_selection_change(old, requested);
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// The selected index, `-1` when nothing is selected.
    pub fn selected_index(&self) -> i32 {
        self.selected_index
    }

    /// The selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        self.selection_mode
    }

    /// Request a new selected index.
    ///
    /// The request is coerced through [`coerce_index`] for the current item
    /// count and selection mode. The projection is recomputed in full even
    /// when the coerced index equals the current one; recomputation is
    /// idempotent and observers only hear about actual value changes.
    pub fn set_selected_index(&mut self, index: i32) {
        let old = self.selected_index;
        tracing::debug!(
            target: "trellis_view",
            old,
            requested = index,
            "selection change requested"
        );
        self.finish_selection_change(old, index);
    }

    /// Change the selection mode, re-coercing the current selection.
    pub fn set_selection_mode(&mut self, mode: SelectionMode) {
        if self.selection_mode != mode {
            self.selection_mode = mode;
            let old = self.selected_index;
            self.finish_selection_change(old, old);
        }
    }

    /// Coerce `requested`, store it, recompute the projection, and notify
    /// when the stored index actually moved.
    fn finish_selection_change(&mut self, old: i32, requested: i32) {
        let coerced = coerce_index(requested, self.items.len(), self.selection_mode);
        self.selected_index = coerced;
        self.update_selected_content();
        if coerced != old {
            self.selection_changed.emit((old, coerced));
        }
    }

    // =========================================================================
    // Container Lifecycle
    // =========================================================================

    /// Access to the realized-container registry for lifecycle observation.
    pub fn registry(&self) -> &ContainerRegistry {
        &self.registry
    }

    /// Positional lookup: the container realized at `index`, if any.
    pub fn container_at(&self, index: usize) -> Option<SharedContainer> {
        self.registry.container_at(index)
    }

    /// Generate a container of the requested kind.
    ///
    /// Only [`ContainerKind::Generated`] containers can be created on
    /// demand; a self-hosting item brings its own container and requesting
    /// one here is a configuration error.
    pub fn create_container(&self, kind: ContainerKind) -> Result<SharedContainer> {
        match kind {
            ContainerKind::Generated => Ok(self.generate_container()),
            ContainerKind::ItemIsOwnContainer => {
                Err(ViewError::UnsupportedContainerKind { kind })
            }
        }
    }

    fn generate_container(&self) -> SharedContainer {
        SharedContainer::new(TabItemContainer::new())
    }

    /// Realize (or re-bind) the container for the item at `index`.
    ///
    /// Generated containers are recycled from the slot's current occupant
    /// when present; self-hosting items are hosted as-is. Cross-cutting
    /// configuration is applied on every preparation: when an ambient
    /// content template is set it is assigned to the container, replacing
    /// any container-local template, and the tab placement flag is
    /// propagated unconditionally. If `index` is the selected index, the
    /// projection is refreshed from this container.
    pub fn prepare_container(&mut self, index: usize) -> Result<SharedContainer> {
        if index >= self.items.len() {
            return Err(ViewError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.prepare_at(index))
    }

    fn prepare_at(&mut self, index: usize) -> SharedContainer {
        let container = match &self.items[index] {
            TabSource::OwnContainer(container) => container.clone(),
            TabSource::Data(content) => {
                let container = self
                    .registry
                    .container_at(index)
                    .unwrap_or_else(|| self.generate_container());
                container.set_content(content.clone());
                container
            }
        };

        if let Some(ambient) = &self.content_template {
            container.set_template(Some(ambient.clone()));
        }
        container.set_placement(self.tab_placement);

        self.registry.insert(index, container.clone());

        // The selected container may not have existed when the selection
        // was set; refresh the projection from it now.
        if index as i32 == self.selected_index {
            self.assign_projection_template(container.template());
            self.selected_content.set(container.content());
        }

        container
    }

    /// Re-register the container at `old_index` under `new_index` without
    /// destroying it.
    ///
    /// When either index touches the selection the projection is recomputed
    /// from whatever container now occupies the selected slot - which is
    /// not necessarily the moved container.
    pub fn move_container(&mut self, old_index: usize, new_index: usize) -> bool {
        let moved = self.registry.move_index(old_index, new_index);
        if moved {
            let selected = self.selected_index;
            if selected == old_index as i32 || selected == new_index as i32 {
                self.update_selected_content();
            }
        }
        moved
    }

    /// Reclaim the container at `index`.
    ///
    /// The projection is recomputed unconditionally: cheaper than tracking
    /// whether the cleared container was the selected one, and safe because
    /// recomputation is idempotent.
    pub fn clear_container(&mut self, index: usize) -> Option<SharedContainer> {
        let removed = self.registry.remove(index);
        self.update_selected_content();
        removed
    }

    // =========================================================================
    // Ambient Configuration
    // =========================================================================

    /// The ambient content-template default.
    pub fn content_template(&self) -> Option<SharedTemplate> {
        self.content_template.clone()
    }

    /// Set the ambient content-template default.
    ///
    /// Realized containers are re-prepared so the new default takes effect:
    /// generated containers are recreated, self-hosting containers are
    /// re-bound in place. The projection is recomputed afterwards.
    pub fn set_content_template(&mut self, template: Option<SharedTemplate>) {
        if template_eq(self.content_template.as_ref(), template.as_ref()) {
            return;
        }
        self.content_template = template;

        for index in self.registry.realized_indices() {
            if matches!(self.items.get(index), Some(TabSource::Data(_))) {
                // Drop the old container; the fresh one picks up the new default
                self.registry.remove(index);
            }
            self.prepare_at(index);
        }
        self.update_selected_content();
    }

    /// The tab strip placement.
    pub fn tab_placement(&self) -> TabPlacement {
        self.tab_placement
    }

    /// Set the tab strip placement, propagating it to realized containers.
    pub fn set_tab_placement(&mut self, placement: TabPlacement) {
        if self.tab_placement != placement {
            self.tab_placement = placement;
            for index in self.registry.realized_indices() {
                if let Some(container) = self.registry.container_at(index) {
                    container.set_placement(placement);
                }
            }
        }
    }

    // =========================================================================
    // Projection
    // =========================================================================

    /// Read-only view of the projected content.
    ///
    /// The projection is written exclusively by this control; consumers
    /// read it here and subscribe via
    /// [`subscribe_selected_content`](Self::subscribe_selected_content).
    pub fn selected_content(&self) -> ReadOnlyProperty<'_, Content> {
        self.selected_content.read_only()
    }

    /// Read-only view of the projected content template.
    pub fn selected_content_template(&self) -> ReadOnlyProperty<'_, Option<SharedTemplate>> {
        self.selected_content_template.read_only()
    }

    /// Subscribe to projected-content changes.
    pub fn subscribe_selected_content<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Content) + Send + Sync + 'static,
    {
        self.selected_content.subscribe(slot)
    }

    /// Subscribe to projected-content changes with automatic disconnection
    /// when the guard is dropped.
    pub fn subscribe_selected_content_scoped<F>(&self, slot: F) -> ConnectionGuard<Content>
    where
        F: Fn(&Content) + Send + Sync + 'static,
    {
        self.selected_content.subscribe_scoped(slot)
    }

    /// Subscribe to projected-template changes.
    pub fn subscribe_selected_content_template<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Option<SharedTemplate>) + Send + Sync + 'static,
    {
        self.selected_content_template.subscribe(slot)
    }

    /// Recompute the projection from the selected container.
    ///
    /// Total over absent containers: whichever of content/template cannot
    /// be resolved nulls out independently.
    fn update_selected_content(&self) {
        if self.selected_index < 0 {
            tracing::trace!(target: "trellis_view", "projection emptied");
            self.assign_projection_template(None);
            self.selected_content.set(Content::None);
            return;
        }

        let index = self.selected_index as usize;
        // Prefer the container the selection already holds; fall back to
        // positional lookup.
        let container = self
            .items
            .get(index)
            .and_then(|source| source.own_container().cloned())
            .or_else(|| self.registry.container_at(index));

        let template = container.as_ref().and_then(|c| c.template());
        let content = container
            .as_ref()
            .map(|c| c.content())
            .unwrap_or(Content::None);

        tracing::trace!(
            target: "trellis_view",
            index,
            resolved = container.is_some(),
            "projection recomputed"
        );
        self.assign_projection_template(template);
        self.selected_content.set(content);
    }

    /// Assign the projected template, notifying only on identity change.
    fn assign_projection_template(&self, template: Option<SharedTemplate>) {
        let changed = self
            .selected_content_template
            .with(|current| !template_eq(current.as_ref(), template.as_ref()));
        if changed {
            self.selected_content_template.set_always(template);
        }
    }
}

impl Default for TabView {
    fn default() -> Self {
        Self::new()
    }
}

// Projection state is shared with presenters
static_assertions::assert_impl_all!(TabView: Send, Sync);
