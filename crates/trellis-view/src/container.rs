//! Item containers for tabbed controls.
//!
//! A container is the view object created for one item: it owns the item's
//! content value and an optional content template. Containers are created
//! lazily, reused when items are re-bound, and reclaimed by the
//! virtualization layer; the control tracks them by identity.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use trellis_core::Property;

use crate::content::Content;
use crate::template::{template_eq, SharedTemplate};

/// Position of the tab strip relative to the content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabPlacement {
    /// Tab strip above the content (default).
    #[default]
    Top,
    /// Tab strip below the content.
    Bottom,
    /// Tab strip left of the content.
    Left,
    /// Tab strip right of the content.
    Right,
}

impl TabPlacement {
    /// Returns `true` for top/bottom placements.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, TabPlacement::Top | TabPlacement::Bottom)
    }
}

/// A unique identity for a container, stable across re-binding and moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerId(u64);

impl ContainerId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// The container bound to one tab item.
///
/// Fields use reactive properties so that a container can be re-bound in
/// place when virtualization recycles it. Content equality follows
/// [`Content`] semantics; the template is tracked by identity.
pub struct TabItemContainer {
    id: ContainerId,
    content: Property<Content>,
    content_template: Property<Option<SharedTemplate>>,
    placement: Property<TabPlacement>,
}

/// A shared, identity-compared handle to a container.
pub type SharedContainer = Arc<TabItemContainer>;

impl TabItemContainer {
    /// Create an empty container.
    pub fn new() -> Self {
        Self {
            id: ContainerId::next(),
            content: Property::new(Content::None),
            content_template: Property::new(None),
            placement: Property::new(TabPlacement::default()),
        }
    }

    /// Create a container holding the given content.
    pub fn with_content(content: impl Into<Content>) -> Self {
        let container = Self::new();
        container.content.set_silent(content.into());
        container
    }

    /// Set a container-local template using the builder pattern.
    pub fn with_template(self, template: SharedTemplate) -> Self {
        self.content_template.set_silent(Some(template));
        self
    }

    /// This container's identity.
    pub fn id(&self) -> ContainerId {
        self.id
    }

    /// The content currently bound to this container.
    pub fn content(&self) -> Content {
        self.content.get()
    }

    /// Bind new content, returning `true` if it changed.
    pub fn set_content(&self, content: impl Into<Content>) -> bool {
        self.content.set(content.into())
    }

    /// The container's content template, if any.
    pub fn template(&self) -> Option<SharedTemplate> {
        self.content_template.get()
    }

    /// Set the content template, returning `true` if the handle changed.
    pub fn set_template(&self, template: Option<SharedTemplate>) -> bool {
        let changed = self
            .content_template
            .with(|current| !template_eq(current.as_ref(), template.as_ref()));
        if changed {
            self.content_template.set_silent(template);
        }
        changed
    }

    /// The tab strip placement propagated to this container.
    pub fn placement(&self) -> TabPlacement {
        self.placement.get()
    }

    /// Propagate the ambient placement flag.
    pub fn set_placement(&self, placement: TabPlacement) -> bool {
        self.placement.set(placement)
    }
}

impl PartialEq for TabItemContainer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TabItemContainer {}

impl Default for TabItemContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TabItemContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabItemContainer")
            .field("id", &self.id)
            .field("content", &self.content())
            .field("has_template", &self.template().is_some())
            .field("placement", &self.placement())
            .finish()
    }
}

/// How a container comes into existence for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// The control generates a container and binds the item's data into it.
    Generated,
    /// The item *is* its own container; the control hosts it directly.
    ItemIsOwnContainer,
}

/// A tab item as supplied by the caller.
///
/// Plain data items get a generated container; a caller may instead hand
/// over a ready-made container, which the control hosts as-is.
#[derive(Debug, Clone)]
pub enum TabSource {
    /// Opaque data; the control generates and binds a container.
    Data(Content),
    /// A self-hosting container.
    OwnContainer(SharedContainer),
}

impl TabSource {
    /// The container-creation strategy this item requires.
    pub fn kind(&self) -> ContainerKind {
        match self {
            TabSource::Data(_) => ContainerKind::Generated,
            TabSource::OwnContainer(_) => ContainerKind::ItemIsOwnContainer,
        }
    }

    /// The self-hosting container, if this item is one.
    pub fn own_container(&self) -> Option<&SharedContainer> {
        match self {
            TabSource::OwnContainer(container) => Some(container),
            TabSource::Data(_) => None,
        }
    }
}

impl<T: Into<Content>> From<T> for TabSource {
    fn from(value: T) -> Self {
        TabSource::Data(value.into())
    }
}

// Containers are shared between the control and the virtualization layer
static_assertions::assert_impl_all!(TabItemContainer: Send, Sync);
