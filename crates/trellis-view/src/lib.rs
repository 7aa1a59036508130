//! Selection-aware content controls for the Trellis UI toolkit.
//!
//! This crate provides [`TabView`], a tabbed container whose selected-content
//! projection - the pair of observable fields `selected_content` and
//! `selected_content_template` - always mirrors the container of the
//! selected item, and the supporting pieces: type-erased [`Content`] values,
//! identity-compared [`ContentTemplate`] handles, per-item
//! [`TabItemContainer`]s with a lifecycle [`ContainerRegistry`], and a
//! [`ContentPresenter`] that realizes the projection.
//!
//! # Quick Start
//!
//! ```
//! use trellis_view::{Content, TabView};
//!
//! let mut tabs = TabView::new();
//! tabs.add_tab("General");
//! tabs.add_tab("Advanced");
//!
//! tabs.subscribe_selected_content(|content| {
//!     println!("showing {:?}", content);
//! });
//!
//! tabs.set_selected_index(1);
//! assert_eq!(tabs.selected_content().get(), Content::from("Advanced"));
//! ```

pub mod container;
pub mod content;
pub mod error;
pub mod presenter;
pub mod registry;
pub mod selection;
pub mod tab_view;
pub mod template;

pub use container::{
    ContainerId, ContainerKind, SharedContainer, TabItemContainer, TabPlacement, TabSource,
};
pub use content::Content;
pub use error::{Result, ViewError};
pub use presenter::ContentPresenter;
pub use registry::ContainerRegistry;
pub use selection::{coerce_index, SelectionMode};
pub use tab_view::TabView;
pub use template::{template_eq, ContentTemplate, FuncTemplate, SharedTemplate};
