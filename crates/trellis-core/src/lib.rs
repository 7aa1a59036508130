//! Core systems for Trellis.
//!
//! This crate provides the foundational components of the Trellis control
//! toolkit:
//!
//! - **Signal/Slot System**: Type-safe notification between controls and
//!   observers, with synchronous direct dispatch
//! - **Property System**: Value cells with change detection
//! - **Observable Properties**: Properties paired with their change signal,
//!   for derived state exposed by controls
//!
//! # Signal/Slot Example
//!
//! ```
//! use trellis_core::Signal;
//!
//! let selection_changed = Signal::<i32>::new();
//!
//! let conn_id = selection_changed.connect(|index| {
//!     println!("selected index is now {}", index);
//! });
//!
//! selection_changed.emit(2);
//! selection_changed.disconnect(conn_id);
//! ```
//!
//! # Observable Property Example
//!
//! ```
//! use trellis_core::ObservableProperty;
//!
//! let title = ObservableProperty::new(String::new());
//! title.subscribe(|t| println!("title changed to {:?}", t));
//! title.set("Settings".to_string());
//! ```

pub mod error;
pub mod logging;
pub mod observable;
pub mod property;
pub mod signal;

pub use error::{CoreError, Result, SignalError};
pub use observable::ObservableProperty;
pub use property::{Property, PropertyError, ReadOnlyProperty};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
