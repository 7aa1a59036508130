//! Error types for the control layer.

use crate::container::ContainerKind;

/// Result type alias for control-layer operations.
pub type Result<T> = std::result::Result<T, ViewError>;

/// Errors that can occur in the control layer.
///
/// Steady-state projection updates never fail; these errors surface only at
/// configuration time (unsupported container requests, out-of-range item
/// operations).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    /// A container was requested with a kind the control cannot generate.
    #[error("unsupported container kind: {kind:?}")]
    UnsupportedContainerKind {
        /// The requested kind.
        kind: ContainerKind,
    },

    /// An item operation addressed an index outside the item list.
    #[error("index {index} out of bounds for {len} items")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The current item count.
        len: usize,
    },
}
