//! Selection state for item controls.
//!
//! Selection is a single integer index: `-1` means "nothing selected",
//! anything else addresses an item. Controls coerce requested indices
//! through [`coerce_index`] so the stored index is always valid for the
//! current item count and selection mode.

/// How a control treats the empty selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// While items exist, something is always selected. Requesting `-1`
    /// selects the first item instead. Tab controls default to this.
    #[default]
    AlwaysSelected,
    /// `-1` is a valid resting state even when items exist.
    Optional,
}

/// Coerce a requested selected index to one valid for `len` items.
///
/// - An empty item list always coerces to `-1`.
/// - Negative requests mean "none": kept as `-1` under
///   [`SelectionMode::Optional`], redirected to `0` under
///   [`SelectionMode::AlwaysSelected`].
/// - Requests past the end clamp to the last item.
pub fn coerce_index(requested: i32, len: usize, mode: SelectionMode) -> i32 {
    if len == 0 {
        return -1;
    }
    if requested < 0 {
        return match mode {
            SelectionMode::AlwaysSelected => 0,
            SelectionMode::Optional => -1,
        };
    }
    (requested as usize).min(len - 1) as i32
}
