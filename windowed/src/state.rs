use crate::VisibleRange;

/// A lightweight, serializable snapshot of a windowed view's scroll state.
///
/// Capture it with `snapshot()` when a view is torn down (for example when the user switches
/// boards) and hand it to `restore()` on the replacement view to land on the same rows.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowState {
    pub scroll_offset: f64,
    pub viewport_extent: f64,
    /// The range that was materialized when the snapshot was taken.
    pub range: VisibleRange,
}
