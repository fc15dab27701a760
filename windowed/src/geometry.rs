//! Range and spacer math for fixed-extent windowing.
//!
//! All functions here are pure: they take pixel geometry and a count and return indexes. The
//! renderers call them on every scroll/resize event and compare the result against the last
//! rendered range.

use crate::{Spacers, VisibleRange};

/// Clamps a host-reported pixel value into `0..` (NaN and negative become `0`, `+inf` stays).
pub(crate) fn non_negative(value: f64) -> f64 {
    if value > 0.0 { value } else { 0.0 }
}

/// `floor(value)` as an index. `value` must be non-negative; saturates at `usize::MAX`.
fn floor_index(value: f64) -> usize {
    // `as` truncates toward zero and saturates, which is `floor` for non-negative input.
    value as usize
}

/// `ceil(value)` as an index. `value` must be non-negative; saturates at `usize::MAX`.
fn ceil_index(value: f64) -> usize {
    let t = value as usize;
    if (t as f64) < value {
        t.saturating_add(1)
    } else {
        t
    }
}

/// Computes the overscanned range of indexes intersecting the viewport.
///
/// ```text
/// start = max(0, floor(offset / extent) - overscan)
/// end   = min(count, ceil((offset + viewport) / extent) + overscan)
/// ```
///
/// Boundaries err toward inclusion: an item that is even partially visible is always inside the
/// range. `start` is additionally clamped to `end`, so a scroll offset past the content end yields
/// an empty range at `count` rather than an inverted one.
///
/// `item_extent` must be finite and positive; the option constructors enforce this.
pub fn compute_range(
    scroll_offset: f64,
    viewport_extent: f64,
    item_extent: f64,
    overscan: usize,
    count: usize,
) -> VisibleRange {
    debug_assert!(item_extent.is_finite() && item_extent > 0.0);
    if count == 0 {
        return VisibleRange::EMPTY;
    }

    let offset = non_negative(scroll_offset);
    let viewport = non_negative(viewport_extent);

    let first = floor_index(offset / item_extent);
    let last_exclusive = ceil_index((offset + viewport) / item_extent);

    let end = last_exclusive.saturating_add(overscan).min(count);
    let start = first.saturating_sub(overscan).min(end);
    VisibleRange { start, end }
}

/// Computes spacer sizes for `range` over `count` slots of `item_extent` pixels.
pub fn spacers_for(range: VisibleRange, item_extent: f64, count: usize) -> Spacers {
    let end = range.end.min(count);
    let start = range.start.min(end);
    Spacers {
        before: start as f64 * item_extent,
        after: (count - end) as f64 * item_extent,
        total: count as f64 * item_extent,
    }
}

/// Number of rows needed to lay `count` items out in `columns` columns.
pub fn row_count(count: usize, columns: usize) -> usize {
    if columns == 0 {
        return 0;
    }
    count.div_ceil(columns)
}
