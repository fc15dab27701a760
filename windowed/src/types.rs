use core::fmt;

/// Half-open interval `[start, end)` of materialized indexes.
///
/// For a [`crate::VirtualList`] the indexes are item indexes; for a [`crate::VirtualGrid`] they
/// are row indexes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start: usize,
    pub end: usize, // exclusive
}

impl VisibleRange {
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "inverted range ({start}..{end})");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    pub fn as_range(&self) -> core::ops::Range<usize> {
        self.start..self.end
    }
}

impl fmt::Display for VisibleRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// How a programmatic scroll reaches its target. Animation is the host's job.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    #[default]
    Instant,
    Smooth,
}

/// The scroll axis of a windowed view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Key of a grid cell in the rendered node map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellKey {
    pub row: usize,
    pub col: usize,
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Sizes of the placeholders that stand in for unmaterialized content.
///
/// `before + materialized + after == total` along the scroll axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spacers {
    pub before: f64,
    pub after: f64,
    /// Full content extent, as if every item were materialized.
    pub total: f64,
}

impl Spacers {
    /// Extent occupied by the materialized nodes between the two spacers.
    pub fn materialized(&self) -> f64 {
        self.total - self.before - self.after
    }
}

/// A freshly rendered node plus the geometry the renderer computed for it.
///
/// Hosts that lay children out in normal flow can ignore the geometry; hosts that position
/// absolutely use `main_offset`/`cross_offset` directly.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement<K, N> {
    pub key: K,
    /// Index into the item collection.
    pub index: usize,
    pub node: N,
    /// Offset along the scroll axis, from the start of the content.
    pub main_offset: f64,
    /// Offset along the cross axis (`0` for lists).
    pub cross_offset: f64,
    pub main_extent: f64,
    /// Cross-axis extent; `None` when the node spans the whole cross axis.
    pub cross_extent: Option<f64>,
}
