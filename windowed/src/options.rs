use alloc::rc::Rc;

use crate::error::check_extent;
use crate::{ConfigError, Orientation, VisibleRange};

/// Builds the presentation node for `(item, index)`.
///
/// Called once per newly materialized index. It must return a fresh node on every call; the
/// renderer may call it again for the same index in a later pass. A panic inside it propagates
/// out of the render pass untouched.
pub type RenderItem<T, N> = Rc<dyn Fn(&T, usize) -> N>;

/// Observer fired after every render pass with `(scroll_offset, range)`: the initial pass,
/// scroll and resize passes, and `update_items`.
pub type OnScrollCallback = Rc<dyn Fn(f64, VisibleRange)>;

/// The overscan used when none is configured.
pub const DEFAULT_OVERSCAN: usize = 3;

/// Configuration for [`crate::VirtualList`].
///
/// Callbacks live in `Rc`s, so cloning options to tweak one field is cheap.
pub struct ListOptions<T, N> {
    /// Fixed size of every item along the scroll axis, in pixels.
    pub item_extent: f64,
    /// Items materialized beyond each edge of the strictly visible range.
    pub overscan: usize,
    pub orientation: Orientation,
    pub render_item: RenderItem<T, N>,
    pub on_scroll: Option<OnScrollCallback>,
}

impl<T, N> ListOptions<T, N> {
    pub fn new(item_extent: f64, render_item: impl Fn(&T, usize) -> N + 'static) -> Self {
        Self {
            item_extent,
            overscan: DEFAULT_OVERSCAN,
            orientation: Orientation::Vertical,
            render_item: Rc::new(render_item),
            on_scroll: None,
        }
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_on_scroll(
        mut self,
        on_scroll: Option<impl Fn(f64, VisibleRange) + 'static>,
    ) -> Self {
        self.on_scroll = on_scroll.map(|f| Rc::new(f) as OnScrollCallback);
        self
    }

    pub fn with_render_item(mut self, render_item: impl Fn(&T, usize) -> N + 'static) -> Self {
        self.render_item = Rc::new(render_item);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_extent("item_extent", self.item_extent)?;
        Ok(())
    }
}

impl<T, N> Clone for ListOptions<T, N> {
    fn clone(&self) -> Self {
        Self {
            item_extent: self.item_extent,
            overscan: self.overscan,
            orientation: self.orientation,
            render_item: Rc::clone(&self.render_item),
            on_scroll: self.on_scroll.clone(),
        }
    }
}

impl<T, N> core::fmt::Debug for ListOptions<T, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListOptions")
            .field("item_extent", &self.item_extent)
            .field("overscan", &self.overscan)
            .field("orientation", &self.orientation)
            .field("on_scroll", &self.on_scroll.is_some())
            .finish_non_exhaustive()
    }
}

/// Configuration for [`crate::VirtualGrid`].
///
/// Only the row axis scrolls; every row holds `columns` cells of `column_width` pixels.
pub struct GridOptions<T, N> {
    pub row_height: f64,
    pub column_width: f64,
    pub columns: usize,
    /// Rows materialized beyond each edge of the strictly visible rows.
    pub overscan: usize,
    pub render_item: RenderItem<T, N>,
    pub on_scroll: Option<OnScrollCallback>,
}

impl<T, N> GridOptions<T, N> {
    pub fn new(
        row_height: f64,
        column_width: f64,
        columns: usize,
        render_item: impl Fn(&T, usize) -> N + 'static,
    ) -> Self {
        Self {
            row_height,
            column_width,
            columns,
            overscan: DEFAULT_OVERSCAN,
            render_item: Rc::new(render_item),
            on_scroll: None,
        }
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_on_scroll(
        mut self,
        on_scroll: Option<impl Fn(f64, VisibleRange) + 'static>,
    ) -> Self {
        self.on_scroll = on_scroll.map(|f| Rc::new(f) as OnScrollCallback);
        self
    }

    pub fn with_render_item(mut self, render_item: impl Fn(&T, usize) -> N + 'static) -> Self {
        self.render_item = Rc::new(render_item);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_extent("row_height", self.row_height)?;
        check_extent("column_width", self.column_width)?;
        if self.columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        Ok(())
    }
}

impl<T, N> Clone for GridOptions<T, N> {
    fn clone(&self) -> Self {
        Self {
            row_height: self.row_height,
            column_width: self.column_width,
            columns: self.columns,
            overscan: self.overscan,
            render_item: Rc::clone(&self.render_item),
            on_scroll: self.on_scroll.clone(),
        }
    }
}

impl<T, N> core::fmt::Debug for GridOptions<T, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GridOptions")
            .field("row_height", &self.row_height)
            .field("column_width", &self.column_width)
            .field("columns", &self.columns)
            .field("overscan", &self.overscan)
            .field("on_scroll", &self.on_scroll.is_some())
            .finish_non_exhaustive()
    }
}
