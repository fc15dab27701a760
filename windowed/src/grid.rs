use alloc::vec::Vec;

use crate::geometry::{compute_range, non_negative, row_count, spacers_for};
use crate::reconcile::NodeWindow;
use crate::{
    CellKey, ConfigError, GridOptions, Host, Placement, ScrollBehavior, Spacers, VisibleRange,
    WindowState, Windowed,
};

/// A windowed renderer for a fixed-column grid.
///
/// Items are laid out row-major (`index = row * columns + col`). Only the row axis scrolls, so
/// the range logic is the list's applied to rows; every visible row materializes up to `columns`
/// cells, keyed by [`CellKey`]. The last row may be partial.
pub struct VirtualGrid<T, H: Host<CellKey>> {
    host: H,
    items: Vec<T>,
    options: GridOptions<T, H::Node>,
    window: NodeWindow<CellKey, H::Node>,
    scroll_offset: f64,
    viewport_extent: f64,
}

impl<T, H: Host<CellKey>> VirtualGrid<T, H> {
    pub fn new(
        mut host: H,
        items: Vec<T>,
        options: GridOptions<T, H::Node>,
    ) -> Result<Self, ConfigError> {
        options.validate()?;
        wdebug!(
            count = items.len(),
            columns = options.columns,
            row_height = options.row_height,
            column_width = options.column_width,
            "VirtualGrid::new"
        );
        host.attach(crate::Orientation::Vertical);
        let mut grid = Self {
            host,
            items,
            options,
            window: NodeWindow::new(),
            scroll_offset: 0.0,
            viewport_extent: 0.0,
        };
        grid.pass();
        Ok(grid)
    }

    pub fn options(&self) -> &GridOptions<T, H::Node> {
        &self.options
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn columns(&self) -> usize {
        self.options.columns
    }

    pub fn rows(&self) -> usize {
        row_count(self.items.len(), self.options.columns)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The last computed overscanned range of rows.
    pub fn visible_range(&self) -> VisibleRange {
        self.window.range()
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn viewport_extent(&self) -> f64 {
        self.viewport_extent
    }

    pub fn spacers(&self) -> Spacers {
        self.window.spacers()
    }

    pub fn cell_of(&self, index: usize) -> CellKey {
        let columns = self.options.columns;
        CellKey {
            row: index / columns,
            col: index % columns,
        }
    }

    pub fn index_of(&self, cell: CellKey) -> usize {
        cell.row * self.options.columns + cell.col
    }

    pub fn node(&self, cell: CellKey) -> Option<&H::Node> {
        self.window.get(&cell)
    }

    pub fn rendered_len(&self) -> usize {
        self.window.len()
    }

    /// Mounted cells, row-major.
    pub fn rendered_cells(&self) -> Vec<CellKey> {
        self.window.sorted_keys()
    }

    pub fn total_extent(&self) -> f64 {
        self.rows() as f64 * self.options.row_height
    }

    /// Replaces the whole collection and rebuilds every cell.
    pub fn update_items(&mut self, items: Vec<T>) {
        wdebug!(
            prev = self.items.len(),
            next = items.len(),
            "VirtualGrid::update_items"
        );
        self.items = items;
        self.window.clear(&mut self.host);
        self.pass();
    }

    /// Replaces a single item, swapping its cell in place when mounted.
    ///
    /// Returns whether a node was swapped.
    pub fn update_item(&mut self, index: usize, item: T) -> bool {
        let Some(slot) = self.items.get_mut(index) else {
            wwarn!(index, count = self.items.len(), "update_item: index out of bounds");
            return false;
        };
        *slot = item;
        let cell = self.cell_of(index);
        if !self.window.contains(&cell) {
            return false;
        }
        let node = (self.options.render_item)(&self.items[index], index);
        self.window.replace(&mut self.host, cell, node)
    }

    /// Scrolls the host to the row containing `index`.
    pub fn scroll_to_index(&mut self, index: usize, behavior: ScrollBehavior) {
        let row = index / self.options.columns;
        let offset = row as f64 * self.options.row_height;
        wtrace!(index, row, offset, ?behavior, "VirtualGrid::scroll_to_index");
        self.scroll_to_offset(offset, behavior);
    }

    pub fn scroll_to_offset(&mut self, offset: f64, behavior: ScrollBehavior) {
        self.host.scroll_to(non_negative(offset), behavior);
        if behavior == ScrollBehavior::Instant {
            self.handle_scroll();
        }
    }

    pub fn handle_scroll(&mut self) {
        self.pass();
    }

    pub fn handle_resize(&mut self) {
        self.pass();
    }

    pub fn snapshot(&self) -> WindowState {
        WindowState {
            scroll_offset: self.scroll_offset,
            viewport_extent: self.viewport_extent,
            range: self.window.range(),
        }
    }

    pub fn restore(&mut self, state: &WindowState) {
        self.scroll_to_offset(state.scroll_offset, ScrollBehavior::Instant);
    }

    pub fn destroy(mut self) -> H {
        wdebug!(mounted = self.window.len(), "VirtualGrid::destroy");
        self.window.clear(&mut self.host);
        self.host.detach();
        self.host
    }

    fn sync_geometry(&mut self) {
        self.scroll_offset = self.host.scroll_offset();
        self.viewport_extent = self.host.viewport_extent();
    }

    /// Re-reads host geometry, renders, then reports to `on_scroll`.
    ///
    /// The observer hears about every pass, including ones that left the range unchanged.
    fn pass(&mut self) {
        self.sync_geometry();
        self.render();
        if let Some(cb) = &self.options.on_scroll {
            cb(self.scroll_offset, self.window.range());
        }
    }

    fn render(&mut self) -> bool {
        let count = self.items.len();
        let columns = self.options.columns;
        let row_height = self.options.row_height;
        let column_width = self.options.column_width;
        let rows = row_count(count, columns);
        let range = compute_range(
            self.scroll_offset,
            self.viewport_extent,
            row_height,
            self.options.overscan,
            rows,
        );
        let spacers = spacers_for(range, row_height, rows);

        let exists =
            move |cell: &CellKey| cell.col < columns && cell.row * columns + cell.col < count;
        let wanted = range
            .as_range()
            .flat_map(move |row| (0..columns).map(move |col| CellKey { row, col }))
            .filter(exists);

        let items = &self.items;
        let render_item = &self.options.render_item;
        self.window.reconcile(
            &mut self.host,
            range,
            spacers,
            |cell| range.contains(cell.row) && exists(cell),
            wanted,
            |cell| {
                let index = cell.row * columns + cell.col;
                let Some(item) = items.get(index) else {
                    wwarn!(index, count, "skipping stale index");
                    return None;
                };
                Some(Placement {
                    key: cell,
                    index,
                    node: render_item(item, index),
                    main_offset: cell.row as f64 * row_height,
                    cross_offset: cell.col as f64 * column_width,
                    main_extent: row_height,
                    cross_extent: Some(column_width),
                })
            },
        )
    }
}

impl<T, H: Host<CellKey>> core::fmt::Debug for VirtualGrid<T, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VirtualGrid")
            .field("count", &self.items.len())
            .field("options", &self.options)
            .field("range", &self.window.range())
            .field("mounted", &self.window.len())
            .field("scroll_offset", &self.scroll_offset)
            .field("viewport_extent", &self.viewport_extent)
            .finish_non_exhaustive()
    }
}

impl<T, H: Host<CellKey>> Windowed for VirtualGrid<T, H> {
    type Key = CellKey;
    type Host = H;

    fn host(&self) -> &H {
        &self.host
    }

    fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn visible_range(&self) -> VisibleRange {
        self.window.range()
    }

    fn handle_scroll(&mut self) {
        VirtualGrid::handle_scroll(self);
    }

    fn handle_resize(&mut self) {
        VirtualGrid::handle_resize(self);
    }

    fn scroll_to_index(&mut self, index: usize, behavior: ScrollBehavior) {
        VirtualGrid::scroll_to_index(self, index, behavior);
    }
}
