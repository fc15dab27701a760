use alloc::vec::Vec;

use crate::geometry::{compute_range, non_negative, spacers_for};
use crate::reconcile::NodeWindow;
use crate::{
    ConfigError, Host, ListOptions, Placement, ScrollBehavior, Spacers, VisibleRange, WindowState,
    Windowed,
};

/// A windowed renderer for a 1D list of fixed-extent items.
///
/// The list owns its item collection and its host. On every scroll or resize event it computes
/// the overscanned [`VisibleRange`], detaches nodes that fell out of it, renders the ones that
/// came into it, and resizes the spacers so the host's scrollbar still reflects the full list.
/// A scroll that does not cross an item boundary costs one range comparison.
///
/// ```
/// # use windowed::{ConfigError, Host, ListOptions, VirtualList, VisibleRange};
/// # fn demo<H: Host<usize, Node = String>>(host: H) -> Result<(), ConfigError> {
/// let items: Vec<u32> = (0..10_000).collect();
/// let list = VirtualList::new(host, items, ListOptions::new(32.0, |n: &u32, _| n.to_string()))?;
/// let _range: VisibleRange = list.visible_range();
/// # Ok(())
/// # }
/// ```
pub struct VirtualList<T, H: Host<usize>> {
    host: H,
    items: Vec<T>,
    options: ListOptions<T, H::Node>,
    window: NodeWindow<usize, H::Node>,
    scroll_offset: f64,
    viewport_extent: f64,
}

impl<T, H: Host<usize>> VirtualList<T, H> {
    /// Validates `options`, mounts into `host`, and performs the initial render pass.
    pub fn new(
        mut host: H,
        items: Vec<T>,
        options: ListOptions<T, H::Node>,
    ) -> Result<Self, ConfigError> {
        options.validate()?;
        wdebug!(
            count = items.len(),
            item_extent = options.item_extent,
            overscan = options.overscan,
            "VirtualList::new"
        );
        host.attach(options.orientation);
        let mut list = Self {
            host,
            items,
            options,
            window: NodeWindow::new(),
            scroll_offset: 0.0,
            viewport_extent: 0.0,
        };
        list.pass();
        Ok(list)
    }

    pub fn options(&self) -> &ListOptions<T, H::Node> {
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

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The last computed overscanned range.
    pub fn visible_range(&self) -> VisibleRange {
        self.window.range()
    }

    /// Scroll offset observed during the last pass.
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn viewport_extent(&self) -> f64 {
        self.viewport_extent
    }

    pub fn spacers(&self) -> Spacers {
        self.window.spacers()
    }

    /// The node currently mounted for `index`, if any.
    pub fn node(&self, index: usize) -> Option<&H::Node> {
        self.window.get(&index)
    }

    pub fn rendered_len(&self) -> usize {
        self.window.len()
    }

    /// Mounted indexes, ascending.
    pub fn rendered_indexes(&self) -> Vec<usize> {
        self.window.sorted_keys()
    }

    /// Content offset of `index` along the scroll axis.
    pub fn item_offset(&self, index: usize) -> f64 {
        index as f64 * self.options.item_extent
    }

    /// Total content extent along the scroll axis.
    pub fn total_extent(&self) -> f64 {
        self.items.len() as f64 * self.options.item_extent
    }

    /// Index of the item under content offset `offset`, or `None` past the end.
    pub fn index_at_offset(&self, offset: f64) -> Option<usize> {
        let index = (non_negative(offset) / self.options.item_extent) as usize;
        (index < self.items.len()).then_some(index)
    }

    /// Replaces the whole collection and rebuilds every node.
    ///
    /// Nothing is reused: index → content may have changed arbitrarily.
    pub fn update_items(&mut self, items: Vec<T>) {
        wdebug!(
            prev = self.items.len(),
            next = items.len(),
            "VirtualList::update_items"
        );
        self.items = items;
        self.window.clear(&mut self.host);
        self.pass();
    }

    /// Replaces a single item.
    ///
    /// If `index` is mounted its node is re-rendered and swapped in place; no other node is
    /// touched and the range is not recomputed. Returns whether a node was swapped. Indexes past
    /// the end of the collection are ignored.
    pub fn update_item(&mut self, index: usize, item: T) -> bool {
        let Some(slot) = self.items.get_mut(index) else {
            wwarn!(index, count = self.items.len(), "update_item: index out of bounds");
            return false;
        };
        *slot = item;
        if !self.window.contains(&index) {
            return false;
        }
        let node = (self.options.render_item)(&self.items[index], index);
        self.window.replace(&mut self.host, index, node)
    }

    /// Scrolls the host to `index * item_extent`.
    pub fn scroll_to_index(&mut self, index: usize, behavior: ScrollBehavior) {
        let offset = self.item_offset(index);
        wtrace!(index, offset, ?behavior, "VirtualList::scroll_to_index");
        self.scroll_to_offset(offset, behavior);
    }

    /// Scrolls the host to a raw content offset.
    ///
    /// An instant scroll renders right away; a smooth scroll renders as the host reports
    /// intermediate positions through [`Self::handle_scroll`].
    pub fn scroll_to_offset(&mut self, offset: f64, behavior: ScrollBehavior) {
        if !offset.is_finite() || offset < 0.0 {
            wwarn!(offset, "scroll_to_offset: clamping invalid target");
        }
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

    /// Scrolls back to a previously captured snapshot (instantly).
    pub fn restore(&mut self, state: &WindowState) {
        self.scroll_to_offset(state.scroll_offset, ScrollBehavior::Instant);
    }

    /// Detaches every node, unmounts from the host, and hands the host back.
    pub fn destroy(mut self) -> H {
        wdebug!(mounted = self.window.len(), "VirtualList::destroy");
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

    /// Runs one render pass. Returns `false` when the range did not change.
    fn render(&mut self) -> bool {
        let count = self.items.len();
        let extent = self.options.item_extent;
        let range = compute_range(
            self.scroll_offset,
            self.viewport_extent,
            extent,
            self.options.overscan,
            count,
        );
        let spacers = spacers_for(range, extent, count);

        let items = &self.items;
        let render_item = &self.options.render_item;
        let changed = self.window.reconcile(
            &mut self.host,
            range,
            spacers,
            |index| range.contains(*index),
            range.as_range(),
            |index| {
                let Some(item) = items.get(index) else {
                    wwarn!(index, count, "skipping stale index");
                    return None;
                };
                Some(Placement {
                    key: index,
                    index,
                    node: render_item(item, index),
                    main_offset: index as f64 * extent,
                    cross_offset: 0.0,
                    main_extent: extent,
                    cross_extent: None,
                })
            },
        );
        debug_assert!(!changed || self.window.len() == range.len());
        changed
    }
}

impl<T, H: Host<usize>> core::fmt::Debug for VirtualList<T, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VirtualList")
            .field("count", &self.items.len())
            .field("options", &self.options)
            .field("range", &self.window.range())
            .field("mounted", &self.window.len())
            .field("scroll_offset", &self.scroll_offset)
            .field("viewport_extent", &self.viewport_extent)
            .finish_non_exhaustive()
    }
}

impl<T, H: Host<usize>> Windowed for VirtualList<T, H> {
    type Key = usize;
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
        VirtualList::handle_scroll(self);
    }

    fn handle_resize(&mut self) {
        VirtualList::handle_resize(self);
    }

    fn scroll_to_index(&mut self, index: usize, behavior: ScrollBehavior) {
        VirtualList::scroll_to_index(self, index, behavior);
    }
}
