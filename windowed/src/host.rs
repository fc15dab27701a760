use alloc::vec::Vec;

use crate::{Orientation, Placement, ScrollBehavior, Spacers};

/// The environment a windowed view renders into.
///
/// A host owns the real scroll container (a DOM element, a terminal pane, a retained widget) and
/// the real presentation nodes. The renderer never touches either directly: it reads the
/// viewport geometry from the host and tells it which nodes to attach, replace, and detach.
///
/// `Node` is a cheap handle (think `Rc`, an arena id, or a DOM node reference). The renderer keeps
/// one clone in its node map and gives one to the host.
///
/// Hosts deliver scroll and resize events by calling `handle_scroll`/`handle_resize` on the view
/// that owns them, for example through `host_mut()` followed by `handle_scroll()`.
pub trait Host<K> {
    type Node: Clone;

    /// Mounts the scroll container and starts listening for scroll events.
    fn attach(&mut self, orientation: Orientation);

    /// Stops listening for scroll events and unmounts the scroll container.
    ///
    /// Called after every node has been removed.
    fn detach(&mut self);

    /// Current scroll position along the scroll axis, in pixels.
    fn scroll_offset(&self) -> f64;

    /// Visible extent of the scroll container along the scroll axis, in pixels.
    fn viewport_extent(&self) -> f64;

    /// Moves the scroll position. An [`ScrollBehavior::Instant`] scroll must be reflected by
    /// [`Host::scroll_offset`] immediately (clamped to the scrollable extent, as native scroll
    /// containers do).
    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior);

    /// Resizes the placeholders around the materialized nodes.
    fn set_spacers(&mut self, spacers: Spacers);

    /// Inserts a batch of freshly rendered nodes in one operation.
    ///
    /// The batch is sorted by key; it is never empty.
    fn append(&mut self, batch: Vec<Placement<K, Self::Node>>);

    /// Swaps the node mounted for `key` in place, keeping its position.
    fn replace(&mut self, key: &K, node: Self::Node);

    /// Detaches the node mounted for `key`.
    fn remove(&mut self, key: &K, node: Self::Node);
}

/// The host-facing surface shared by [`crate::VirtualList`] and [`crate::VirtualGrid`].
///
/// Adapters that drive a view from host events (see the `windowed-adapter` crate) are written
/// against this trait so they work with either layout.
pub trait Windowed {
    type Key;
    type Host: Host<Self::Key>;

    fn host(&self) -> &Self::Host;

    fn host_mut(&mut self) -> &mut Self::Host;

    /// The last computed range (items for a list, rows for a grid).
    fn visible_range(&self) -> crate::VisibleRange;

    /// Scroll event entry point: re-reads host geometry, renders, notifies `on_scroll`.
    fn handle_scroll(&mut self);

    /// Resize event entry point: re-reads host geometry, renders, notifies `on_scroll`.
    fn handle_resize(&mut self);

    fn scroll_to_index(&mut self, index: usize, behavior: ScrollBehavior);
}
