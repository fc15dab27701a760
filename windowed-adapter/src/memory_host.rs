use alloc::vec::Vec;

use windowed::{Host, NodeKey, Orientation, Placement, ScrollBehavior, Spacers};

use crate::{Easing, Tween};

/// Default duration of a smooth programmatic scroll.
pub const SMOOTH_SCROLL_MS: u64 = 300;

/// A node mounted in a [`MemoryHost`], with the geometry it was placed at.
#[derive(Clone, Debug, PartialEq)]
pub struct Mounted<K, N> {
    pub key: K,
    pub index: usize,
    pub node: N,
    pub main_offset: f64,
    pub cross_offset: f64,
}

/// Counters for the work a renderer asked of a [`MemoryHost`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostStats {
    /// Batch flushes (one per render pass that mounted something).
    pub appends: usize,
    pub nodes_appended: usize,
    pub replaces: usize,
    pub removals: usize,
}

/// A retained, in-memory stand-in for a native scroll container.
///
/// It behaves the way a browser scroll element does where it matters to a windowed view:
/// - children stay in key order,
/// - the scroll offset is clamped to `0..=total - viewport`,
/// - shrinking content re-clamps the offset and queues a scroll event,
/// - smooth scrolls advance on [`MemoryHost::tick`],
/// - no events are delivered once detached.
///
/// Useful for tests, headless simulations, and as a reference for writing real hosts.
#[derive(Clone, Debug)]
pub struct MemoryHost<K, N> {
    children: Vec<Mounted<K, N>>,
    spacers: Spacers,
    offset: f64,
    viewport: f64,
    attached: bool,
    orientation: Option<Orientation>,
    smooth: Option<Tween>,
    smooth_duration_ms: u64,
    easing: Easing,
    now_ms: u64,
    pending_scroll: bool,
    stats: HostStats,
}

impl<K: NodeKey, N: Clone> MemoryHost<K, N> {
    pub fn new(viewport_extent: f64) -> Self {
        Self {
            children: Vec::new(),
            spacers: Spacers::default(),
            offset: 0.0,
            viewport: viewport_extent.max(0.0),
            attached: false,
            orientation: None,
            smooth: None,
            smooth_duration_ms: SMOOTH_SCROLL_MS,
            easing: Easing::default(),
            now_ms: 0,
            pending_scroll: false,
            stats: HostStats::default(),
        }
    }

    pub fn with_smooth_scroll(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.smooth_duration_ms = duration_ms;
        self.easing = easing;
        self
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    /// Mounted nodes in key order.
    pub fn children(&self) -> &[Mounted<K, N>] {
        &self.children
    }

    pub fn child(&self, key: &K) -> Option<&N> {
        self.position(key).ok().map(|i| &self.children[i].node)
    }

    pub fn spacers(&self) -> Spacers {
        self.spacers
    }

    pub fn stats(&self) -> HostStats {
        self.stats
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn max_scroll_offset(&self) -> f64 {
        (self.spacers.total - self.viewport).max(0.0)
    }

    pub fn is_smooth_scrolling(&self) -> bool {
        self.smooth.is_some()
    }

    pub fn cancel_smooth_scroll(&mut self) {
        self.smooth = None;
    }

    /// Simulates the user scrolling (wheel, drag). Cancels any smooth scroll.
    ///
    /// Returns `true` when a scroll event should be delivered to the view.
    pub fn user_scroll(&mut self, offset: f64) -> bool {
        self.smooth = None;
        let moved = self.move_to(offset);
        self.attached && moved
    }

    /// Simulates the container being resized.
    ///
    /// Returns `true` when a resize event should be delivered to the view. A resize that forces
    /// the offset back into range also queues a scroll event.
    pub fn set_viewport_extent(&mut self, extent: f64) -> bool {
        let extent = extent.max(0.0);
        if extent == self.viewport {
            return false;
        }
        self.viewport = extent;
        self.reclamp();
        self.attached
    }

    /// Advances the clock and any smooth scroll in progress.
    ///
    /// Returns `true` when the offset moved and a scroll event should be delivered.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.now_ms = self.now_ms.max(now_ms);
        let Some(tween) = self.smooth else {
            return false;
        };
        let moved = self.move_to(tween.sample(self.now_ms));
        if tween.is_done(self.now_ms) {
            self.smooth = None;
        }
        atrace!(now_ms, offset = self.offset, moved, "MemoryHost::tick");
        self.attached && moved
    }

    /// Takes a scroll event queued by content or viewport changes.
    pub fn take_pending_scroll(&mut self) -> bool {
        core::mem::take(&mut self.pending_scroll) && self.attached
    }

    fn clamp_offset(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_scroll_offset())
    }

    fn move_to(&mut self, offset: f64) -> bool {
        let clamped = self.clamp_offset(offset);
        if clamped == self.offset {
            return false;
        }
        self.offset = clamped;
        true
    }

    fn reclamp(&mut self) {
        if self.move_to(self.offset) {
            self.pending_scroll = true;
        }
    }

    fn position(&self, key: &K) -> Result<usize, usize> {
        self.children.binary_search_by(|c| c.key.cmp(key))
    }
}

impl<K: NodeKey, N: Clone> Host<K> for MemoryHost<K, N> {
    type Node = N;

    fn attach(&mut self, orientation: Orientation) {
        self.attached = true;
        self.orientation = Some(orientation);
    }

    fn detach(&mut self) {
        debug_assert!(self.children.is_empty(), "detached with mounted children");
        self.attached = false;
        self.smooth = None;
        self.pending_scroll = false;
    }

    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn viewport_extent(&self) -> f64 {
        self.viewport
    }

    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior) {
        match behavior {
            ScrollBehavior::Instant => {
                self.smooth = None;
                self.move_to(offset);
            }
            ScrollBehavior::Smooth => {
                let to = self.clamp_offset(offset);
                self.smooth = Some(match self.smooth {
                    Some(mut tween) => {
                        tween.retarget(self.now_ms, to, self.smooth_duration_ms);
                        tween
                    }
                    None => Tween::new(
                        self.offset,
                        to,
                        self.now_ms,
                        self.smooth_duration_ms,
                        self.easing,
                    ),
                });
            }
        }
    }

    fn set_spacers(&mut self, spacers: Spacers) {
        self.spacers = spacers;
        self.reclamp();
    }

    fn append(&mut self, batch: Vec<Placement<K, N>>) {
        self.stats.appends += 1;
        self.stats.nodes_appended += batch.len();
        for p in batch {
            let mounted = Mounted {
                key: p.key,
                index: p.index,
                node: p.node,
                main_offset: p.main_offset,
                cross_offset: p.cross_offset,
            };
            match self.position(&p.key) {
                Ok(i) => {
                    awarn!(key = ?p.key, "append: key already mounted, replacing");
                    self.children[i] = mounted;
                }
                Err(i) => self.children.insert(i, mounted),
            }
        }
    }

    fn replace(&mut self, key: &K, node: N) {
        self.stats.replaces += 1;
        match self.position(key) {
            Ok(i) => self.children[i].node = node,
            Err(_) => {
                awarn!(?key, "replace: key not mounted");
            }
        }
    }

    fn remove(&mut self, key: &K, _node: N) {
        self.stats.removals += 1;
        match self.position(key) {
            Ok(i) => {
                self.children.remove(i);
            }
            Err(_) => {
                awarn!(?key, "remove: key not mounted");
            }
        }
    }
}
