use windowed::{NodeKey, ScrollBehavior, VisibleRange, Windowed};

use crate::MemoryHost;

/// A framework-neutral controller that routes [`MemoryHost`] events into a windowed view.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_user_scroll` / `on_resize` when UI events occur
/// - `tick(now_ms)` each frame (advances smooth scrolls)
///
/// Every entry point also delivers scroll events the host queued on its own, such as the offset
/// being clamped after the content shrank.
#[derive(Debug)]
pub struct Controller<W> {
    view: W,
}

impl<W, K, N> Controller<W>
where
    W: Windowed<Key = K, Host = MemoryHost<K, N>>,
    K: NodeKey,
    N: Clone,
{
    pub fn new(view: W) -> Self {
        Self { view }
    }

    pub fn view(&self) -> &W {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut W {
        &mut self.view
    }

    pub fn into_view(self) -> W {
        self.view
    }

    pub fn host(&self) -> &MemoryHost<K, N> {
        self.view.host()
    }

    pub fn visible_range(&self) -> VisibleRange {
        self.view.visible_range()
    }

    pub fn is_animating(&self) -> bool {
        self.view.host().is_smooth_scrolling()
    }

    pub fn cancel_animation(&mut self) {
        self.view.host_mut().cancel_smooth_scroll();
    }

    /// Call this when the user scrolls. Returns whether the view saw a scroll event.
    pub fn on_user_scroll(&mut self, offset: f64) -> bool {
        let delivered = self.view.host_mut().user_scroll(offset);
        if delivered {
            self.view.handle_scroll();
        }
        self.sync();
        delivered
    }

    /// Call this when the scroll container is resized.
    pub fn on_resize(&mut self, viewport_extent: f64) {
        if self.view.host_mut().set_viewport_extent(viewport_extent) {
            // The resize pass already reads the re-clamped offset.
            self.view.host_mut().take_pending_scroll();
            self.view.handle_resize();
        }
        self.sync();
    }

    pub fn scroll_to_index(&mut self, index: usize, behavior: ScrollBehavior) {
        self.view.scroll_to_index(index, behavior);
        self.sync();
    }

    /// Advances smooth scrolling.
    ///
    /// Returns the new offset when the host moved, `None` otherwise.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        let moved = self.view.host_mut().tick(now_ms);
        if moved {
            self.view.handle_scroll();
        }
        self.sync();
        moved.then(|| self.view.host().offset())
    }

    /// Delivers a scroll event the host queued by itself, if any.
    pub fn sync(&mut self) -> bool {
        if self.view.host_mut().take_pending_scroll() {
            self.view.handle_scroll();
            return true;
        }
        false
    }
}
