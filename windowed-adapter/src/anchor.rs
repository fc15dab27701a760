use alloc::vec::Vec;
use core::fmt;

use windowed::{Host, ScrollBehavior, VirtualList};

/// A scroll anchor that preserves visual position across collection replacement.
///
/// `update_items` rebuilds every node and keeps the raw scroll offset, so inserting items above
/// the viewport (loading older history, for example) would make the content jump. Capturing an
/// anchor before the update and applying it afterwards keeps the same item at the same spot.
#[derive(Clone, PartialEq)]
pub struct ScrollAnchor<K> {
    pub key: K,
    /// Distance from the anchor item's start to the viewport's scroll offset.
    pub offset_in_item: f64,
}

impl<K: fmt::Debug> fmt::Debug for ScrollAnchor<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollAnchor")
            .field("key", &self.key)
            .field("offset_in_item", &self.offset_in_item)
            .finish()
    }
}

/// Captures an anchor for the item at the top of the viewport.
///
/// `key_of` maps an item to a stable identity. Returns `None` for an empty list.
pub fn capture_first_visible_anchor<T, H, K>(
    list: &VirtualList<T, H>,
    key_of: impl Fn(&T) -> K,
) -> Option<ScrollAnchor<K>>
where
    H: Host<usize>,
{
    let offset = list.scroll_offset();
    let index = list.index_at_offset(offset)?;
    let item = list.items().get(index)?;
    Some(ScrollAnchor {
        key: key_of(item),
        offset_in_item: offset - list.item_offset(index),
    })
}

/// Applies a previously captured anchor by scrolling instantly.
///
/// The caller provides a `key_to_index` mapping for the *current* collection. Returns `true`
/// when the anchor item was found.
pub fn apply_anchor<T, H, K>(
    list: &mut VirtualList<T, H>,
    anchor: &ScrollAnchor<K>,
    mut key_to_index: impl FnMut(&K) -> Option<usize>,
) -> bool
where
    H: Host<usize>,
{
    let Some(index) = key_to_index(&anchor.key) else {
        return false;
    };
    if index >= list.len() {
        awarn!(index, count = list.len(), "apply_anchor: index out of bounds");
        return false;
    }
    let target = list.item_offset(index) + anchor.offset_in_item;
    list.scroll_to_offset(target, ScrollBehavior::Instant);
    true
}

/// Replaces the list's items while keeping the top visible item in place.
///
/// Looks the anchor up by linear search over the new items. Returns `true` when the anchor
/// survived the replacement.
pub fn update_items_anchored<T, H, K>(
    list: &mut VirtualList<T, H>,
    items: Vec<T>,
    key_of: impl Fn(&T) -> K,
) -> bool
where
    H: Host<usize>,
    K: PartialEq,
{
    let anchor = capture_first_visible_anchor(&*list, &key_of);
    list.update_items(items);
    let Some(anchor) = anchor else {
        return false;
    };
    let found = list.items().iter().position(|item| key_of(item) == anchor.key);
    apply_anchor(list, &anchor, |_| found)
}
