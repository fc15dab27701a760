use crate::*;

use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use windowed::{
    CellKey, GridOptions, ListOptions, Orientation, ScrollBehavior, VirtualGrid, VirtualList,
    VisibleRange,
};

type List = VirtualList<u32, MemoryHost<usize, String>>;

fn label(item: &u32, index: usize) -> String {
    format!("{index}:{item}")
}

fn list_on(host: MemoryHost<usize, String>, count: u32) -> List {
    VirtualList::new(host, (0..count).collect(), ListOptions::new(32.0, label)).unwrap()
}

fn controller(count: u32) -> Controller<List> {
    Controller::new(list_on(MemoryHost::new(320.0), count))
}

fn assert_mounted_matches_range(c: &Controller<List>) {
    let expected: Vec<usize> = c.visible_range().as_range().collect();
    let mounted: Vec<usize> = c.host().children().iter().map(|m| m.key).collect();
    assert_eq!(mounted, expected);
    assert_eq!(c.host().spacers(), c.view().spacers());
}

#[test]
fn easing_endpoints_are_exact() {
    for easing in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOutCubic] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
    }
    assert_eq!(Easing::EaseInOutCubic.sample(0.5), 0.5);
}

#[test]
fn tween_lands_on_target_and_retargets_from_current_position() {
    let mut t = Tween::new(0.0, 100.0, 0, 100, Easing::Linear);
    assert_eq!(t.sample(50), 50.0);
    assert_eq!(t.progress(25), 0.25);
    assert!(!t.is_done(99));
    assert_eq!(t.sample(250), 100.0);

    t.retarget(50, 0.0, 100);
    assert_eq!(t.from, 50.0);
    assert_eq!(t.start_ms, 50);
    assert_eq!(t.sample(100), 25.0);
}

#[test]
fn memory_host_keeps_children_sorted_and_counts_work() {
    let c = controller(10_000);
    let host = c.host();
    assert!(host.is_attached());
    assert_eq!(host.orientation(), Some(Orientation::Vertical));
    assert_eq!(host.children().len(), 13);
    assert_eq!(host.child(&12).map(String::as_str), Some("12:12"));
    assert_eq!(host.children()[5].main_offset, 160.0);
    assert_eq!(
        host.stats(),
        HostStats {
            appends: 1,
            nodes_appended: 13,
            replaces: 0,
            removals: 0,
        }
    );
    assert_eq!(host.max_scroll_offset(), 320_000.0 - 320.0);
}

#[test]
fn user_scroll_to_item_100() {
    let mut c = controller(10_000);
    assert!(c.on_user_scroll(3200.0));
    assert_eq!(c.visible_range(), VisibleRange::new(97, 113));
    assert_mounted_matches_range(&c);

    let stats = c.host().stats();
    assert_eq!(stats.removals, 13);
    assert_eq!(stats.nodes_appended, 13 + 16);
}

#[test]
fn sub_item_scroll_does_no_host_work() {
    let mut c = controller(10_000);
    c.on_user_scroll(3210.0);
    let before = c.host().stats();
    assert!(c.on_user_scroll(3230.0));
    assert_eq!(c.visible_range(), VisibleRange::new(97, 114));
    assert_eq!(c.host().stats(), before);
}

#[test]
fn scroll_past_the_end_is_clamped_by_the_host() {
    let mut c = controller(10_000);
    assert!(c.on_user_scroll(1e9));
    assert_eq!(c.host().offset(), 319_680.0);
    assert_eq!(c.visible_range(), VisibleRange::new(9987, 10_000));
    assert_mounted_matches_range(&c);

    // Already at the bottom: nothing to deliver.
    assert!(!c.on_user_scroll(1e9));
}

#[test]
fn instant_scroll_to_index() {
    let mut c = controller(10_000);
    c.scroll_to_index(5000, ScrollBehavior::Instant);
    assert_eq!(c.host().offset(), 160_000.0);
    assert_eq!(c.visible_range(), VisibleRange::new(4997, 5013));
    assert_mounted_matches_range(&c);
}

#[test]
fn smooth_scroll_advances_on_tick() {
    let host = MemoryHost::new(320.0).with_smooth_scroll(100, Easing::Linear);
    let mut c = Controller::new(list_on(host, 10_000));

    c.scroll_to_index(500, ScrollBehavior::Smooth);
    assert!(c.is_animating());
    assert_eq!(c.visible_range(), VisibleRange::new(0, 13));

    assert_eq!(c.tick(50), Some(8000.0));
    assert_eq!(c.visible_range(), VisibleRange::new(247, 263));
    assert_mounted_matches_range(&c);

    assert_eq!(c.tick(100), Some(16_000.0));
    assert!(!c.is_animating());
    assert_eq!(c.visible_range(), VisibleRange::new(497, 513));

    assert_eq!(c.tick(150), None);
}

#[test]
fn user_scroll_cancels_smooth_scroll() {
    let mut c = controller(10_000);
    c.scroll_to_index(500, ScrollBehavior::Smooth);
    assert!(c.is_animating());
    c.on_user_scroll(64.0);
    assert!(!c.is_animating());
    assert_eq!(c.tick(1_000), None);
    assert_eq!(c.visible_range(), VisibleRange::new(0, 15));
}

#[test]
fn resize_grows_the_window() {
    let mut c = controller(10_000);
    c.on_resize(640.0);
    assert_eq!(c.view().viewport_extent(), 640.0);
    assert_eq!(c.visible_range(), VisibleRange::new(0, 23));
    assert_mounted_matches_range(&c);
}

#[test]
fn resize_that_reclamps_notifies_once() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let opts = ListOptions::new(32.0, label).with_on_scroll(Some({
        let seen = Rc::clone(&seen);
        move |offset: f64, range: VisibleRange| seen.borrow_mut().push((offset, range))
    }));
    let list = VirtualList::new(MemoryHost::new(320.0), (0..10_000).collect(), opts).unwrap();
    let mut c = Controller::new(list);
    c.on_user_scroll(1e9);

    // Growing the viewport at the bottom pulls the offset back.
    c.on_resize(640.0);
    assert_eq!(c.host().offset(), 319_360.0);
    assert!(!c.sync());
    assert_eq!(
        *seen.borrow(),
        [
            (0.0, VisibleRange::new(0, 13)),
            (319_680.0, VisibleRange::new(9987, 10_000)),
            (319_360.0, VisibleRange::new(9977, 10_000)),
        ]
    );
}

#[test]
fn shrinking_the_collection_delivers_the_clamped_scroll() {
    let mut c = controller(10_000);
    c.on_user_scroll(160_000.0);
    assert_eq!(c.visible_range(), VisibleRange::new(4997, 5013));

    c.view_mut().update_items((0..100).collect());
    // The old offset is past the end of the new content.
    assert!(c.visible_range().is_empty());
    assert!(c.sync());
    assert_eq!(c.host().offset(), 2880.0);
    assert_eq!(c.visible_range(), VisibleRange::new(87, 100));
    assert_mounted_matches_range(&c);
    assert!(!c.sync());
}

#[test]
fn update_item_swaps_one_mounted_node() {
    let mut c = controller(10_000);
    assert!(c.view_mut().update_item(4, 999));
    assert_eq!(c.host().child(&4).map(String::as_str), Some("4:999"));
    assert_eq!(c.host().stats().replaces, 1);

    assert!(!c.view_mut().update_item(500, 7));
    assert_eq!(c.host().stats().replaces, 1);
}

#[test]
fn destroy_returns_a_detached_empty_host() {
    let mut c = controller(10_000);
    c.on_user_scroll(3200.0);
    let mut host = c.into_view().destroy();
    assert!(!host.is_attached());
    assert!(host.children().is_empty());
    assert!(!host.user_scroll(100.0));
    assert!(!host.take_pending_scroll());
}

#[test]
fn horizontal_lists_attach_with_their_orientation() {
    let list = VirtualList::new(
        MemoryHost::new(320.0),
        (0..50u32).collect(),
        ListOptions::new(32.0, label).with_orientation(Orientation::Horizontal),
    )
    .unwrap();
    assert_eq!(list.host().orientation(), Some(Orientation::Horizontal));
}

#[test]
fn anchor_is_first_visible_item_and_its_inner_offset() {
    let mut list = list_on(MemoryHost::new(320.0), 1000);
    list.host_mut().user_scroll(3210.0);
    list.handle_scroll();

    let anchor = capture_first_visible_anchor(&list, |id: &u32| *id).unwrap();
    assert_eq!(anchor.key, 100);
    assert_eq!(anchor.offset_in_item, 10.0);

    let empty = list_on(MemoryHost::new(320.0), 0);
    assert!(capture_first_visible_anchor(&empty, |id: &u32| *id).is_none());
}

#[test]
fn anchor_preserves_position_across_prepend() {
    let ids: Vec<u32> = (0..1000).map(|i| 1000 + i).collect();
    let mut list = VirtualList::new(MemoryHost::new(320.0), ids, ListOptions::new(32.0, label))
        .unwrap();
    list.host_mut().user_scroll(3210.0);
    list.handle_scroll();

    let mut next: Vec<u32> = (0..10).map(|i| 5000 + i).collect();
    next.extend((0..1000).map(|i| 1000 + i));
    assert!(update_items_anchored(&mut list, next, |id| *id));

    assert_eq!(list.scroll_offset(), 3530.0);
    assert_eq!(list.visible_range(), VisibleRange::new(107, 124));
    assert_eq!(list.host().child(&110).map(String::as_str), Some("110:1100"));
}

#[test]
fn anchor_lost_when_its_item_is_removed() {
    let mut list = list_on(MemoryHost::new(320.0), 1000);
    list.host_mut().user_scroll(3200.0);
    list.handle_scroll();

    let next: Vec<u32> = (0..1000).filter(|id| *id != 100).collect();
    assert!(!update_items_anchored(&mut list, next, |id| *id));
    assert_eq!(list.scroll_offset(), 3200.0);
}

#[test]
fn apply_anchor_rejects_stale_indexes() {
    let mut list = list_on(MemoryHost::new(320.0), 10);
    let anchor = ScrollAnchor {
        key: 3u32,
        offset_in_item: 0.0,
    };
    assert!(!apply_anchor(&mut list, &anchor, |_| Some(50)));
    assert!(!apply_anchor(&mut list, &anchor, |_| None));
    assert!(apply_anchor(&mut list, &anchor, |k| Some(*k as usize)));
}

#[test]
fn grid_through_controller() {
    let grid = VirtualGrid::new(
        MemoryHost::new(200.0),
        (0..1000u32).collect(),
        GridOptions::new(50.0, 100.0, 4, label).with_overscan(1),
    )
    .unwrap();
    let mut c = Controller::new(grid);
    assert_eq!(c.visible_range(), VisibleRange::new(0, 5));
    assert_eq!(c.host().children().len(), 20);

    assert!(c.on_user_scroll(1000.0));
    assert_eq!(c.visible_range(), VisibleRange::new(19, 25));
    assert_eq!(c.host().children().len(), 24);

    let cell = CellKey { row: 20, col: 3 };
    assert_eq!(c.host().child(&cell).map(String::as_str), Some("83:83"));
    let mounted = c.host().children().iter().find(|m| m.key == cell).unwrap();
    assert_eq!(mounted.main_offset, 1000.0);
    assert_eq!(mounted.cross_offset, 300.0);

    let host = c.into_view().destroy();
    assert!(host.children().is_empty());
}

#[test]
fn scripted_sweep_keeps_host_in_step() {
    let mut c = controller(2_000);
    let mut seed = 0x5eed_u64;
    for step in 0..500u32 {
        seed = seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let roll = (seed >> 33) % 4;
        match roll {
            0 => {
                c.on_user_scroll(((seed >> 11) % 70_000) as f64);
            }
            1 => c.scroll_to_index(((seed >> 11) % 2_100) as usize, ScrollBehavior::Instant),
            2 => c.on_resize(100.0 + ((seed >> 11) % 900) as f64),
            _ => {
                c.view_mut().update_item(((seed >> 11) % 2_000) as usize, step);
            }
        }
        assert_mounted_matches_range(&c);
        assert!(c.host().offset() <= c.host().max_scroll_offset());
    }
}
