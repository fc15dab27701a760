use windowed::{ListOptions, ScrollBehavior, VirtualList};
use windowed_adapter::{Controller, Easing, MemoryHost};

fn main() -> Result<(), windowed::ConfigError> {
    // Example: a controller driving a smooth scroll without holding any UI objects.
    //
    // An adapter would:
    // - forward "scroll to index" commands to the controller
    // - call tick(now_ms) in a frame loop / timer
    // - mirror the host's children into the real scroll container
    let host = MemoryHost::new(480.0).with_smooth_scroll(240, Easing::SmoothStep);
    let items: Vec<u32> = (0..10_000).collect();
    let list = VirtualList::new(
        host,
        items,
        ListOptions::new(24.0, |n: &u32, _| format!("row {n}")),
    )?;
    let mut c = Controller::new(list);

    c.scroll_to_index(2_000, ScrollBehavior::Smooth);

    let mut now_ms = 0u64;
    while c.is_animating() {
        now_ms += 16;
        let Some(off) = c.tick(now_ms) else {
            continue;
        };
        if now_ms % 80 == 0 {
            println!("t={now_ms} off={off} range={}", c.visible_range());
        }
    }

    let stats = c.host().stats();
    println!(
        "done: off={} range={} appended={} removed={}",
        c.host().offset(),
        c.visible_range(),
        stats.nodes_appended,
        stats.removals
    );
    Ok(())
}
