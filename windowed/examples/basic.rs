// Example: a host that prints every operation the renderer asks of it.
use windowed::{
    Host, ListOptions, Orientation, Placement, ScrollBehavior, Spacers, VirtualList,
};

struct PrintHost {
    offset: f64,
    viewport: f64,
    total: f64,
}

impl Host<usize> for PrintHost {
    type Node = String;

    fn attach(&mut self, orientation: Orientation) {
        println!("attach {orientation:?}");
    }

    fn detach(&mut self) {
        println!("detach");
    }

    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn viewport_extent(&self) -> f64 {
        self.viewport
    }

    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior) {
        self.offset = offset.clamp(0.0, (self.total - self.viewport).max(0.0));
        println!("scroll_to {offset} ({behavior:?}) -> {}", self.offset);
    }

    fn set_spacers(&mut self, spacers: Spacers) {
        self.total = spacers.total;
        println!("spacers before={} after={}", spacers.before, spacers.after);
    }

    fn append(&mut self, batch: Vec<Placement<usize, String>>) {
        let first = batch.first().map(|p| p.index);
        let last = batch.last().map(|p| p.index);
        println!("append {} nodes ({first:?}..={last:?})", batch.len());
    }

    fn replace(&mut self, key: &usize, node: String) {
        println!("replace {key} with {node:?}");
    }

    fn remove(&mut self, _key: &usize, _node: String) {}
}

fn main() -> Result<(), windowed::ConfigError> {
    let host = PrintHost {
        offset: 0.0,
        viewport: 320.0,
        total: 0.0,
    };
    let items: Vec<String> = (0..10_000).map(|i| format!("track {i}")).collect();
    let mut list = VirtualList::new(
        host,
        items,
        ListOptions::new(32.0, |name: &String, _| name.clone()).with_on_scroll(Some(
            |offset: f64, range: windowed::VisibleRange| println!("on_scroll {offset} {range}"),
        )),
    )?;
    println!("initial range={}", list.visible_range());

    list.host_mut().offset = 3200.0;
    list.handle_scroll();

    list.update_item(100, "renamed track".to_string());
    list.scroll_to_index(5_000, ScrollBehavior::Instant);
    println!("after scroll_to_index: range={}", list.visible_range());

    list.destroy();
    Ok(())
}
