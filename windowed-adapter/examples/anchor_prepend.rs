use windowed::{ListOptions, VirtualList};
use windowed_adapter::{MemoryHost, update_items_anchored};

#[derive(Clone, Debug)]
struct Message {
    id: u64,
    text: String,
}

fn main() -> Result<(), windowed::ConfigError> {
    // Example: loading older history above the viewport without a visual jump.
    let messages: Vec<Message> = (100..1_100)
        .map(|id| Message {
            id,
            text: format!("message {id}"),
        })
        .collect();
    let mut list = VirtualList::new(
        MemoryHost::new(400.0),
        messages.clone(),
        ListOptions::new(40.0, |m: &Message, _| m.text.clone()),
    )?;

    list.host_mut().user_scroll(2_010.0);
    list.handle_scroll();
    let before = list.node(50).cloned();
    println!("before: off={} top={before:?}", list.scroll_offset());

    let mut next: Vec<Message> = (0..100)
        .map(|id| Message {
            id,
            text: format!("older {id}"),
        })
        .collect();
    next.extend(messages);

    let kept = update_items_anchored(&mut list, next, |m| m.id);
    println!(
        "after: kept={kept} off={} top={:?}",
        list.scroll_offset(),
        list.node(150)
    );
    Ok(())
}
