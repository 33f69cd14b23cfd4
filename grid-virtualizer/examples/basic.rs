// Example: a 100k-item grid, one scroll and a scroll-to request.
use grid_virtualizer::{Align, GridDimensions, GridEngine, GridEngineOptions, ScrollLocation};

fn main() {
    let engine = GridEngine::new(GridEngineOptions::new().with_overscan(200.0));
    engine.scroll_to().set_callback(|cmd| println!("scroll_to: {cmd:?}"));
    engine
        .end_reached()
        .set_callback(|index| println!("end_reached: {index}"));

    engine.total_count().set(100_000);
    engine.grid_dimensions().set(
        GridDimensions::new(1_024.0, 768.0)
            .with_item_size(200.0, 150.0)
            .with_item_content_size(190.0, 140.0),
    );
    println!("item_range={:?}", engine.item_range().get());

    engine.apply_scroll_event(123_456.0, 0);
    let Some(render) = engine.items_render().get() else {
        return;
    };
    let mut items = Vec::new();
    render.collect_items(100_000, |i| i as u64, &mut items);
    println!("list_offset={:?}", engine.list_offset().get());
    println!("remaining_height={:?}", engine.remaining_height().get());
    println!("first_rendered={:?}", items.first());

    engine
        .scroll_to_index()
        .set(ScrollLocation::new(99_999).with_align(Align::End));
}
