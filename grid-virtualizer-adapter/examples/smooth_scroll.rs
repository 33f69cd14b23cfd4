use grid_virtualizer::{Align, GridEngineOptions, ScrollBehavior, ScrollLocation};
use grid_virtualizer_adapter::{Easing, GridController, ItemMeasurement};

fn main() {
    // Example: a controller driving a smooth scroll-to without holding any UI objects.
    //
    // An adapter would:
    // - report layout after every pass (viewport size + first rendered item)
    // - forward "scroll to index" commands
    // - call tick(now_ms) in a frame loop / timer
    // - apply the returned offset to the real scroll container (if any)
    // - render the engine's items between the list padding spacers
    let mut c = GridController::new(GridEngineOptions::new().with_overscan(150.0))
        .with_smooth_scroll(240, Easing::SmoothStep);
    c.set_total_count(10_000);
    c.on_layout(
        960.0,
        600.0,
        Some(ItemMeasurement::new(240.0, 180.0).with_content_size(232.0, 172.0)),
    );

    let target = c.scroll_to_index(
        ScrollLocation::new(2_000)
            .with_align(Align::Center)
            .with_behavior(ScrollBehavior::Smooth),
        0,
    );
    println!("target_offset={target}");

    let mut now_ms = 0u64;
    loop {
        now_ms += 16;
        if let Some(off) = c.tick(now_ms) {
            if now_ms % 80 == 0 {
                println!(
                    "t={now_ms} off={off} range={:?}",
                    c.engine().item_range().get()
                );
            }
        } else {
            break;
        }
    }

    println!(
        "done: off={} range={:?} padding={:?}",
        c.scroll_offset(),
        c.engine().item_range().get(),
        c.list_padding()
    );
}
