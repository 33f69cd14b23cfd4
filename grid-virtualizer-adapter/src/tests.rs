use crate::*;

use grid_virtualizer::{Align, GridEngineOptions, ItemRange, ScrollBehavior, ScrollLocation};

fn measured(total_count: usize) -> GridController {
    let mut c = GridController::default();
    c.set_total_count(total_count);
    c.on_layout(
        300.0,
        200.0,
        Some(ItemMeasurement::new(100.0, 50.0).with_content_size(90.0, 40.0)),
    );
    c
}

fn item_range(c: &GridController) -> ItemRange {
    c.engine().item_range().get().unwrap_or_default()
}

#[test]
fn layout_without_items_keeps_the_engine_unmeasured() {
    let mut c = GridController::new(GridEngineOptions::new().with_initial_item_count(4));
    c.set_total_count(100);
    c.on_layout(300.0, 200.0, None);
    assert_eq!(item_range(&c), ItemRange::new(0, 3));

    c.on_layout(300.0, 200.0, Some(ItemMeasurement::new(0.0, 50.0)));
    assert_eq!(item_range(&c), ItemRange::new(0, 3));

    c.on_layout(300.0, 200.0, Some(ItemMeasurement::new(100.0, 50.0)));
    assert_eq!(item_range(&c), ItemRange::new(0, 11));
}

#[test]
fn auto_scroll_to_index_applies_immediately() {
    let mut c = measured(100);

    let to = c.scroll_to_index(ScrollLocation::new(30), 0);
    assert_eq!(to, 500.0);
    assert_eq!(c.scroll_offset(), 500.0);
    assert!(!c.is_animating());
    assert_eq!(item_range(&c), ItemRange::new(30, 41));
    assert_eq!(
        c.list_padding(),
        ListPadding {
            top: 500.0,
            bottom: 1000.0,
        }
    );
}

#[test]
fn negative_targets_clamp_to_zero() {
    let mut c = measured(100);
    c.on_scroll(300.0, 0);

    let to = c.scroll_to_index(ScrollLocation::new(1).with_align(Align::End), 16);
    assert_eq!(to, 0.0);
    assert_eq!(c.scroll_offset(), 0.0);
}

#[test]
fn scroll_to_before_measurement_is_ignored() {
    let mut c = GridController::default();
    c.set_total_count(100);
    c.on_scroll(120.0, 0);

    assert_eq!(c.scroll_to_index(ScrollLocation::new(50), 16), 120.0);
    assert_eq!(c.scroll_offset(), 120.0);
}

#[test]
fn smooth_scroll_to_index_is_tweened() {
    let mut c = measured(1_000).with_smooth_scroll(100, Easing::SmoothStep);

    let to = c.scroll_to_index(ScrollLocation::new(500).with_behavior(ScrollBehavior::Smooth), 0);
    assert_eq!(to, 8_300.0);
    assert!(c.is_animating());
    assert_eq!(c.scroll_offset(), 0.0);

    let mut last = 0.0;
    for now_ms in [0_u64, 10, 20, 40, 80, 100, 120] {
        if let Some(off) = c.tick(now_ms) {
            assert!(off >= last);
            last = off;
        }
    }
    assert!(!c.is_animating());
    assert_eq!(c.scroll_offset(), to);

    let range = item_range(&c);
    assert!(range.start_index <= 500 && 500 <= range.end_index, "{range:?}");
}

#[test]
fn smooth_scroll_mid_tween_retargets_from_the_current_offset() {
    let mut c = measured(1_000).with_smooth_scroll(100, Easing::Linear);

    c.scroll_to_index(ScrollLocation::new(300).with_behavior(ScrollBehavior::Smooth), 0);
    assert_eq!(c.tick(50), Some(2_500.0));

    // Row 30 starts at 1500.
    let to = c.scroll_to_index(ScrollLocation::new(90).with_behavior(ScrollBehavior::Smooth), 50);
    assert_eq!(to, 1_500.0);
    assert!(c.is_animating());
    assert_eq!(c.tick(100), Some(2_000.0));
    assert_eq!(c.tick(150), Some(1_500.0));
    assert!(!c.is_animating());
    assert_eq!(c.scroll_offset(), 1_500.0);
}

#[test]
fn user_scroll_cancels_the_tween() {
    let mut c = measured(1_000);
    c.scroll_to_index(ScrollLocation::new(900).with_behavior(ScrollBehavior::Smooth), 0);
    assert!(c.is_animating());

    c.tick(16);
    c.on_scroll(42.0, 20);
    assert!(!c.is_animating());
    assert_eq!(c.tick(32), None);
    assert_eq!(c.scroll_offset(), 42.0);
}

#[test]
fn tick_settles_is_scrolling() {
    let mut c = measured(1_000);
    c.on_scroll(100.0, 0);
    assert_eq!(c.engine().is_scrolling().get(), Some(true));

    assert_eq!(c.tick(100), None);
    assert_eq!(c.engine().is_scrolling().get(), Some(true));
    c.tick(150);
    assert_eq!(c.engine().is_scrolling().get(), Some(false));
}

#[test]
fn tween_lands_exactly_on_target() {
    let t = Tween::new(10.0, 333.3, 100, 50, Easing::EaseInOutCubic);
    assert_eq!(t.sample(0), 10.0);
    assert_eq!(t.sample(100), 10.0);
    assert!(t.sample(125) > 10.0 && t.sample(125) < 333.3);
    assert_eq!(t.sample(150), 333.3);
    assert!(t.is_done(150));
}
