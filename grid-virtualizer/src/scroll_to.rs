use crate::math::{RowRounding, items_per_row, round, row_index};
use crate::{Align, GridDimensions, ScrollBehavior, ScrollLocation, ScrollToOptions};

/// Translates a "go to item" request into a target scroll offset.
///
/// Before the item size is known the result is a degenerate `{ top: 0, behavior: Auto }`; hosts
/// should treat it as a no-op scroll. The returned `top` may be negative (e.g. end-aligning one
/// of the first rows); physical scroll containers clamp it.
pub fn scroll_to_options(
    location: ScrollLocation,
    dimensions: &GridDimensions,
    total_count: usize,
) -> ScrollToOptions {
    let Some((item_width, item_height)) = dimensions.item_size() else {
        return ScrollToOptions {
            top: 0.0,
            behavior: ScrollBehavior::Auto,
        };
    };

    let index = location.index.min(total_count.saturating_sub(1));
    let per_row = items_per_row(dimensions.viewport_width, item_width);
    let offset = row_index(index, per_row, RowRounding::Floor) as f64 * item_height;
    let viewport_height = dimensions.viewport_height;

    let top = match location.align {
        Align::Start => offset,
        Align::End => offset - viewport_height + item_height,
        Align::Center => round(offset - viewport_height / 2.0 + item_height / 2.0),
    };

    vtrace!(index, top, align = ?location.align, "scroll_to_options");
    ScrollToOptions {
        top,
        behavior: location.behavior,
    }
}
