//! The windowing algorithm: which items to materialize, and where the rendered block starts.
//!
//! Recomputation is hysteretic. The current window is kept as long as it still covers the
//! viewport; only when the viewport escapes it (or the data shrank under it) is a new window
//! computed, with overscan applied on the side the user is scrolling towards.

use crate::math::{RowRounding, ceil, floor, items_per_row, row_index};
use crate::{GridDimensions, ItemRange, ScrollDirection};

/// The latest values of every input the range engine depends on.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RangeInputs {
    pub dimensions: GridDimensions,
    pub scroll_top: f64,
    pub overscan: f64,
    pub total_count: usize,
}

/// A freshly computed window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeUpdate {
    pub range: ItemRange,
    /// Pixel offset of the first rendered row.
    pub list_offset: f64,
}

impl RangeUpdate {
    pub const EMPTY: Self = Self {
        range: ItemRange::EMPTY,
        list_offset: 0.0,
    };
}

/// Decides whether `previous` still covers the viewport, and computes a new window if not.
///
/// Returns `None` when nothing should be emitted: either the window still fits, or the item
/// size has not been measured yet (the seeded initial range stays in place until then).
pub fn update_range(inputs: &RangeInputs, previous: ItemRange) -> Option<RangeUpdate> {
    let (item_width, item_height) = inputs.dimensions.item_size()?;
    if inputs.total_count == 0 {
        if previous == ItemRange::EMPTY {
            return None;
        }
        return Some(RangeUpdate::EMPTY);
    }

    let per_row = items_per_row(inputs.dimensions.viewport_width, item_width);

    let direction = if exceeds_total_count(previous, inputs.total_count) {
        Some(ScrollDirection::Forward)
    } else if scrolled_above_window(previous, inputs, per_row, item_height) {
        Some(ScrollDirection::Backward)
    } else if scrolled_below_window(previous, inputs, per_row, item_height) {
        Some(ScrollDirection::Forward)
    } else {
        None
    };

    let direction = direction?;
    let update = recompute(inputs, per_row, item_height, direction);
    vtrace!(
        start = update.range.start_index,
        end = update.range.end_index,
        list_offset = update.list_offset,
        ?direction,
        "update_range"
    );
    Some(update)
}

/// The data shrank: `previous` points past the last item (or there was nothing rendered).
fn exceeds_total_count(previous: ItemRange, total_count: usize) -> bool {
    previous.is_empty() || previous.end_index >= total_count as i64
}

fn list_top(previous: ItemRange, per_row: usize, item_height: f64) -> f64 {
    item_height * row_of(previous.start_index, per_row) as f64
}

fn list_bottom(previous: ItemRange, per_row: usize, item_height: f64) -> f64 {
    item_height * row_of(previous.end_index, per_row) as f64 + item_height
}

/// The rendered window starts below the top edge of the viewport, and there are rows above it.
fn scrolled_above_window(
    previous: ItemRange,
    inputs: &RangeInputs,
    per_row: usize,
    item_height: f64,
) -> bool {
    previous.start_index > 0 && list_top(previous, per_row, item_height) > inputs.scroll_top
}

/// The rendered window ends above the bottom edge of the viewport, and there are items below it.
fn scrolled_below_window(
    previous: ItemRange,
    inputs: &RangeInputs,
    per_row: usize,
    item_height: f64,
) -> bool {
    if previous.end_index >= inputs.total_count as i64 - 1 {
        return false;
    }
    let viewport_bottom = inputs.scroll_top + inputs.dimensions.viewport_height;
    list_bottom(previous, per_row, item_height) < viewport_bottom
}

fn row_of(index: i64, per_row: usize) -> usize {
    row_index(usize::try_from(index).unwrap_or(0), per_row, RowRounding::Floor)
}

/// Computes a new window around the viewport, with overscan on the `direction` side only.
pub fn recompute(
    inputs: &RangeInputs,
    per_row: usize,
    item_height: f64,
    direction: ScrollDirection,
) -> RangeUpdate {
    let (top_overscan, bottom_overscan) = match direction {
        ScrollDirection::Forward => (0.0, inputs.overscan),
        ScrollDirection::Backward => (inputs.overscan, 0.0),
    };
    let per_row_f = per_row as f64;
    let scroll_top = inputs.scroll_top;
    let viewport_height = inputs.dimensions.viewport_height;

    let start = per_row_f * floor((scroll_top - top_overscan) / item_height);
    let end = per_row_f * ceil((scroll_top + viewport_height + bottom_overscan) / item_height) - 1.0;

    let last = inputs.total_count as i64 - 1;
    // Float-to-int casts saturate, so far-out offsets still land inside i64.
    let end_index = (end as i64).min(last).max(0);
    let start_index = (start as i64).max(0).min(end_index);

    let range = ItemRange::new(start_index, end_index);
    RangeUpdate {
        range,
        list_offset: item_height * row_of(start_index, per_row) as f64,
    }
}
