use crate::math::{RowRounding, items_per_row, row_index};
use crate::{GridDimensions, ItemRange};

/// Height of the spacer that stands in for the rows after the rendered window.
///
/// Returns `None` while the item size is unknown.
pub fn remaining_height(
    dimensions: &GridDimensions,
    total_count: usize,
    range: ItemRange,
) -> Option<f64> {
    let (item_width, item_height) = dimensions.item_size()?;
    if total_count == 0 {
        return Some(0.0);
    }

    let per_row = items_per_row(dimensions.viewport_width, item_width);
    let trailing = (total_count as i64 - range.end_index - 1).max(0);
    let trailing = usize::try_from(trailing).unwrap_or(0);
    let remaining_rows = row_index(trailing, per_row, RowRounding::Ceil);
    Some(item_height * remaining_rows as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims() -> GridDimensions {
        GridDimensions::new(300.0, 200.0).with_item_size(100.0, 50.0)
    }

    #[test]
    fn counts_partial_trailing_rows() {
        // items 12..=99 remain: 88 items -> 30 rows
        assert_eq!(remaining_height(&dims(), 100, ItemRange::new(0, 11)), Some(1500.0));
    }

    #[test]
    fn zero_when_the_window_reaches_the_end() {
        assert_eq!(remaining_height(&dims(), 10, ItemRange::new(0, 9)), Some(0.0));
    }

    #[test]
    fn zero_for_empty_data() {
        assert_eq!(remaining_height(&dims(), 0, ItemRange::EMPTY), Some(0.0));
    }

    #[test]
    fn unknown_until_measured() {
        let d = GridDimensions::new(300.0, 200.0);
        assert_eq!(remaining_height(&d, 100, ItemRange::new(0, 11)), None);
    }
}
