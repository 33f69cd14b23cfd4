use core::cell::Cell;

use crate::ItemRange;

/// Fires once per distinct `end_index` that lands within `end_threshold` items of the tail.
///
/// The last fired index is the notifier's only state; the engine owns the notifier and is its
/// single writer.
#[derive(Debug, Default)]
pub struct EndReachedNotifier {
    last_fired: Cell<Option<i64>>,
}

impl EndReachedNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last index for which "end reached" fired.
    pub fn last_fired(&self) -> Option<i64> {
        self.last_fired.get()
    }

    /// Checks a newly emitted range and returns the index to report, if any.
    pub fn observe(&self, range: ItemRange, total_count: usize, end_threshold: usize) -> Option<usize> {
        if total_count == 0 || range.is_empty() {
            return None;
        }

        let end_index = range.end_index;
        let tail = total_count as i64 - end_threshold as i64;
        if end_index < tail || self.last_fired.get() == Some(end_index) {
            return None;
        }

        self.last_fired.set(Some(end_index));
        vdebug!(end_index, total_count, end_threshold, "end reached");
        usize::try_from(end_index).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_crossed_end_index() {
        let n = EndReachedNotifier::new();
        assert_eq!(n.observe(ItemRange::new(10, 17), 20, 2), None);
        assert_eq!(n.observe(ItemRange::new(11, 18), 20, 2), Some(18));
        assert_eq!(n.observe(ItemRange::new(11, 18), 20, 2), None);
        assert_eq!(n.observe(ItemRange::new(12, 19), 20, 2), Some(19));
        assert_eq!(n.last_fired(), Some(19));
    }

    #[test]
    fn never_fires_for_empty_data() {
        let n = EndReachedNotifier::new();
        assert_eq!(n.observe(ItemRange::EMPTY, 0, 5), None);
        assert_eq!(n.observe(ItemRange::new(0, 3), 0, 5), None);
        assert_eq!(n.last_fired(), None);
    }

    #[test]
    fn fires_again_after_the_data_grows() {
        let n = EndReachedNotifier::new();
        assert_eq!(n.observe(ItemRange::new(0, 9), 10, 1), Some(9));
        // more data arrived; the user scrolls to the new tail
        assert_eq!(n.observe(ItemRange::new(6, 15), 20, 1), None);
        assert_eq!(n.observe(ItemRange::new(12, 19), 20, 1), Some(19));
    }

    #[test]
    fn a_single_item_can_reach_the_end() {
        let n = EndReachedNotifier::new();
        assert_eq!(n.observe(ItemRange::new(0, 0), 1, 1), Some(0));
    }
}
