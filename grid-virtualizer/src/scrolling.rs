use core::cell::Cell;

use crate::rx::Subject;

/// Default quiet period after the last scroll event before `is_scrolling` resets.
pub const DEFAULT_IS_SCROLLING_RESET_DELAY_MS: u64 = 150;

/// Turns a stream of scroll offsets into a debounced "currently scrolling" flag.
///
/// The detector owns no timers. `is_scrolling` flips to `true` as soon as the offset changes;
/// the host reports when scroll events happen ([`ScrollingState::notify_scroll_event`]) and
/// periodically calls [`ScrollingState::update`] (e.g. once per frame) to let it settle back to
/// `false`. An offset change that was never stamped is stamped by the next `update`.
#[derive(Debug)]
pub struct ScrollingState {
    is_scrolling: Subject<bool>,
    last_offset: Cell<Option<f64>>,
    last_event_ms: Cell<Option<u64>>,
    reset_delay_ms: Cell<u64>,
}

impl ScrollingState {
    pub fn new(reset_delay_ms: u64) -> Self {
        Self {
            is_scrolling: Subject::new(false),
            last_offset: Cell::new(None),
            last_event_ms: Cell::new(None),
            reset_delay_ms: Cell::new(reset_delay_ms),
        }
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling.value()
    }

    pub(crate) fn subject(&self) -> Subject<bool> {
        self.is_scrolling.clone()
    }

    pub fn reset_delay_ms(&self) -> u64 {
        self.reset_delay_ms.get()
    }

    pub fn set_reset_delay_ms(&self, delay_ms: u64) {
        self.reset_delay_ms.set(delay_ms);
    }

    /// Feeds the latest scroll offset. The first offset seen is the baseline, not a scroll.
    pub fn on_scroll_offset(&self, offset: f64) {
        let prev = self.last_offset.replace(Some(offset));
        match prev {
            Some(prev) if prev != offset => {}
            _ => return,
        }

        self.last_event_ms.set(None);
        if !self.is_scrolling.value() {
            vtrace!(offset, "scrolling started");
            self.is_scrolling.next(true);
        }
    }

    /// Records the time of the most recent scroll event.
    pub fn notify_scroll_event(&self, now_ms: u64) {
        self.last_event_ms.set(Some(now_ms));
    }

    /// Settles `is_scrolling` back to `false` once the quiet period has elapsed.
    pub fn update(&self, now_ms: u64) {
        if !self.is_scrolling.value() {
            return;
        }
        let Some(last) = self.last_event_ms.get() else {
            self.last_event_ms.set(Some(now_ms));
            return;
        };
        if now_ms.saturating_sub(last) >= self.reset_delay_ms.get() {
            vtrace!(now_ms, last, "scrolling settled");
            self.last_event_ms.set(None);
            self.is_scrolling.next(false);
        }
    }
}

impl Default for ScrollingState {
    fn default() -> Self {
        Self::new(DEFAULT_IS_SCROLLING_RESET_DELAY_MS)
    }
}
