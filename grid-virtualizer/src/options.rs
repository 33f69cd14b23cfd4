use crate::scroll_seek::ScrollSeekConfiguration;
use crate::scrolling::DEFAULT_IS_SCROLLING_RESET_DELAY_MS;

/// Configuration for [`crate::GridEngine`].
///
/// Every field except `initial_item_count` can also be changed later through the matching
/// engine input.
#[derive(Clone)]
pub struct GridEngineOptions {
    /// Items to render before the first measurement arrives (useful for server-side rendering
    /// and for measuring the first item). `0` renders nothing until measured.
    pub initial_item_count: usize,

    /// Extra pixels rendered on the side the user is scrolling towards.
    pub overscan: f64,

    /// `end_reached` fires once the rendered window ends within this many items of the end.
    pub end_threshold: usize,

    /// Quiet period after the last scroll event before `is_scrolling` resets.
    pub is_scrolling_reset_delay_ms: u64,

    /// Enables scroll-seek placeholders.
    pub scroll_seek: Option<ScrollSeekConfiguration>,
}

impl GridEngineOptions {
    pub fn new() -> Self {
        Self {
            initial_item_count: 0,
            overscan: 0.0,
            end_threshold: 1,
            is_scrolling_reset_delay_ms: DEFAULT_IS_SCROLLING_RESET_DELAY_MS,
            scroll_seek: None,
        }
    }

    pub fn with_initial_item_count(mut self, initial_item_count: usize) -> Self {
        self.initial_item_count = initial_item_count;
        self
    }

    pub fn with_overscan(mut self, overscan: f64) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_end_threshold(mut self, end_threshold: usize) -> Self {
        self.end_threshold = end_threshold;
        self
    }

    pub fn with_is_scrolling_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.is_scrolling_reset_delay_ms = delay_ms;
        self
    }

    pub fn with_scroll_seek(mut self, scroll_seek: Option<ScrollSeekConfiguration>) -> Self {
        self.scroll_seek = scroll_seek;
        self
    }
}

impl Default for GridEngineOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for GridEngineOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GridEngineOptions")
            .field("initial_item_count", &self.initial_item_count)
            .field("overscan", &self.overscan)
            .field("end_threshold", &self.end_threshold)
            .field(
                "is_scrolling_reset_delay_ms",
                &self.is_scrolling_reset_delay_ms,
            )
            .field("scroll_seek", &self.scroll_seek)
            .finish()
    }
}
