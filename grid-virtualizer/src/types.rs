use core::ops::RangeInclusive;

/// Viewport and item geometry reported by the host after a layout pass.
///
/// The item fields stay `None` until the host has measured at least one rendered item; every
/// computation that needs an item size treats `None` as "not ready" and skips its work.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDimensions {
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Outer width of an item (including its container).
    pub item_width: Option<f64>,
    /// Outer height of an item (including its container).
    pub item_height: Option<f64>,
    pub item_content_width: Option<f64>,
    pub item_content_height: Option<f64>,
}

impl GridDimensions {
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            viewport_width,
            viewport_height,
            ..Self::default()
        }
    }

    pub fn with_item_size(mut self, item_width: f64, item_height: f64) -> Self {
        self.item_width = Some(item_width);
        self.item_height = Some(item_height);
        self
    }

    pub fn with_item_content_size(mut self, content_width: f64, content_height: f64) -> Self {
        self.item_content_width = Some(content_width);
        self.item_content_height = Some(content_height);
        self
    }

    /// Outer `(width, height)` of an item, once measured.
    pub fn item_size(&self) -> Option<(f64, f64)> {
        Some((self.item_width?, self.item_height?))
    }
}

/// An inclusive range of item indexes.
///
/// `start_index <= end_index` always holds except for [`ItemRange::EMPTY`], which is used
/// exactly when the grid has no items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemRange {
    pub start_index: i64,
    pub end_index: i64, // inclusive
}

impl ItemRange {
    pub const EMPTY: Self = Self {
        start_index: 0,
        end_index: -1,
    };

    pub const fn new(start_index: i64, end_index: i64) -> Self {
        Self {
            start_index,
            end_index,
        }
    }

    /// The range a freshly created engine starts from, before any measurement arrives.
    pub fn initial(initial_item_count: usize) -> Self {
        let last = initial_item_count.saturating_sub(1);
        Self::new(0, i64::try_from(last).unwrap_or(i64::MAX))
    }

    pub fn is_empty(&self) -> bool {
        self.end_index < self.start_index
    }

    pub fn len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        usize::try_from(self.end_index - self.start_index + 1).unwrap_or(0)
    }

    /// The indexes covered by the range, clamped to `total_count`.
    pub fn indices(&self, total_count: usize) -> RangeInclusive<usize> {
        let start = usize::try_from(self.start_index).unwrap_or(0);
        let end = usize::try_from(self.end_index.min(total_count as i64 - 1)).ok();
        match end {
            Some(end) => start..=end,
            // An empty inclusive range.
            None => 1..=0,
        }
    }
}

impl Default for ItemRange {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Payload of the "range changed" notification.
pub type ListRange = ItemRange;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    #[default]
    Auto,
    Smooth,
}

/// Which way a recompute biases its overscan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    /// Towards higher indexes (down).
    Forward,
    /// Towards lower indexes (up).
    Backward,
}

/// An imperative "go to item" request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollLocation {
    pub index: usize,
    pub align: Align,
    pub behavior: ScrollBehavior,
}

impl ScrollLocation {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn with_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.behavior = behavior;
        self
    }
}

impl From<usize> for ScrollLocation {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

/// A one-shot command for the host to move its physical scroll container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollToOptions {
    pub top: f64,
    pub behavior: ScrollBehavior,
}
