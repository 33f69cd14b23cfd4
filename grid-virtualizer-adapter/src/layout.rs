use grid_virtualizer::GridDimensions;

/// Size of one rendered item as measured by the host.
///
/// `outer_*` is the item's box including its wrapper; `content_*` is the item content alone
/// and sizes scroll-seek placeholders.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemMeasurement {
    pub outer_width: f64,
    pub outer_height: f64,
    pub content_width: Option<f64>,
    pub content_height: Option<f64>,
}

impl ItemMeasurement {
    pub fn new(outer_width: f64, outer_height: f64) -> Self {
        Self {
            outer_width,
            outer_height,
            content_width: None,
            content_height: None,
        }
    }

    pub fn with_content_size(mut self, content_width: f64, content_height: f64) -> Self {
        self.content_width = Some(content_width);
        self.content_height = Some(content_height);
        self
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.outer_width > 0.0 && self.outer_height > 0.0
    }

    pub(crate) fn to_dimensions(self, viewport_width: f64, viewport_height: f64) -> GridDimensions {
        GridDimensions {
            viewport_width,
            viewport_height,
            item_width: Some(self.outer_width),
            item_height: Some(self.outer_height),
            item_content_width: self.content_width,
            item_content_height: self.content_height,
        }
    }
}

/// Spacers around the rendered window: `top` above the first rendered row, `bottom` below the
/// last one.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListPadding {
    pub top: f64,
    pub bottom: f64,
}
