use alloc::vec::Vec;

use crate::{GridDimensions, ItemRange};

/// What the host should render: the window of items and, in scroll-seek mode, the height of the
/// placeholder that stands in for each of them.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemsRender {
    range: ItemRange,
    placeholder_height: Option<f64>,
}

impl ItemsRender {
    /// Real items for every index in `range`.
    pub fn new(range: ItemRange) -> Self {
        Self {
            range,
            placeholder_height: None,
        }
    }

    /// Placeholders for every index in `range`, each `height` pixels tall.
    pub fn placeholders(range: ItemRange, height: f64) -> Self {
        Self {
            range,
            placeholder_height: Some(height),
        }
    }

    /// Placeholders are used only while seeking with a configuration installed, and only once
    /// the item content height is known.
    pub fn compose(
        range: ItemRange,
        is_seeking: bool,
        has_configuration: bool,
        dimensions: &GridDimensions,
    ) -> Self {
        match dimensions.item_content_height {
            Some(height) if is_seeking && has_configuration && height > 0.0 => {
                Self::placeholders(range, height)
            }
            _ => Self::new(range),
        }
    }

    pub fn range(&self) -> ItemRange {
        self.range
    }

    pub fn placeholder_height(&self) -> Option<f64> {
        self.placeholder_height
    }

    pub fn is_placeholder_mode(&self) -> bool {
        self.placeholder_height.is_some()
    }

    /// Iterates the window without allocating. Indexes past `total_count` are skipped.
    pub fn for_each_item<K>(
        &self,
        total_count: usize,
        compute_item_key: impl Fn(usize) -> K,
        mut f: impl FnMut(GridItem<K>),
    ) {
        for index in self.range.indices(total_count) {
            let key = compute_item_key(index);
            let item = match self.placeholder_height {
                Some(height) => GridItem::Placeholder { key, index, height },
                None => GridItem::Item { key, index },
            };
            f(item);
        }
    }

    /// Collects the window into `out`, reusing its allocation.
    pub fn collect_items<K>(
        &self,
        total_count: usize,
        compute_item_key: impl Fn(usize) -> K,
        out: &mut Vec<GridItem<K>>,
    ) {
        out.clear();
        out.reserve(self.range.len());
        self.for_each_item(total_count, compute_item_key, |item| out.push(item));
    }

    /// Builds host content for the window: `item` for real items, `placeholder` in seek mode.
    pub fn render<K, R>(
        &self,
        total_count: usize,
        compute_item_key: impl Fn(usize) -> K,
        mut item: impl FnMut(usize) -> R,
        mut placeholder: impl FnMut(PlaceholderProps) -> R,
    ) -> Vec<RenderedItem<K, R>> {
        let mut out = Vec::with_capacity(self.range.len());
        self.for_each_item(total_count, compute_item_key, |grid_item| {
            let rendered = match grid_item {
                GridItem::Item { key, index } => RenderedItem {
                    key,
                    index,
                    content: item(index),
                },
                GridItem::Placeholder { key, index, height } => RenderedItem {
                    key,
                    index,
                    content: placeholder(PlaceholderProps { index, height }),
                },
            };
            out.push(rendered);
        });
        out
    }
}

/// One entry of the rendered window.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridItem<K> {
    Item { key: K, index: usize },
    Placeholder { key: K, index: usize, height: f64 },
}

impl<K> GridItem<K> {
    pub fn index(&self) -> usize {
        match self {
            Self::Item { index, .. } | Self::Placeholder { index, .. } => *index,
        }
    }

    pub fn key(&self) -> &K {
        match self {
            Self::Item { key, .. } | Self::Placeholder { key, .. } => key,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaceholderProps {
    pub index: usize,
    pub height: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderedItem<K, R> {
    pub key: K,
    pub index: usize,
    pub content: R,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::String;
    use alloc::vec;

    fn dims() -> GridDimensions {
        GridDimensions::new(300.0, 200.0)
            .with_item_size(100.0, 50.0)
            .with_item_content_size(90.0, 40.0)
    }

    #[test]
    fn placeholders_need_seeking_and_a_configuration() {
        let range = ItemRange::new(0, 3);
        assert!(!ItemsRender::compose(range, false, true, &dims()).is_placeholder_mode());
        assert!(!ItemsRender::compose(range, true, false, &dims()).is_placeholder_mode());
        assert_eq!(
            ItemsRender::compose(range, true, true, &dims()).placeholder_height(),
            Some(40.0)
        );

        let unmeasured = GridDimensions::new(300.0, 200.0).with_item_size(100.0, 50.0);
        assert!(!ItemsRender::compose(range, true, true, &unmeasured).is_placeholder_mode());
    }

    #[test]
    fn items_are_clamped_to_total_count() {
        let render = ItemsRender::new(ItemRange::new(2, 9));
        let mut out = Vec::new();
        render.collect_items(5, |i| i as u64, &mut out);
        assert_eq!(
            out,
            vec![
                GridItem::Item { key: 2, index: 2 },
                GridItem::Item { key: 3, index: 3 },
                GridItem::Item { key: 4, index: 4 },
            ]
        );
    }

    #[test]
    fn empty_range_renders_nothing() {
        let render = ItemsRender::new(ItemRange::EMPTY);
        let mut calls = 0;
        render.for_each_item(10, |i| i, |_| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn render_uses_the_placeholder_callback_in_seek_mode() {
        let render = ItemsRender::placeholders(ItemRange::new(4, 5), 40.0);
        let out = render.render(
            10,
            |i| i,
            |i| format!("item {i}"),
            |p: PlaceholderProps| format!("placeholder {} @ {}", p.index, p.height),
        );
        let contents: Vec<String> = out.into_iter().map(|r| r.content).collect();
        assert_eq!(contents, vec!["placeholder 4 @ 40", "placeholder 5 @ 40"]);
    }
}
