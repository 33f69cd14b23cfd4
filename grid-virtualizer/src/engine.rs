use alloc::rc::Rc;
use core::fmt;

use crate::end_reached::EndReachedNotifier;
use crate::io::{Input, Output};
use crate::options::GridEngineOptions;
use crate::range::{RangeInputs, update_range};
use crate::remaining::remaining_height;
use crate::render::ItemsRender;
use crate::rx::{EventSubject, Stream, Subject, combine_latest, map, with_latest_from};
use crate::scroll_seek::{ScrollSeek, ScrollSeekConfiguration};
use crate::scroll_to::scroll_to_options;
use crate::scrolling::ScrollingState;
use crate::{GridDimensions, ItemRange, ListRange, ScrollLocation, ScrollToOptions};

/// The grid windowing engine.
///
/// A reactive graph that turns viewport geometry, scroll offset and item count into the window
/// of items to render, the spacers around it and a few notifications. The host writes inputs and
/// reads outputs; every write recomputes all dependent outputs before it returns.
///
/// Typical host loop:
/// 1. after layout, set [`GridEngine::grid_dimensions`] with the measured item size;
/// 2. on scroll, call [`GridEngine::apply_scroll_event`];
/// 3. once per frame, call [`GridEngine::update_scrolling`];
/// 4. render [`GridEngine::items_render`] between a top spacer of [`GridEngine::list_offset`]
///    and a bottom spacer of [`GridEngine::remaining_height`].
pub struct GridEngine {
    grid_dimensions: Input<GridDimensions>,
    total_count: Input<usize>,
    scroll_top: Input<f64>,
    overscan: Input<f64>,
    scroll_to_index: Input<ScrollLocation>,
    scroll_seek_configuration: Input<Option<ScrollSeekConfiguration>>,
    end_threshold: Input<usize>,

    items_render: Output<ItemsRender>,
    item_range: Output<ItemRange>,
    remaining_height: Output<f64>,
    list_offset: Output<f64>,
    scroll_to: Output<ScrollToOptions>,
    is_scrolling: Output<bool>,
    is_seeking: Output<bool>,
    end_reached: Output<usize>,
    range_changed: Output<ListRange>,

    scrolling: Rc<ScrollingState>,
    seek: Rc<ScrollSeek>,
    end_reached_notifier: Rc<EndReachedNotifier>,
}

impl GridEngine {
    pub fn new(options: GridEngineOptions) -> Self {
        vdebug!(
            initial_item_count = options.initial_item_count,
            overscan = options.overscan,
            end_threshold = options.end_threshold,
            scroll_seek = options.scroll_seek.is_some(),
            "GridEngine::new"
        );

        let grid_dimensions = Subject::new(GridDimensions::default());
        let total_count = Subject::new(0_usize);
        let scroll_top = Subject::new(0.0_f64);
        let overscan = Subject::new(options.overscan);
        let end_threshold = Subject::new(options.end_threshold);
        let scroll_to_index = EventSubject::<ScrollLocation>::new();

        let initial_range = ItemRange::initial(options.initial_item_count);
        let item_range = Subject::new(initial_range);
        let list_offset = Subject::new(0.0_f64);
        let remaining = Subject::new(0.0_f64);
        let items_render = Subject::new(ItemsRender::new(initial_range));
        let range_changed = EventSubject::<ListRange>::new();
        let end_reached = EventSubject::<usize>::new();

        let scrolling = Rc::new(ScrollingState::new(options.is_scrolling_reset_delay_ms));
        let seek = Rc::new(ScrollSeek::new(options.scroll_seek));
        let end_reached_notifier = Rc::new(EndReachedNotifier::new());

        // Registered before the range engine so count and threshold are already current when a
        // recomputed range arrives.
        connect_end_reached(
            &end_reached_notifier,
            &item_range,
            &total_count,
            &end_threshold,
            &end_reached,
        );

        connect_range(
            &grid_dimensions,
            &scroll_top,
            &overscan,
            &total_count,
            &item_range,
            &list_offset,
            &range_changed,
        );

        let weak = Rc::downgrade(&scrolling);
        scroll_top.subscribe_with(move |top| {
            if let Some(scrolling) = weak.upgrade() {
                scrolling.on_scroll_offset(*top);
            }
        });

        ScrollSeek::connect(&seek, &scroll_top, &scrolling.subject(), &range_changed);

        combine_latest((
            item_range.clone(),
            seek.seeking_subject(),
            seek.configuration_subject(),
            grid_dimensions.clone(),
        ))
        .subscribe_with({
            let items_render = items_render.clone();
            move |(range, is_seeking, configuration, dimensions)| {
                items_render.next(ItemsRender::compose(
                    *range,
                    *is_seeking,
                    configuration.is_some(),
                    dimensions,
                ));
            }
        });

        combine_latest((grid_dimensions.clone(), total_count.clone(), item_range.clone()))
            .subscribe_with({
                let remaining = remaining.clone();
                move |(dimensions, total_count, range)| {
                    if let Some(height) = remaining_height(dimensions, *total_count, *range) {
                        remaining.next(height);
                    }
                }
            });

        let scroll_to = map(
            with_latest_from(
                scroll_to_index.clone(),
                combine_latest((grid_dimensions.clone(), total_count.clone())),
            ),
            |(location, (dimensions, total_count))| {
                scroll_to_options(*location, dimensions, *total_count)
            },
        );

        Self {
            grid_dimensions: grid_dimensions.into(),
            total_count: total_count.into(),
            scroll_top: scroll_top.into(),
            overscan: overscan.into(),
            scroll_to_index: scroll_to_index.into(),
            scroll_seek_configuration: seek.configuration_subject().into(),
            end_threshold: end_threshold.into(),

            items_render: Output::state(items_render),
            item_range: Output::state(item_range),
            remaining_height: Output::state(remaining),
            list_offset: Output::state(list_offset),
            scroll_to: Output::event(scroll_to),
            is_scrolling: Output::state(scrolling.subject()),
            is_seeking: Output::state(seek.seeking_subject()),
            end_reached: Output::event(end_reached),
            range_changed: Output::event(range_changed),

            scrolling,
            seek,
            end_reached_notifier,
        }
    }

    // Inputs.

    pub fn grid_dimensions(&self) -> &Input<GridDimensions> {
        &self.grid_dimensions
    }

    pub fn total_count(&self) -> &Input<usize> {
        &self.total_count
    }

    pub fn scroll_top(&self) -> &Input<f64> {
        &self.scroll_top
    }

    pub fn overscan(&self) -> &Input<f64> {
        &self.overscan
    }

    pub fn scroll_to_index(&self) -> &Input<ScrollLocation> {
        &self.scroll_to_index
    }

    pub fn scroll_seek_configuration(&self) -> &Input<Option<ScrollSeekConfiguration>> {
        &self.scroll_seek_configuration
    }

    pub fn end_threshold(&self) -> &Input<usize> {
        &self.end_threshold
    }

    // Outputs.

    pub fn items_render(&self) -> &Output<ItemsRender> {
        &self.items_render
    }

    pub fn item_range(&self) -> &Output<ItemRange> {
        &self.item_range
    }

    pub fn remaining_height(&self) -> &Output<f64> {
        &self.remaining_height
    }

    pub fn list_offset(&self) -> &Output<f64> {
        &self.list_offset
    }

    pub fn scroll_to(&self) -> &Output<ScrollToOptions> {
        &self.scroll_to
    }

    pub fn is_scrolling(&self) -> &Output<bool> {
        &self.is_scrolling
    }

    pub fn is_seeking(&self) -> &Output<bool> {
        &self.is_seeking
    }

    pub fn end_reached(&self) -> &Output<usize> {
        &self.end_reached
    }

    pub fn range_changed(&self) -> &Output<ListRange> {
        &self.range_changed
    }

    // Scrolling.

    /// Feeds one scroll event: the new offset plus the time it happened.
    pub fn apply_scroll_event(&self, scroll_top: f64, now_ms: u64) {
        self.scroll_top.set(scroll_top);
        self.scrolling.notify_scroll_event(now_ms);
    }

    /// Lets `is_scrolling` settle once no scroll event arrived for the reset delay.
    pub fn update_scrolling(&self, now_ms: u64) {
        self.scrolling.update(now_ms);
    }

    pub fn set_is_scrolling_reset_delay_ms(&self, delay_ms: u64) {
        self.scrolling.set_reset_delay_ms(delay_ms);
    }

    /// The last `end_index` reported through `end_reached`, if any.
    pub fn last_end_reached(&self) -> Option<i64> {
        self.end_reached_notifier.last_fired()
    }
}

impl Default for GridEngine {
    fn default() -> Self {
        Self::new(GridEngineOptions::default())
    }
}

impl fmt::Debug for GridEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridEngine")
            .field("item_range", &self.item_range.get())
            .field("list_offset", &self.list_offset.get())
            .field("remaining_height", &self.remaining_height.get())
            .field("is_scrolling", &self.scrolling.is_scrolling())
            .field("is_seeking", &self.seek.is_seeking())
            .field("last_end_reached", &self.end_reached_notifier.last_fired())
            .finish_non_exhaustive()
    }
}

/// The range engine: recomputes the window whenever any of its inputs changes and the previous
/// window no longer covers the viewport.
fn connect_range(
    grid_dimensions: &Subject<GridDimensions>,
    scroll_top: &Subject<f64>,
    overscan: &Subject<f64>,
    total_count: &Subject<usize>,
    item_range: &Subject<ItemRange>,
    list_offset: &Subject<f64>,
    range_changed: &EventSubject<ListRange>,
) {
    let inputs = combine_latest((
        grid_dimensions.clone(),
        scroll_top.clone(),
        overscan.clone(),
        total_count.clone(),
    ));
    let item_range_sink = item_range.clone();
    let list_offset = list_offset.clone();
    let range_changed = range_changed.clone();

    with_latest_from(inputs, item_range.clone()).subscribe_with(
        move |((dimensions, scroll_top, overscan, total_count), previous)| {
            let inputs = RangeInputs {
                dimensions: *dimensions,
                scroll_top: *scroll_top,
                overscan: *overscan,
                total_count: *total_count,
            };
            let Some(update) = update_range(&inputs, *previous) else {
                return;
            };
            item_range_sink.next(update.range);
            list_offset.next(update.list_offset);
            range_changed.next(update.range);
        },
    );
}

fn connect_end_reached(
    notifier: &Rc<EndReachedNotifier>,
    item_range: &Subject<ItemRange>,
    total_count: &Subject<usize>,
    end_threshold: &Subject<usize>,
    end_reached: &EventSubject<usize>,
) {
    let weak = Rc::downgrade(notifier);
    let end_reached = end_reached.clone();
    with_latest_from(
        item_range.clone(),
        combine_latest((total_count.clone(), end_threshold.clone())),
    )
    .subscribe_with(move |(range, (total_count, end_threshold))| {
        let Some(notifier) = weak.upgrade() else {
            return;
        };
        if let Some(index) = notifier.observe(*range, *total_count, *end_threshold) {
            end_reached.next(index);
        }
    });
}
