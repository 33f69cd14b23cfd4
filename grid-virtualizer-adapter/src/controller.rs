use alloc::rc::Rc;
use core::cell::Cell;

use grid_virtualizer::{
    GridEngine, GridEngineOptions, ScrollBehavior, ScrollLocation, ScrollToOptions,
};

use crate::{Easing, ItemMeasurement, ListPadding, Tween};

/// Default duration of a `ScrollBehavior::Smooth` scroll.
pub const DEFAULT_SMOOTH_SCROLL_MS: u64 = 240;

/// A framework-neutral controller that wraps a [`GridEngine`] and runs the usual host loop
/// around it (layout measurement, scroll events, tween-driven smooth scrolling).
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_layout` after every layout pass, with the first rendered item's measurement
/// - `on_scroll` when the scroll container reports a new offset
/// - `tick(now_ms)` each frame/timer tick (for tween scrolling and `is_scrolling` debouncing)
///
/// When `tick` returns an offset, apply it to the real scroll container.
#[derive(Debug)]
pub struct GridController {
    engine: GridEngine,
    scroll_offset: f64,
    measured: bool,
    pending_scroll: Rc<Cell<Option<ScrollToOptions>>>,
    tween: Option<Tween>,
    smooth_duration_ms: u64,
    easing: Easing,
}

impl GridController {
    pub fn new(options: GridEngineOptions) -> Self {
        let engine = GridEngine::new(options);
        let pending_scroll = Rc::new(Cell::new(None));
        let sink = Rc::clone(&pending_scroll);
        engine.scroll_to().subscribe(move |cmd| sink.set(Some(*cmd)));

        Self {
            engine,
            scroll_offset: 0.0,
            measured: false,
            pending_scroll,
            tween: None,
            smooth_duration_ms: DEFAULT_SMOOTH_SCROLL_MS,
            easing: Easing::default(),
        }
    }

    pub fn with_smooth_scroll(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.smooth_duration_ms = duration_ms;
        self.easing = easing;
        self
    }

    pub fn engine(&self) -> &GridEngine {
        &self.engine
    }

    pub fn into_engine(self) -> GridEngine {
        self.engine
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// Call this after layout. Without a rendered item there is nothing to measure yet and the
    /// engine keeps its previous geometry.
    pub fn on_layout(
        &mut self,
        viewport_width: f64,
        viewport_height: f64,
        first_item: Option<ItemMeasurement>,
    ) {
        let Some(item) = first_item else {
            return;
        };
        if !item.is_valid() {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                target: "grid_virtualizer_adapter",
                outer_width = item.outer_width,
                outer_height = item.outer_height,
                "ignoring non-positive item measurement"
            );
            return;
        }

        self.measured = true;
        self.engine
            .grid_dimensions()
            .set(item.to_dimensions(viewport_width, viewport_height));
    }

    pub fn set_total_count(&mut self, total_count: usize) {
        self.engine.total_count().set(total_count);
    }

    /// Call this when the UI reports a scroll offset change (e.g. user wheel/drag).
    ///
    /// This cancels any active tween.
    pub fn on_scroll(&mut self, scroll_offset: f64, now_ms: u64) {
        self.cancel_animation();
        self.apply_offset(scroll_offset, now_ms);
    }

    /// Advances the controller.
    ///
    /// - If a tween is active, moves the offset along it and returns the new offset.
    /// - Otherwise, runs `is_scrolling` debouncing and returns `None`.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        let Some(tween) = self.tween else {
            self.engine.update_scrolling(now_ms);
            return None;
        };

        let offset = tween.sample(now_ms);
        self.apply_offset(offset, now_ms);

        if tween.is_done(now_ms) {
            self.tween = None;
        }

        Some(offset)
    }

    /// Asks the engine where `location` is and scrolls there: immediately for
    /// `ScrollBehavior::Auto`, through a tween for `ScrollBehavior::Smooth`. A smooth request
    /// during an active tween retargets it from its current position.
    ///
    /// Returns the target offset, clamped to `0`. Before the first measurement the request is
    /// ignored and the current offset is returned.
    pub fn scroll_to_index(&mut self, location: impl Into<ScrollLocation>, now_ms: u64) -> f64 {
        self.pending_scroll.set(None);
        self.engine.scroll_to_index().set(location.into());
        let Some(cmd) = self.pending_scroll.take() else {
            return self.scroll_offset;
        };
        if !self.measured {
            return self.scroll_offset;
        }

        let to = cmd.top.max(0.0);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "grid_virtualizer_adapter",
            from = self.scroll_offset,
            to,
            behavior = ?cmd.behavior,
            "scroll_to_index"
        );

        match cmd.behavior {
            ScrollBehavior::Auto => {
                self.cancel_animation();
                self.apply_offset(to, now_ms);
            }
            ScrollBehavior::Smooth => match &mut self.tween {
                Some(tween) => tween.retarget(now_ms, to, self.smooth_duration_ms),
                None => {
                    self.tween = Some(Tween::new(
                        self.scroll_offset,
                        to,
                        now_ms,
                        self.smooth_duration_ms,
                        self.easing,
                    ));
                }
            },
        }
        to
    }

    /// Spacers to render around the window.
    pub fn list_padding(&self) -> ListPadding {
        ListPadding {
            top: self.engine.list_offset().get().unwrap_or(0.0),
            bottom: self.engine.remaining_height().get().unwrap_or(0.0),
        }
    }

    fn apply_offset(&mut self, offset: f64, now_ms: u64) {
        self.scroll_offset = offset;
        self.engine.apply_scroll_event(offset, now_ms);
    }
}

impl Default for GridController {
    fn default() -> Self {
        Self::new(GridEngineOptions::default())
    }
}
