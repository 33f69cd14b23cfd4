//! Scroll-seek mode: while the user scrolls fast, hosts render lightweight placeholders instead
//! of real items.
//!
//! Velocity is the difference between two consecutive scroll offsets and drops back to `0` when
//! scrolling stops. On every velocity sample the configured `enter`/`exit` predicates decide
//! whether seek mode starts or ends.

use alloc::rc::{Rc, Weak};
use core::cell::Cell;
use core::fmt;

use crate::ListRange;
use crate::rx::{EventSubject, Stream, Subject, combine_latest, with_latest_from};

/// `(velocity, visible range) -> bool`
pub type SeekPredicate = Rc<dyn Fn(f64, ListRange) -> bool>;

/// `(velocity, visible range)`, called on every velocity sample while seeking.
pub type SeekCallback = Rc<dyn Fn(f64, ListRange)>;

/// Host-supplied policy for entering and leaving scroll-seek mode.
#[derive(Clone)]
pub struct ScrollSeekConfiguration {
    pub enter: SeekPredicate,
    pub exit: SeekPredicate,
    pub change: Option<SeekCallback>,
}

impl ScrollSeekConfiguration {
    pub fn new(
        enter: impl Fn(f64, ListRange) -> bool + 'static,
        exit: impl Fn(f64, ListRange) -> bool + 'static,
    ) -> Self {
        Self {
            enter: Rc::new(enter),
            exit: Rc::new(exit),
            change: None,
        }
    }

    /// Enters seek mode above `enter_velocity` pixels per scroll event (in either direction) and
    /// leaves it below `exit_velocity`.
    pub fn velocity_threshold(enter_velocity: f64, exit_velocity: f64) -> Self {
        Self::new(
            move |velocity, _| magnitude(velocity) > enter_velocity,
            move |velocity, _| magnitude(velocity) < exit_velocity,
        )
    }

    pub fn with_change(mut self, change: impl Fn(f64, ListRange) + 'static) -> Self {
        self.change = Some(Rc::new(change));
        self
    }
}

fn magnitude(velocity: f64) -> f64 {
    if velocity < 0.0 { -velocity } else { velocity }
}

impl fmt::Debug for ScrollSeekConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollSeekConfiguration")
            .field("has_change", &self.change.is_some())
            .finish_non_exhaustive()
    }
}

/// Seek-mode state: the current flag, the configuration and the last seen scroll offset.
#[derive(Debug)]
pub struct ScrollSeek {
    is_seeking: Subject<bool>,
    configuration: Subject<Option<ScrollSeekConfiguration>>,
    last_scroll_top: Cell<Option<f64>>,
}

impl ScrollSeek {
    pub fn new(configuration: Option<ScrollSeekConfiguration>) -> Self {
        Self {
            is_seeking: Subject::new(false),
            configuration: Subject::new(configuration),
            last_scroll_top: Cell::new(None),
        }
    }

    pub fn is_seeking(&self) -> bool {
        self.is_seeking.value()
    }

    pub fn configuration(&self) -> Option<ScrollSeekConfiguration> {
        self.configuration.value()
    }

    pub(crate) fn seeking_subject(&self) -> Subject<bool> {
        self.is_seeking.clone()
    }

    pub(crate) fn configuration_subject(&self) -> Subject<Option<ScrollSeekConfiguration>> {
        self.configuration.clone()
    }

    /// Velocity since the previous scroll offset; `None` for the very first offset.
    pub fn velocity_for(&self, scroll_top: f64) -> Option<f64> {
        let prev = self.last_scroll_top.replace(Some(scroll_top))?;
        Some(scroll_top - prev)
    }

    /// Runs the enter/exit policy for one velocity sample.
    pub fn evaluate(
        &self,
        velocity: f64,
        configuration: Option<&ScrollSeekConfiguration>,
        range: ListRange,
    ) {
        let Some(configuration) = configuration else {
            return;
        };

        if self.is_seeking.value() {
            if (configuration.exit)(velocity, range) {
                vdebug!(velocity, "scroll seek exit");
                self.is_seeking.next(false);
            }
        } else if (configuration.enter)(velocity, range) {
            vdebug!(velocity, "scroll seek enter");
            self.is_seeking.next(true);
        }

        if self.is_seeking.value() {
            if let Some(change) = &configuration.change {
                change(velocity, range);
            }
        }
    }

    /// Wires seek mode to the engine's scroll offset, scrolling flag and range notifications.
    pub(crate) fn connect(
        seek: &Rc<Self>,
        scroll_top: &Subject<f64>,
        is_scrolling: &Subject<bool>,
        range_changed: &EventSubject<ListRange>,
    ) {
        let velocity = Subject::new(0.0_f64);

        let weak: Weak<Self> = Rc::downgrade(seek);
        let sink = velocity.clone();
        scroll_top.subscribe_with(move |top| {
            let Some(seek) = weak.upgrade() else {
                return;
            };
            if let Some(v) = seek.velocity_for(*top) {
                sink.next(v);
            }
        });

        let sink = velocity.clone();
        is_scrolling.subscribe_with(move |scrolling| {
            if !*scrolling {
                sink.next(0.0);
            }
        });

        let weak = Rc::downgrade(seek);
        let context = combine_latest((seek.configuration_subject(), range_changed.clone()));
        with_latest_from(velocity, context).subscribe_with(
            move |(velocity, (configuration, range))| {
                if let Some(seek) = weak.upgrade() {
                    seek.evaluate(*velocity, configuration.as_ref(), *range);
                }
            },
        );
    }
}
