//! A headless windowing engine for fixed-size item grids.
//!
//! Given the viewport size, the size of one item, the scroll offset and the item count,
//! [`GridEngine`] decides which contiguous run of items to materialize, how tall the spacers
//! above and below it must be, and when to tell the host that the end of the data is near.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport and item size (after each layout pass)
//! - scroll offset (on every scroll event) and a clock (`now_ms`)
//! - item count
//!
//! For a ready-made host loop with smooth scrolling, see the `grid-virtualizer-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod end_reached;
mod engine;
mod io;
pub mod math;
mod options;
pub mod range;
mod remaining;
mod render;
pub mod rx;
mod scroll_seek;
mod scroll_to;
mod scrolling;
mod types;


pub use end_reached::EndReachedNotifier;
pub use engine::GridEngine;
pub use io::{Input, Output};
pub use options::GridEngineOptions;
pub use remaining::remaining_height;
pub use render::{GridItem, ItemsRender, PlaceholderProps, RenderedItem};
pub use scroll_seek::{ScrollSeek, ScrollSeekConfiguration, SeekCallback, SeekPredicate};
pub use scroll_to::scroll_to_options;
pub use scrolling::{DEFAULT_IS_SCROLLING_RESET_DELAY_MS, ScrollingState};
pub use types::{
    Align, GridDimensions, ItemRange, ListRange, ScrollBehavior, ScrollDirection,
    ScrollLocation, ScrollToOptions,
};
