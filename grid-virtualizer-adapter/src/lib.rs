//! Adapter utilities for the `grid-virtualizer` crate.
//!
//! The `grid-virtualizer` crate is UI-agnostic and only computes the window. This crate
//! provides the small, framework-neutral host loop most adapters need around it:
//!
//! - Turning layout measurements into engine geometry
//! - Applying scroll-to commands, instantly or through a tween for smooth scrolling
//! - Ticking the `is_scrolling` debounce
//! - Spacer padding around the rendered window
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod layout;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::{DEFAULT_SMOOTH_SCROLL_MS, GridController};
pub use layout::{ItemMeasurement, ListPadding};
pub use tween::{Easing, Tween};
