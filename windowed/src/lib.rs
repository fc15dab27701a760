//! A headless windowed renderer for long lists and grids.
//!
//! For adapter-level utilities (an in-memory host, tweens, anchoring), see the
//! `windowed-adapter` crate.
//!
//! Given an ordered collection and a fixed item size, a [`VirtualList`] (or [`VirtualGrid`])
//! materializes presentation nodes only for the items intersecting the viewport plus an overscan
//! margin. As the viewport moves it reconciles the mounted nodes incrementally: nodes leaving
//! the range are detached, nodes entering it are rendered in one batch, and everything else is
//! left alone. Spacers before and after the mounted nodes keep the total scroll extent correct.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer implements [`Host`] to provide:
//! - viewport extent and scroll offset
//! - a scroll primitive (instant or smooth)
//! - node attach/replace/detach and spacer sizing
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
pub mod geometry;
mod grid;
mod host;
mod key;
mod list;
mod options;
mod reconcile;
mod state;
mod types;


pub use error::ConfigError;
pub use grid::VirtualGrid;
pub use host::{Host, Windowed};
pub use key::NodeKey;
pub use list::VirtualList;
pub use options::{DEFAULT_OVERSCAN, GridOptions, ListOptions, OnScrollCallback, RenderItem};
pub use state::WindowState;
pub use types::{CellKey, Orientation, Placement, ScrollBehavior, Spacers, VisibleRange};
