//! Adapter utilities for the `windowed` crate.
//!
//! The `windowed` crate is UI-agnostic and focuses on range math and node reconciliation. This
//! crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - [`MemoryHost`], a retained in-memory scroll container (tests, headless simulation)
//! - Scroll anchoring across `update_items` (e.g. prepend without visual jumps)
//! - Tween-based smooth scrolling
//! - [`Controller`], which routes host events into a windowed view
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod controller;
mod memory_host;
mod tween;

#[cfg(test)]
mod tests;

pub use anchor::{ScrollAnchor, apply_anchor, capture_first_visible_anchor, update_items_anchored};
pub use controller::Controller;
pub use memory_host::{HostStats, MemoryHost, Mounted, SMOOTH_SCROLL_MS};
pub use tween::{Easing, Tween};
