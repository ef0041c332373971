// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_placement --heading-base-level=0

//! Understory Placement: viewport-aware placement and delayed visibility for floating UI.
//!
//! This crate answers two questions for tooltips and similar floating
//! elements: *when* should it be visible, and *where* should it go.
//!
//! - [`place`] is a pure function from a [`PlacementRequest`] (trigger box,
//!   floating element size, viewport size, requested side, offset) to a
//!   [`Placement`] (a concrete [`Side`] plus an anchor point). With
//!   [`SidePreference::Auto`] it takes the first of top, bottom, right, left
//!   that has room, and falls back to top when none does.
//! - [`PlacementEngine`] keeps the last good placement and recomputes it from
//!   a [`Geometry`] source. A missing measurement skips the recompute instead
//!   of clearing the placement.
//! - [`TooltipState`] is the `Closed → Opening → Open → Closing → Closed`
//!   state machine with cancellable show/hide delays, built on
//!   `understory_timing`.
//! - [`TooltipController`] ties the two together: placement is computed on
//!   open, refreshed on resize and scroll while visible, and dropped on close.
//!
//! The crate does not own a clock, an event loop, or any element tree.
//! Hosts pass in the current time in milliseconds and the measurements
//! they already have, and route the returned [`VisibilityChange`]s to
//! their own callbacks.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_placement::{
//!     Measured, Side, SidePreference, TooltipConfig, TooltipController, TooltipInput,
//!     VisibilityChange,
//! };
//!
//! let config = TooltipConfig::default()
//!     .side(SidePreference::Auto)
//!     .delay(300)
//!     .offset(6.0);
//! let mut tooltip = TooltipController::new(config, true);
//! let geometry = Measured {
//!     trigger: Rect::new(10.0, 0.0, 110.0, 24.0),
//!     tooltip: Size::new(160.0, 40.0),
//!     viewport: Size::new(1024.0, 768.0),
//! };
//!
//! tooltip.handle(TooltipInput::PointerEnter, 1_000, &geometry);
//! assert_eq!(tooltip.tick(1_300, &geometry), Some(VisibilityChange::Opened));
//!
//! let placement = tooltip.placement().unwrap();
//! assert_eq!(placement.side, Side::Bottom);
//! assert_eq!(placement.anchor.y, 30.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std` and `tracing/std`.
//! - `libm`: builds Kurbo with `libm` math for `no_std` targets.
//! - `serde`: derives `Serialize`/`Deserialize` for [`Side`],
//!   [`SidePreference`], [`TriggerMode`] and [`TooltipConfig`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod engine;
mod error;
mod place;
mod side;
mod tooltip;
mod visibility;

pub use config::TooltipConfig;
pub use engine::{Geometry, Measured, PlacementEngine, Reflow, Unmeasured};
pub use error::ParseError;
pub use place::{
    AUTO_FALLBACK, AvailableSpace, Placement, PlacementRequest, anchor, choose_side, place,
};
pub use side::{Side, SidePreference};
pub use tooltip::TooltipController;
pub use visibility::{Phase, TooltipInput, TooltipState, TriggerMode, VisibilityChange};

pub use understory_timing::TimerId;
