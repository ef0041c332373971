// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained placement that survives failed measurements.

use kurbo::{Rect, Size};

use crate::place::{Placement, PlacementRequest, place};
use crate::side::SidePreference;

/// Source of the measurements a placement needs.
///
/// Each method returns `None` when the measurement is unavailable, for
/// example because the element was unmounted mid-computation.
pub trait Geometry {
    /// Bounding box of the trigger in viewport coordinates.
    fn trigger_rect(&self) -> Option<Rect>;
    /// Measured size of the floating element.
    fn tooltip_size(&self) -> Option<Size>;
    /// Size of the viewport.
    fn viewport_size(&self) -> Option<Size>;
}

/// Measurements already in hand.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Measured {
    /// Bounding box of the trigger.
    pub trigger: Rect,
    /// Size of the floating element.
    pub tooltip: Size,
    /// Size of the viewport.
    pub viewport: Size,
}

impl Geometry for Measured {
    fn trigger_rect(&self) -> Option<Rect> {
        Some(self.trigger)
    }

    fn tooltip_size(&self) -> Option<Size> {
        Some(self.tooltip)
    }

    fn viewport_size(&self) -> Option<Size> {
        Some(self.viewport)
    }
}

/// Measurements that are never available, e.g. before mount.
#[derive(Copy, Clone, Debug, Default)]
pub struct Unmeasured;

impl Geometry for Unmeasured {
    fn trigger_rect(&self) -> Option<Rect> {
        None
    }

    fn tooltip_size(&self) -> Option<Size> {
        None
    }

    fn viewport_size(&self) -> Option<Size> {
        None
    }
}

/// Why a placement is being recomputed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Reflow {
    /// The floating element just opened.
    Open,
    /// The viewport was resized.
    Resize,
    /// An ancestor of the trigger scrolled.
    Scroll,
}

/// Keeps the most recent good [`Placement`] for one floating element.
#[derive(Clone, Debug, Default)]
pub struct PlacementEngine {
    side: SidePreference,
    offset: f64,
    current: Option<Placement>,
}

impl PlacementEngine {
    /// Creates an engine with no placement yet.
    #[must_use]
    pub fn new(side: SidePreference, offset: f64) -> Self {
        Self {
            side,
            offset,
            current: None,
        }
    }

    /// The requested side.
    #[must_use]
    pub fn side(&self) -> SidePreference {
        self.side
    }

    /// Changes the requested side; takes effect on the next recompute.
    pub fn set_side(&mut self, side: SidePreference) {
        self.side = side;
    }

    /// The offset.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Changes the offset; takes effect on the next recompute.
    pub fn set_offset(&mut self, offset: f64) {
        self.offset = offset;
    }

    /// The last good placement.
    #[must_use]
    pub fn current(&self) -> Option<Placement> {
        self.current
    }

    /// Measures `geometry` and recomputes the placement.
    ///
    /// If any measurement is missing the recompute is skipped and the previous
    /// placement is kept. Returns the placement in effect afterwards.
    pub fn recompute(&mut self, reason: Reflow, geometry: &impl Geometry) -> Option<Placement> {
        let (Some(trigger), Some(tooltip), Some(viewport)) = (
            geometry.trigger_rect(),
            geometry.tooltip_size(),
            geometry.viewport_size(),
        ) else {
            tracing::debug!(?reason, "placement skipped: geometry unavailable");
            return self.current;
        };
        let request = PlacementRequest {
            trigger,
            tooltip,
            viewport,
            side: self.side,
            offset: self.offset,
        };
        let placement = place(&request);
        tracing::debug!(
            ?reason,
            side = placement.side.as_str(),
            x = placement.anchor.x,
            y = placement.anchor.y,
            "placement recomputed"
        );
        self.current = Some(placement);
        self.current
    }

    /// Discards the placement, e.g. when the floating element closes.
    pub fn clear(&mut self) {
        self.current = None;
    }
}
