// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure side selection and anchor computation.

use kurbo::{Point, Rect, Size};

use crate::side::{Side, SidePreference};

/// Sides tried, in order, when the preference is [`SidePreference::Auto`].
const AUTO_ORDER: [Side; 4] = [Side::Top, Side::Bottom, Side::Right, Side::Left];

/// Side used by [`SidePreference::Auto`] when no side has room.
pub const AUTO_FALLBACK: Side = Side::Top;

/// Everything needed to place a floating element, in viewport coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacementRequest {
    /// Bounding box of the trigger.
    pub trigger: Rect,
    /// Measured size of the floating element.
    pub tooltip: Size,
    /// Size of the viewport; its origin is `(0, 0)`.
    pub viewport: Size,
    /// Requested side.
    pub side: SidePreference,
    /// Gap between trigger and floating element.
    pub offset: f64,
}

impl PlacementRequest {
    /// Creates a request for the default side with no offset.
    #[must_use]
    pub fn new(trigger: Rect, tooltip: Size, viewport: Size) -> Self {
        Self {
            trigger,
            tooltip,
            viewport,
            side: SidePreference::default(),
            offset: 0.0,
        }
    }

    /// Sets the requested side.
    #[must_use]
    pub fn side(mut self, side: SidePreference) -> Self {
        self.side = side;
        self
    }

    /// Sets the offset.
    #[must_use]
    pub fn offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }
}

/// Room between each trigger edge and the matching viewport edge, minus the offset.
///
/// Values may be negative when the trigger is partly outside the viewport.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AvailableSpace {
    /// Above the trigger.
    pub top: f64,
    /// Below the trigger.
    pub bottom: f64,
    /// Left of the trigger.
    pub left: f64,
    /// Right of the trigger.
    pub right: f64,
}

impl AvailableSpace {
    /// Measures the space around `trigger` inside a viewport of `viewport` size.
    #[must_use]
    pub fn measure(trigger: Rect, viewport: Size, offset: f64) -> Self {
        Self {
            top: trigger.y0 - offset,
            bottom: viewport.height - trigger.y1 - offset,
            left: trigger.x0 - offset,
            right: viewport.width - trigger.x1 - offset,
        }
    }

    /// Space on `side`.
    #[must_use]
    pub fn on(&self, side: Side) -> f64 {
        match side {
            Side::Top => self.top,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Returns `true` if an element of `size` fits on `side`.
    ///
    /// Vertical sides compare against the height, horizontal sides against the width.
    #[must_use]
    pub fn fits(&self, side: Side, size: Size) -> bool {
        let needed = if side.is_vertical() {
            size.height
        } else {
            size.width
        };
        self.on(side) >= needed
    }
}

/// Where the floating element goes: the chosen side and its anchor point.
///
/// The anchor is the midpoint of the edge of the floating element that faces
/// the trigger. Hosts either position the element at the anchor and apply
/// [`Placement::css_transform`], or use [`Placement::origin`] directly.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// The chosen side; never `auto`.
    pub side: Side,
    /// Anchor point in viewport coordinates.
    pub anchor: Point,
}

impl Placement {
    /// Top-left corner of an element of `size` centered on the anchor for this side.
    #[must_use]
    pub fn origin(&self, size: Size) -> Point {
        let Point { x, y } = self.anchor;
        match self.side {
            Side::Top => Point::new(x - size.width / 2.0, y - size.height),
            Side::Bottom => Point::new(x - size.width / 2.0, y),
            Side::Left => Point::new(x - size.width, y - size.height / 2.0),
            Side::Right => Point::new(x, y - size.height / 2.0),
        }
    }

    /// Bounding box of an element of `size` placed here.
    #[must_use]
    pub fn bounds(&self, size: Size) -> Rect {
        Rect::from_origin_size(self.origin(size), size)
    }

    /// CSS transform that centers an element positioned at the anchor.
    #[must_use]
    pub const fn css_transform(&self) -> &'static str {
        match self.side {
            Side::Top => "translate(-50%, -100%)",
            Side::Bottom => "translate(-50%, 0)",
            Side::Left => "translate(-100%, -50%)",
            Side::Right => "translate(0, -50%)",
        }
    }
}

/// Chooses the side for `request`.
///
/// An explicit preference is used as is. `Auto` takes the first of top,
/// bottom, right, left with enough room, falling back to top when none has.
#[must_use]
pub fn choose_side(request: &PlacementRequest) -> Side {
    if let Some(side) = request.side.explicit() {
        return side;
    }
    let space = AvailableSpace::measure(request.trigger, request.viewport, request.offset);
    AUTO_ORDER
        .into_iter()
        .find(|side| space.fits(*side, request.tooltip))
        .unwrap_or(AUTO_FALLBACK)
}

/// Anchor point for `side` around `trigger`.
#[must_use]
pub fn anchor(trigger: Rect, side: Side, offset: f64) -> Point {
    let center = trigger.center();
    match side {
        Side::Top => Point::new(center.x, trigger.y0 - offset),
        Side::Bottom => Point::new(center.x, trigger.y1 + offset),
        Side::Left => Point::new(trigger.x0 - offset, center.y),
        Side::Right => Point::new(trigger.x1 + offset, center.y),
    }
}

/// Places a floating element.
///
/// ```rust
/// use kurbo::{Rect, Size};
/// use understory_placement::{PlacementRequest, Side, SidePreference, place};
///
/// // A trigger hugging the top edge: no room above, plenty below.
/// let request = PlacementRequest::new(
///     Rect::new(0.0, 0.0, 100.0, 30.0),
///     Size::new(200.0, 50.0),
///     Size::new(800.0, 600.0),
/// )
/// .side(SidePreference::Auto);
///
/// let placement = place(&request);
/// assert_eq!(placement.side, Side::Bottom);
/// assert_eq!((placement.anchor.x, placement.anchor.y), (50.0, 30.0));
/// ```
#[must_use]
pub fn place(request: &PlacementRequest) -> Placement {
    let side = choose_side(request);
    Placement {
        side,
        anchor: anchor(request.trigger, side, request.offset),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size::new(800.0, 600.0);
    const TIP: Size = Size::new(200.0, 50.0);

    fn auto(trigger: Rect) -> PlacementRequest {
        PlacementRequest::new(trigger, TIP, VIEWPORT).side(SidePreference::Auto)
    }

    #[test]
    fn space_is_edge_distance_minus_offset() {
        let space = AvailableSpace::measure(Rect::new(100.0, 200.0, 300.0, 240.0), VIEWPORT, 8.0);
        assert_eq!(space.top, 192.0);
        assert_eq!(space.bottom, 352.0);
        assert_eq!(space.left, 92.0);
        assert_eq!(space.right, 492.0);
    }

    #[test]
    fn auto_prefers_top_when_it_fits() {
        let placement = place(&auto(Rect::new(300.0, 300.0, 400.0, 330.0)));
        assert_eq!(placement.side, Side::Top);
        assert_eq!(placement.anchor, Point::new(350.0, 300.0));
    }

    #[test]
    fn auto_moves_below_when_top_is_short() {
        let placement = place(&auto(Rect::new(0.0, 0.0, 100.0, 30.0)));
        assert_eq!(placement.side, Side::Bottom);
    }

    #[test]
    fn auto_tries_right_then_left() {
        // Tall trigger: no vertical room at all.
        let viewport = Size::new(800.0, 100.0);
        let right = place(
            &PlacementRequest::new(Rect::new(100.0, 10.0, 200.0, 90.0), TIP, viewport)
                .side(SidePreference::Auto),
        );
        assert_eq!(right.side, Side::Right);
        assert_eq!(right.anchor, Point::new(200.0, 50.0));

        let left = place(
            &PlacementRequest::new(Rect::new(650.0, 10.0, 750.0, 90.0), TIP, viewport)
                .side(SidePreference::Auto),
        );
        assert_eq!(left.side, Side::Left);
    }

    #[test]
    fn auto_falls_back_to_top() {
        let cramped = PlacementRequest::new(
            Rect::new(0.0, 0.0, 100.0, 30.0),
            TIP,
            Size::new(100.0, 30.0),
        )
        .side(SidePreference::Auto);
        assert_eq!(place(&cramped).side, AUTO_FALLBACK);
    }

    #[test]
    fn offset_counts_against_space() {
        // 58px above: fits with offset 8 (50 needed), not with offset 9.
        let trigger = Rect::new(300.0, 58.0, 400.0, 80.0);
        let fits = auto(trigger).offset(8.0);
        assert_eq!(place(&fits).side, Side::Top);
        let short = auto(trigger).offset(9.0);
        assert_eq!(place(&short).side, Side::Bottom);
    }

    #[test]
    fn explicit_side_is_used_even_without_room() {
        let request = PlacementRequest::new(Rect::new(0.0, 0.0, 100.0, 30.0), TIP, VIEWPORT)
            .side(SidePreference::Left)
            .offset(4.0);
        let placement = place(&request);
        assert_eq!(placement.side, Side::Left);
        assert_eq!(placement.anchor, Point::new(-4.0, 15.0));
    }

    #[test]
    fn origin_applies_centering_per_side() {
        let size = Size::new(20.0, 10.0);
        let at = |side| Placement {
            side,
            anchor: Point::new(100.0, 100.0),
        };
        assert_eq!(at(Side::Top).origin(size), Point::new(90.0, 90.0));
        assert_eq!(at(Side::Bottom).origin(size), Point::new(90.0, 100.0));
        assert_eq!(at(Side::Left).origin(size), Point::new(80.0, 95.0));
        assert_eq!(at(Side::Right).origin(size), Point::new(100.0, 95.0));
        assert_eq!(
            at(Side::Bottom).bounds(size),
            Rect::new(90.0, 100.0, 110.0, 110.0)
        );
        assert_eq!(at(Side::Top).css_transform(), "translate(-50%, -100%)");
    }
}
