// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `understory_placement`.
//!
//! These cover the auto-side search over arbitrary geometry and the
//! debounce guarantees of the visibility state machine under arbitrary
//! timing.

use kurbo::{Rect, Size};
use proptest::prelude::*;

use understory_placement::{
    AvailableSpace, Phase, PlacementRequest, Side, SidePreference, TooltipInput, TooltipState,
    TriggerMode, VisibilityChange, place,
};

const AUTO_ORDER: [Side; 4] = [Side::Top, Side::Bottom, Side::Right, Side::Left];

fn request_strategy() -> impl Strategy<Value = PlacementRequest> {
    (
        0.0..800.0_f64,
        0.0..600.0_f64,
        1.0..300.0_f64,
        1.0..200.0_f64,
        1.0..400.0_f64,
        1.0..200.0_f64,
        0.0..16.0_f64,
    )
        .prop_map(|(x, y, w, h, tw, th, offset)| {
            PlacementRequest::new(
                Rect::new(x, y, x + w, y + h),
                Size::new(tw, th),
                Size::new(800.0, 600.0),
            )
            .side(SidePreference::Auto)
            .offset(offset)
        })
}

proptest! {
    #[test]
    fn auto_picks_first_fitting_side_or_top(request in request_strategy()) {
        let placement = place(&request);
        let space = AvailableSpace::measure(request.trigger, request.viewport, request.offset);
        match AUTO_ORDER.iter().position(|s| space.fits(*s, request.tooltip)) {
            Some(idx) => prop_assert_eq!(placement.side, AUTO_ORDER[idx]),
            None => prop_assert_eq!(placement.side, Side::Top),
        }
    }

    #[test]
    fn anchor_sits_offset_away_from_trigger(request in request_strategy()) {
        let placement = place(&request);
        let t = request.trigger;
        let gap = match placement.side {
            Side::Top => t.y0 - placement.anchor.y,
            Side::Bottom => placement.anchor.y - t.y1,
            Side::Left => t.x0 - placement.anchor.x,
            Side::Right => placement.anchor.x - t.x1,
        };
        prop_assert!((gap - request.offset).abs() < 1e-9);
    }

    #[test]
    fn early_leave_never_opens(
        start in 0_u64..10_000,
        delay in 1_u64..1_000,
        early in 0_u64..1_000,
        later in 0_u64..100_000,
    ) {
        let early = early % delay;
        let mut state = TooltipState::new(TriggerMode::Hover, delay, 100);
        prop_assert_eq!(state.handle(TooltipInput::PointerEnter, start), None);
        prop_assert_eq!(state.handle(TooltipInput::PointerLeave, start + early), None);
        prop_assert_eq!(state.tick(start + early + later), None);
        prop_assert_eq!(state.phase(), Phase::Closed);
    }

    #[test]
    fn reenter_during_close_never_closes(
        hide_delay in 1_u64..1_000,
        early in 0_u64..1_000,
        later in 0_u64..100_000,
    ) {
        let early = early % hide_delay;
        let mut state = TooltipState::new(TriggerMode::Hover, 0, hide_delay);
        prop_assert_eq!(
            state.handle(TooltipInput::PointerEnter, 0),
            Some(VisibilityChange::Opened)
        );
        prop_assert_eq!(state.handle(TooltipInput::PointerLeave, 10), None);
        prop_assert_eq!(state.handle(TooltipInput::PointerEnter, 10 + early), None);
        prop_assert_eq!(state.tick(10 + early + later), None);
        prop_assert_eq!(state.phase(), Phase::Open);
    }
}

#[test]
fn top_left_trigger_resolves_below() {
    let request = PlacementRequest::new(
        Rect::new(0.0, 0.0, 100.0, 30.0),
        Size::new(200.0, 50.0),
        Size::new(800.0, 600.0),
    )
    .side(SidePreference::Auto);
    let space = AvailableSpace::measure(request.trigger, request.viewport, request.offset);
    assert_eq!(space.top, 0.0);
    assert_eq!(space.bottom, 570.0);
    assert_eq!(place(&request).side, Side::Bottom);
}

#[test]
fn no_room_anywhere_resolves_top() {
    let request = PlacementRequest::new(
        Rect::new(10.0, 10.0, 90.0, 40.0),
        Size::new(500.0, 500.0),
        Size::new(100.0, 50.0),
    )
    .side(SidePreference::Auto);
    assert_eq!(place(&request).side, Side::Top);
}

#[test]
fn rapid_hover_jitter_does_not_flicker() {
    let mut state = TooltipState::new(TriggerMode::Hover, 150, 150);
    let mut changes = Vec::new();
    for step in 0..20_u64 {
        let input = if step % 2 == 0 {
            TooltipInput::PointerEnter
        } else {
            TooltipInput::PointerLeave
        };
        changes.extend(state.handle(input, step * 10));
        changes.extend(state.tick(step * 10));
    }
    assert!(changes.is_empty(), "{changes:?}");
    assert_eq!(state.phase(), Phase::Closed);
}
