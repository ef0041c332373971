// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility and placement combined for one tooltip.

use crate::config::TooltipConfig;
use crate::engine::{Geometry, PlacementEngine, Reflow};
use crate::place::Placement;
use crate::visibility::{Phase, TooltipInput, TooltipState, VisibilityChange};

/// Drives one tooltip: when it shows, and where.
///
/// Placement is computed when the tooltip opens, recomputed on viewport
/// changes while it is visible, and discarded when it closes. A controller
/// without content ignores every input.
///
/// ```rust
/// use kurbo::{Rect, Size};
/// use understory_placement::{
///     Measured, Side, TooltipConfig, TooltipController, TooltipInput,
/// };
///
/// let config = TooltipConfig::default().delay(0).offset(0.0);
/// let mut tooltip = TooltipController::new(config, true);
/// let geometry = Measured {
///     trigger: Rect::new(0.0, 0.0, 100.0, 30.0),
///     tooltip: Size::new(200.0, 50.0),
///     viewport: Size::new(800.0, 600.0),
/// };
///
/// tooltip.handle(TooltipInput::PointerEnter, 0, &geometry);
/// assert_eq!(tooltip.placement().map(|p| p.side), Some(Side::Bottom));
/// ```
#[derive(Clone, Debug)]
pub struct TooltipController {
    state: TooltipState,
    engine: PlacementEngine,
    has_content: bool,
}

impl TooltipController {
    /// Creates a closed controller from `config`.
    #[must_use]
    pub fn new(config: TooltipConfig, has_content: bool) -> Self {
        let mut state = TooltipState::new(config.trigger, config.delay, config.hide_delay);
        state.set_disabled(config.disabled);
        Self {
            state,
            engine: PlacementEngine::new(config.side, config.offset),
            has_content,
        }
    }

    /// Applies a new configuration, keeping visibility unless the trigger mode
    /// changed or the tooltip became disabled.
    pub fn configure(&mut self, config: TooltipConfig) -> Option<VisibilityChange> {
        self.engine.set_side(config.side);
        self.engine.set_offset(config.offset);
        self.state.set_delays(config.delay, config.hide_delay);
        let mode_change = self.state.set_mode(config.trigger);
        let disabled_change = if config.disabled == self.state.is_disabled() {
            None
        } else {
            self.state.set_disabled(config.disabled)
        };
        self.after(mode_change.or(disabled_change))
    }

    /// The visibility state machine.
    #[must_use]
    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Returns `true` while the tooltip is on screen.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    /// The current placement, present only while visible and measured.
    #[must_use]
    pub fn placement(&self) -> Option<Placement> {
        self.engine.current()
    }

    /// Returns `true` if the tooltip has content to show.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.has_content
    }

    /// Updates whether there is content; losing content closes the tooltip.
    pub fn set_content(&mut self, has_content: bool) -> Option<VisibilityChange> {
        self.has_content = has_content;
        if has_content {
            None
        } else {
            let change = self.state.set_open(false);
            self.after(change)
        }
    }

    /// Processes a trigger event.
    pub fn handle(
        &mut self,
        input: TooltipInput,
        now: u64,
        geometry: &impl Geometry,
    ) -> Option<VisibilityChange> {
        if !self.has_content {
            return None;
        }
        let change = self.state.handle(input, now);
        self.settle(change, geometry)
    }

    /// Delivers a matured timer.
    pub fn tick(&mut self, now: u64, geometry: &impl Geometry) -> Option<VisibilityChange> {
        let change = self.state.tick(now);
        self.settle(change, geometry)
    }

    /// Delivers a host-scheduled timer callback.
    pub fn fire(
        &mut self,
        id: understory_timing::TimerId,
        now: u64,
        geometry: &impl Geometry,
    ) -> Option<VisibilityChange> {
        let change = self.state.fire(id, now);
        self.settle(change, geometry)
    }

    /// Drives visibility directly (manual or controlled use).
    pub fn set_open(&mut self, open: bool, geometry: &impl Geometry) -> Option<VisibilityChange> {
        if open && !self.has_content {
            return None;
        }
        let change = self.state.set_open(open);
        self.settle(change, geometry)
    }

    /// Recomputes placement after a viewport resize or scroll; no-op while hidden.
    pub fn on_viewport_change(
        &mut self,
        reason: Reflow,
        geometry: &impl Geometry,
    ) -> Option<Placement> {
        if self.state.is_visible() {
            self.engine.recompute(reason, geometry)
        } else {
            None
        }
    }

    fn settle(
        &mut self,
        change: Option<VisibilityChange>,
        geometry: &impl Geometry,
    ) -> Option<VisibilityChange> {
        if change == Some(VisibilityChange::Opened) {
            self.engine.recompute(Reflow::Open, geometry);
        }
        self.after(change)
    }

    fn after(&mut self, change: Option<VisibilityChange>) -> Option<VisibilityChange> {
        if change == Some(VisibilityChange::Closed) {
            self.engine.clear();
        }
        change
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Measured, Unmeasured};
    use crate::side::Side;
    use crate::visibility::TriggerMode;
    use kurbo::{Rect, Size};

    fn geometry(trigger: Rect) -> Measured {
        Measured {
            trigger,
            tooltip: Size::new(120.0, 40.0),
            viewport: Size::new(800.0, 600.0),
        }
    }

    #[test]
    fn placement_lives_while_open() {
        let config = TooltipConfig::default().delay(200).hide_delay(100);
        let mut tooltip = TooltipController::new(config, true);
        let g = geometry(Rect::new(300.0, 300.0, 400.0, 330.0));

        assert_eq!(tooltip.handle(TooltipInput::PointerEnter, 0, &g), None);
        assert!(tooltip.placement().is_none());
        assert_eq!(tooltip.tick(200, &g), Some(VisibilityChange::Opened));
        assert_eq!(tooltip.placement().map(|p| p.side), Some(Side::Top));

        tooltip.handle(TooltipInput::PointerLeave, 300, &g);
        assert!(tooltip.placement().is_some(), "still visible while closing");
        assert_eq!(tooltip.tick(400, &g), Some(VisibilityChange::Closed));
        assert!(tooltip.placement().is_none());
    }

    #[test]
    fn viewport_changes_only_matter_while_visible() {
        let config = TooltipConfig::default().delay(0);
        let mut tooltip = TooltipController::new(config, true);
        let low = geometry(Rect::new(300.0, 300.0, 400.0, 330.0));
        let high = geometry(Rect::new(300.0, 0.0, 400.0, 30.0));

        assert_eq!(tooltip.on_viewport_change(Reflow::Resize, &low), None);

        tooltip.handle(TooltipInput::Focus, 0, &low);
        assert_eq!(tooltip.placement().map(|p| p.side), Some(Side::Top));
        let moved = tooltip.on_viewport_change(Reflow::Scroll, &high);
        assert_eq!(moved.map(|p| p.side), Some(Side::Bottom));

        // Unmounted mid-scroll: keep the last good placement.
        let kept = tooltip.on_viewport_change(Reflow::Scroll, &Unmeasured);
        assert_eq!(kept, moved);
    }

    #[test]
    fn empty_content_is_a_no_op() {
        let config = TooltipConfig::default().delay(0);
        let mut tooltip = TooltipController::new(config, false);
        let g = geometry(Rect::new(0.0, 100.0, 10.0, 110.0));
        assert_eq!(tooltip.handle(TooltipInput::PointerEnter, 0, &g), None);
        assert_eq!(tooltip.set_open(true, &g), None);
        assert!(!tooltip.is_visible());
    }

    #[test]
    fn disabled_config_never_opens() {
        let config = TooltipConfig::default().delay(0).disabled(true);
        let mut tooltip = TooltipController::new(config, true);
        let g = geometry(Rect::new(0.0, 100.0, 10.0, 110.0));
        assert_eq!(tooltip.handle(TooltipInput::PointerEnter, 0, &g), None);
        assert!(tooltip.placement().is_none());
    }

    #[test]
    fn losing_content_or_mode_closes() {
        let config = TooltipConfig::default().delay(0);
        let mut tooltip = TooltipController::new(config, true);
        let g = geometry(Rect::new(0.0, 100.0, 10.0, 110.0));
        tooltip.handle(TooltipInput::PointerEnter, 0, &g);
        assert_eq!(tooltip.set_content(false), Some(VisibilityChange::Closed));
        assert!(tooltip.placement().is_none());

        tooltip.set_content(true);
        tooltip.handle(TooltipInput::PointerEnter, 10, &g);
        assert!(tooltip.is_visible());
        let change = tooltip.configure(config.trigger(TriggerMode::Click));
        assert_eq!(change, Some(VisibilityChange::Closed));
        assert_eq!(tooltip.state().mode(), TriggerMode::Click);
    }
}
