// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Delayed show/hide state machine for floating elements.
//!
//! ## Usage
//!
//! 1) Feed trigger events to [`TooltipState::handle`] with the current time.
//! 2) Whenever a timer is pending ([`TooltipState::deadline`]), call
//!    [`TooltipState::tick`] once it has passed, or route a host-scheduled
//!    callback through [`TooltipState::fire`] with the id from
//!    [`TooltipState::timer_id`].
//! 3) Forward every returned [`VisibilityChange`] to the owner's
//!    open-change callback.
//!
//! ## Minimal example
//!
//! ```
//! use understory_placement::{Phase, TooltipInput, TooltipState, TriggerMode, VisibilityChange};
//!
//! let mut state = TooltipState::new(TriggerMode::Hover, 200, 100);
//!
//! assert_eq!(state.handle(TooltipInput::PointerEnter, 0), None);
//! assert_eq!(state.phase(), Phase::Opening);
//! assert_eq!(state.tick(200), Some(VisibilityChange::Opened));
//!
//! assert_eq!(state.handle(TooltipInput::PointerLeave, 500), None);
//! assert_eq!(state.phase(), Phase::Closing);
//! assert_eq!(state.tick(600), Some(VisibilityChange::Closed));
//! ```

use core::fmt;
use core::str::FromStr;

use understory_timing::{Timer, TimerId};

use crate::error::ParseError;

/// Which trigger events drive visibility.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum TriggerMode {
    /// Pointer enter/leave, plus focus/blur for keyboard users.
    #[default]
    Hover,
    /// Focus/blur only.
    Focus,
    /// Click toggles.
    Click,
    /// Inputs are ignored; the owner calls [`TooltipState::set_open`].
    Manual,
}

impl TriggerMode {
    /// Canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hover => "hover",
            Self::Focus => "focus",
            Self::Click => "click",
            Self::Manual => "manual",
        }
    }
}

impl fmt::Display for TriggerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TriggerMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hover" => Ok(Self::Hover),
            "focus" => Ok(Self::Focus),
            "click" => Ok(Self::Click),
            "manual" => Ok(Self::Manual),
            _ => Err(ParseError::new("trigger mode", s)),
        }
    }
}

/// A trigger event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TooltipInput {
    /// Pointer entered the trigger.
    PointerEnter,
    /// Pointer left the trigger.
    PointerLeave,
    /// Trigger gained focus.
    Focus,
    /// Trigger lost focus.
    Blur,
    /// Trigger was clicked.
    Click,
    /// Escape was pressed; ignored in [`TriggerMode::Manual`].
    Escape,
}

/// Visibility phase.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Hidden, nothing pending.
    #[default]
    Closed,
    /// Hidden, show timer pending.
    Opening,
    /// Visible, nothing pending.
    Open,
    /// Visible, hide timer pending.
    Closing,
}

impl Phase {
    /// Returns `true` while the element is on screen.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Open | Self::Closing)
    }
}

/// Reported when the element appears or disappears.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VisibilityChange {
    /// The element became visible.
    Opened,
    /// The element was hidden.
    Closed,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Pending {
    Show,
    Hide,
}

/// Show/hide state for one floating element.
///
/// Each instance owns its own timer. Events are processed in arrival order,
/// and an event that reverses a pending transition cancels its timer, so
/// rapid enter/leave never flickers.
#[derive(Clone, Debug)]
pub struct TooltipState {
    mode: TriggerMode,
    delay: u64,
    hide_delay: u64,
    disabled: bool,
    phase: Phase,
    timer: Timer<Pending>,
}

impl Default for TooltipState {
    fn default() -> Self {
        Self::new(TriggerMode::default(), 0, 0)
    }
}

impl TooltipState {
    /// Creates a closed state machine.
    ///
    /// `delay` and `hide_delay` are in milliseconds; zero makes the
    /// corresponding transition immediate.
    #[must_use]
    pub fn new(mode: TriggerMode, delay: u64, hide_delay: u64) -> Self {
        Self {
            mode,
            delay,
            hide_delay,
            disabled: false,
            phase: Phase::Closed,
            timer: Timer::new(),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns `true` while the element is on screen.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase.is_visible()
    }

    /// The trigger mode.
    #[must_use]
    pub fn mode(&self) -> TriggerMode {
        self.mode
    }

    /// Returns `true` if inputs are suppressed.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Deadline of the pending timer, for host scheduling.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.timer.deadline()
    }

    /// Id of the pending timer, for host-scheduled callbacks.
    #[must_use]
    pub fn timer_id(&self) -> Option<TimerId> {
        self.timer.current()
    }

    /// Processes a trigger event.
    pub fn handle(&mut self, input: TooltipInput, now: u64) -> Option<VisibilityChange> {
        if self.disabled {
            return None;
        }
        use TooltipInput as I;
        use TriggerMode as M;
        match (self.mode, input) {
            (M::Manual, _) => None,
            (_, I::Escape) => self.dismiss(),
            (M::Hover, I::PointerEnter | I::Focus) | (M::Focus, I::Focus) => self.show(now),
            (M::Hover, I::PointerLeave | I::Blur) | (M::Focus, I::Blur) => self.hide(now),
            (M::Click, I::Click) => match self.phase {
                Phase::Closed | Phase::Closing => self.show(now),
                Phase::Opening | Phase::Open => self.hide(now),
            },
            _ => None,
        }
    }

    /// Delivers a matured timer, if any.
    pub fn tick(&mut self, now: u64) -> Option<VisibilityChange> {
        let pending = self.timer.poll(now)?;
        self.complete(pending)
    }

    /// Delivers a host-scheduled timer callback; stale ids are ignored.
    pub fn fire(&mut self, id: TimerId, now: u64) -> Option<VisibilityChange> {
        let pending = self.timer.fire(id, now)?;
        self.complete(pending)
    }

    /// Drives visibility directly, cancelling any pending timer.
    pub fn set_open(&mut self, open: bool) -> Option<VisibilityChange> {
        self.timer.cancel();
        let was_visible = self.is_visible();
        if open {
            self.transition(Phase::Open);
            (!was_visible).then_some(VisibilityChange::Opened)
        } else {
            self.transition(Phase::Closed);
            was_visible.then_some(VisibilityChange::Closed)
        }
    }

    /// Enables or disables the trigger; disabling closes immediately.
    pub fn set_disabled(&mut self, disabled: bool) -> Option<VisibilityChange> {
        self.disabled = disabled;
        if disabled {
            self.set_open(false)
        } else {
            None
        }
    }

    /// Changes the show and hide delays for future transitions.
    pub fn set_delays(&mut self, delay: u64, hide_delay: u64) {
        self.delay = delay;
        self.hide_delay = hide_delay;
    }

    /// Changes the trigger mode, closing if currently shown.
    pub fn set_mode(&mut self, mode: TriggerMode) -> Option<VisibilityChange> {
        if self.mode == mode {
            return None;
        }
        self.mode = mode;
        self.set_open(false)
    }

    fn show(&mut self, now: u64) -> Option<VisibilityChange> {
        match self.phase {
            Phase::Closed if self.delay == 0 => {
                self.transition(Phase::Open);
                Some(VisibilityChange::Opened)
            }
            Phase::Closed => {
                self.timer.arm(now, self.delay, Pending::Show);
                self.transition(Phase::Opening);
                None
            }
            Phase::Closing => {
                self.timer.cancel();
                self.transition(Phase::Open);
                None
            }
            Phase::Opening | Phase::Open => None,
        }
    }

    fn hide(&mut self, now: u64) -> Option<VisibilityChange> {
        match self.phase {
            Phase::Open if self.hide_delay == 0 => {
                self.transition(Phase::Closed);
                Some(VisibilityChange::Closed)
            }
            Phase::Open => {
                self.timer.arm(now, self.hide_delay, Pending::Hide);
                self.transition(Phase::Closing);
                None
            }
            Phase::Opening => {
                self.timer.cancel();
                self.transition(Phase::Closed);
                None
            }
            Phase::Closed | Phase::Closing => None,
        }
    }

    fn dismiss(&mut self) -> Option<VisibilityChange> {
        if self.phase == Phase::Closed {
            None
        } else {
            self.set_open(false)
        }
    }

    fn complete(&mut self, pending: Pending) -> Option<VisibilityChange> {
        match (pending, self.phase) {
            (Pending::Show, Phase::Opening) => {
                self.transition(Phase::Open);
                Some(VisibilityChange::Opened)
            }
            (Pending::Hide, Phase::Closing) => {
                self.transition(Phase::Closed);
                Some(VisibilityChange::Closed)
            }
            _ => None,
        }
    }

    fn transition(&mut self, to: Phase) {
        if self.phase != to {
            tracing::debug!(from = ?self.phase, ?to, "tooltip phase");
            self.phase = to;
        }
    }
}
