// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_timing --heading-base-level=0

//! Understory Timing: host-agnostic cancellable timers for UI state machines.
//!
//! UI interactions such as delayed tooltips, long-press, or debounced
//! positioning need "do this in N milliseconds unless something else
//! happens first". This crate provides the bookkeeping for that without
//! owning a clock or an event loop:
//!
//! - Time is a caller-supplied monotonic millisecond count (`u64`).
//! - A [`Timer`] is a single owned one-shot slot holding a payload.
//!   Arming it replaces (and thereby cancels) whatever was pending.
//! - Every arm returns a fresh [`TimerId`]. Hosts that schedule their own
//!   callbacks (for example with `setTimeout` or a platform timer) pass that
//!   id back to [`Timer::fire`]; a callback for a superseded or cancelled arm
//!   is a no-op, so cancellation is always effective before the timer matures.
//! - Hosts that run a frame loop call [`Timer::poll`] instead.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_timing::Timer;
//!
//! let mut timer = Timer::new();
//!
//! let stale = timer.arm(0, 100, "show");
//! // Something happened before the deadline: re-arm for a different action.
//! let current = timer.arm(40, 50, "hide");
//!
//! // The host's callback for the first arm fires late; it is ignored.
//! assert_eq!(timer.fire(stale, 100), None);
//! // Too early for the second arm.
//! assert_eq!(timer.poll(80), None);
//! assert_eq!(timer.fire(current, 90), Some("hide"));
//! assert!(!timer.is_armed());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use core::fmt;

/// Identifies one arming of a [`Timer`].
///
/// Ids are never reused by the timer that issued them.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl fmt::Debug for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TimerId").field(&self.0).finish()
    }
}

#[derive(Clone, Debug)]
struct Pending<E> {
    id: TimerId,
    deadline: u64,
    payload: E,
}

/// A single cancellable one-shot timer carrying a payload of type `E`.
///
/// Each state machine instance owns its own `Timer`; nothing is shared
/// between instances.
#[derive(Clone, Debug)]
pub struct Timer<E> {
    generation: u64,
    pending: Option<Pending<E>>,
}

impl<E> Default for Timer<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Timer<E> {
    /// Creates a disarmed timer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }

    /// Arms the timer to deliver `payload` once `delay` ms have passed since `now`.
    ///
    /// Any pending payload is dropped.
    pub fn arm(&mut self, now: u64, delay: u64, payload: E) -> TimerId {
        self.generation = self.generation.wrapping_add(1);
        let id = TimerId(self.generation);
        let deadline = now.saturating_add(delay);
        if self.pending.is_some() {
            tracing::trace!(?id, deadline, "re-armed timer, previous arm cancelled");
        }
        self.pending = Some(Pending {
            id,
            deadline,
            payload,
        });
        id
    }

    /// Disarms the timer, returning the payload that will no longer be delivered.
    pub fn cancel(&mut self) -> Option<E> {
        self.pending.take().map(|pending| pending.payload)
    }

    /// Returns `true` while a payload is pending.
    #[must_use]
    #[inline]
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Id of the pending arm, if any.
    #[must_use]
    pub fn current(&self) -> Option<TimerId> {
        self.pending.as_ref().map(|pending| pending.id)
    }

    /// Deadline of the pending arm, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    /// Milliseconds left before the pending arm matures, if any.
    #[must_use]
    pub fn remaining(&self, now: u64) -> Option<u64> {
        self.deadline().map(|deadline| deadline.saturating_sub(now))
    }

    /// The pending payload, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&E> {
        self.pending.as_ref().map(|pending| &pending.payload)
    }

    /// Delivers the pending payload if its deadline has passed.
    pub fn poll(&mut self, now: u64) -> Option<E> {
        if self.deadline().is_some_and(|deadline| deadline <= now) {
            self.cancel()
        } else {
            None
        }
    }

    /// Delivers the pending payload for a host-scheduled callback.
    ///
    /// Returns `None` if `id` is not the current arm (it was cancelled or
    /// superseded) or if its deadline has not been reached.
    pub fn fire(&mut self, id: TimerId, now: u64) -> Option<E> {
        if self.current() == Some(id) {
            self.poll(now)
        } else {
            tracing::trace!(?id, "ignored stale timer callback");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_timer_is_disarmed() {
        let mut timer: Timer<u8> = Timer::new();
        assert!(!timer.is_armed());
        assert_eq!(timer.deadline(), None);
        assert_eq!(timer.poll(u64::MAX), None);
    }

    #[test]
    fn poll_waits_for_deadline() {
        let mut timer = Timer::new();
        timer.arm(10, 5, 'x');
        assert_eq!(timer.deadline(), Some(15));
        assert_eq!(timer.remaining(12), Some(3));
        assert_eq!(timer.poll(14), None);
        assert_eq!(timer.poll(15), Some('x'));
        assert_eq!(timer.poll(16), None);
    }

    #[test]
    fn zero_delay_matures_immediately() {
        let mut timer = Timer::new();
        timer.arm(7, 0, ());
        assert_eq!(timer.poll(7), Some(()));
    }

    #[test]
    fn cancel_prevents_delivery() {
        let mut timer = Timer::new();
        let id = timer.arm(0, 10, 1);
        assert_eq!(timer.cancel(), Some(1));
        assert_eq!(timer.fire(id, 100), None);
        assert_eq!(timer.poll(100), None);
    }

    #[test]
    fn rearm_supersedes_previous_id() {
        let mut timer = Timer::new();
        let first = timer.arm(0, 10, "a");
        let second = timer.arm(5, 10, "b");
        assert_ne!(first, second);
        assert_eq!(timer.current(), Some(second));
        assert_eq!(timer.pending(), Some(&"b"));
        assert_eq!(timer.fire(first, 20), None);
        assert!(timer.is_armed());
        assert_eq!(timer.fire(second, 14), None);
        assert_eq!(timer.fire(second, 15), Some("b"));
    }

    #[test]
    fn deadline_saturates() {
        let mut timer = Timer::new();
        timer.arm(u64::MAX - 1, 10, ());
        assert_eq!(timer.deadline(), Some(u64::MAX));
    }
}
