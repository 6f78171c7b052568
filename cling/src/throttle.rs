// Copyright 2026 the Cling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-agnostic coalescing for bursty triggers.
//!
//! Two stages are used in sequence:
//!
//! 1. [`Throttle`] limits work to once per `delay` milliseconds, with a leading
//!    run and at most one trailing run per window.
//! 2. [`FrameGate`] folds every run requested before the next animation frame
//!    into a single frame callback.
//!
//! Neither owns a clock or a timer. Callers pass the current time in and
//! forward the returned deadlines to their host.

use core::mem;

/// Outcome of [`Throttle::trigger`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Run now. `superseded` is set when this run replaces a scheduled
    /// trailing run, whose host timer is now stale.
    Run {
        /// A trailing run was dropped in favor of this one.
        superseded: bool,
    },
    /// A trailing run was scheduled for the given deadline (ms).
    Scheduled(u64),
    /// A trailing run is already scheduled; nothing to do.
    Coalesced,
}

/// Time-based throttle with leading and trailing edges.
///
/// The first trigger runs immediately. Triggers arriving less than `delay`
/// after the last run collapse into one trailing run at `last + delay`,
/// delivered through [`Throttle::poll`].
#[derive(Clone, Debug)]
pub struct Throttle {
    delay: u64,
    last_run: Option<u64>,
    pending: Option<u64>,
}

impl Throttle {
    /// Creates a throttle with the given interval in milliseconds.
    ///
    /// A zero delay never defers.
    #[must_use]
    pub const fn new(delay: u64) -> Self {
        Self {
            delay,
            last_run: None,
            pending: None,
        }
    }

    /// Returns the deadline of the scheduled trailing run, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<u64> {
        self.pending
    }

    /// Records a trigger at `now`.
    pub fn trigger(&mut self, now: u64) -> Trigger {
        match self.last_run {
            Some(last) if now.saturating_sub(last) < self.delay => {
                if self.pending.is_some() {
                    Trigger::Coalesced
                } else {
                    let deadline = last.saturating_add(self.delay);
                    self.pending = Some(deadline);
                    Trigger::Scheduled(deadline)
                }
            }
            _ => {
                self.last_run = Some(now);
                Trigger::Run {
                    superseded: self.pending.take().is_some(),
                }
            }
        }
    }

    /// Returns `true` if the trailing run is due at `now`, consuming it.
    pub fn poll(&mut self, now: u64) -> bool {
        match self.pending {
            Some(deadline) if now >= deadline => {
                self.pending = None;
                self.last_run = Some(now);
                true
            }
            _ => false,
        }
    }

    /// Forgets all state. Returns `true` if a trailing run was dropped.
    pub fn cancel(&mut self) -> bool {
        self.last_run = None;
        self.pending.take().is_some()
    }
}

/// Collapses repeated frame requests into one.
#[derive(Clone, Debug, Default)]
pub struct FrameGate {
    requested: bool,
}

impl FrameGate {
    /// Creates an idle gate.
    #[must_use]
    pub const fn new() -> Self {
        Self { requested: false }
    }

    /// Marks a frame as wanted. Returns `true` if the host must be asked for one.
    pub fn request(&mut self) -> bool {
        !mem::replace(&mut self.requested, true)
    }

    /// Consumes the request on frame delivery. Returns `true` if work is due.
    pub fn take(&mut self) -> bool {
        mem::replace(&mut self.requested, false)
    }

    /// Returns `true` while a frame is outstanding.
    #[must_use]
    pub const fn is_requested(&self) -> bool {
        self.requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUN: Trigger = Trigger::Run { superseded: false };

    #[test]
    fn first_trigger_runs_immediately() {
        let mut throttle = Throttle::new(100);
        assert_eq!(throttle.trigger(1_000), RUN);
        assert_eq!(throttle.pending(), None);
    }

    #[test]
    fn burst_collapses_into_one_trailing_run() {
        let mut throttle = Throttle::new(100);
        assert_eq!(throttle.trigger(1_000), RUN);
        assert_eq!(throttle.trigger(1_010), Trigger::Scheduled(1_100));
        assert_eq!(throttle.trigger(1_050), Trigger::Coalesced);
        assert_eq!(throttle.trigger(1_099), Trigger::Coalesced);

        assert!(!throttle.poll(1_099));
        assert!(throttle.poll(1_100));
        assert!(!throttle.poll(1_101), "trailing run is consumed once");
    }

    #[test]
    fn window_restarts_after_trailing_run() {
        let mut throttle = Throttle::new(100);
        throttle.trigger(0);
        throttle.trigger(10);
        assert!(throttle.poll(100));

        assert_eq!(throttle.trigger(150), Trigger::Scheduled(200));
        assert_eq!(throttle.trigger(300), Trigger::Run { superseded: true });
        assert_eq!(throttle.pending(), None);
    }

    #[test]
    fn late_trigger_supersedes_the_trailing_run() {
        let mut throttle = Throttle::new(100);
        throttle.trigger(0);
        assert_eq!(throttle.trigger(10), Trigger::Scheduled(100));

        // The timer for 100 has not been delivered yet.
        assert_eq!(throttle.trigger(150), Trigger::Run { superseded: true });
        assert_eq!(throttle.pending(), None);
        assert!(!throttle.poll(160));
        assert!(!throttle.cancel());
    }

    #[test]
    fn zero_delay_never_defers() {
        let mut throttle = Throttle::new(0);
        assert_eq!(throttle.trigger(5), RUN);
        assert_eq!(throttle.trigger(5), RUN);
    }

    #[test]
    fn cancel_drops_pending_work() {
        let mut throttle = Throttle::new(100);
        throttle.trigger(0);
        throttle.trigger(1);
        assert!(throttle.cancel());
        assert!(!throttle.poll(1_000));
        assert!(!throttle.cancel());
        assert_eq!(throttle.trigger(2), RUN);
    }

    #[test]
    fn frame_gate_requests_once() {
        let mut gate = FrameGate::new();
        assert!(gate.request());
        assert!(!gate.request());
        assert!(gate.is_requested());
        assert!(gate.take());
        assert!(!gate.take());
        assert!(gate.request());
    }
}
