// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Timing: host-agnostic timer primitives for UI state machines.
//!
//! Headless state machines often need "do X unless something else happens
//! within N ms": clearing a type-ahead buffer, recognizing a long press,
//! closing a submenu. They cannot own a platform timer, and they must never
//! act on a timer that was superseded. This crate models that as plain data.
//!
//! - [`OneShot`] is a single cancellable deadline. Arming it again replaces
//!   the previous deadline, which is the debounce pattern.
//! - [`TimerToken`] names one particular arming. Hosts that back a `OneShot`
//!   with a real timer hand the token back through [`OneShot::fire`]; tokens
//!   from cancelled or re-armed timers are rejected, so a leaked platform
//!   callback can never fire late.
//!
//! Time is a `u64` count of milliseconds on any monotonic clock the host
//! chooses. The crate never reads a clock itself.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_timing::OneShot;
//!
//! let mut timer = OneShot::new();
//! let first = timer.arm(1_000, 500);
//! assert_eq!(timer.deadline(), Some(1_500));
//!
//! // A new event inside the window restarts the countdown.
//! let second = timer.arm(1_200, 500);
//! assert_eq!(timer.deadline(), Some(1_700));
//!
//! // The superseded platform callback is ignored.
//! assert!(!timer.fire(first));
//! assert!(!timer.poll(1_600));
//! assert!(timer.poll(1_700));
//!
//! // Fired timers are disarmed.
//! assert!(!timer.is_armed());
//! assert!(!timer.fire(second));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

/// Identifies one arming of a [`OneShot`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken {
    generation: u64,
}

/// A cancellable single-shot deadline.
///
/// At most one deadline is pending at a time. Every call to [`OneShot::arm`]
/// or [`OneShot::cancel`] starts a new generation, which invalidates all
/// previously issued [`TimerToken`]s.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OneShot {
    deadline: Option<u64>,
    generation: u64,
}

impl OneShot {
    /// Creates a disarmed timer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            deadline: None,
            generation: 0,
        }
    }

    /// Arms the timer to expire `delay` ms after `now`, replacing any pending deadline.
    pub fn arm(&mut self, now: u64, delay: u64) -> TimerToken {
        self.generation = self.generation.wrapping_add(1);
        self.deadline = Some(now.saturating_add(delay));
        TimerToken {
            generation: self.generation,
        }
    }

    /// Cancels the pending deadline. Returns `true` if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.generation = self.generation.wrapping_add(1);
        self.deadline.take().is_some()
    }

    /// Returns `true` while a deadline is pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// The token of the pending arming, if any.
    #[must_use]
    pub fn token(&self) -> Option<TimerToken> {
        self.deadline.map(|_| TimerToken {
            generation: self.generation,
        })
    }

    /// Returns `true` if a deadline is pending and has been reached at `now`.
    #[must_use]
    pub fn is_due(&self, now: u64) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Fires the timer if it is due at `now`.
    ///
    /// Returns `true` exactly once per arming; the timer is disarmed when it fires.
    pub fn poll(&mut self, now: u64) -> bool {
        if self.is_due(now) {
            self.deadline = None;
            true
        } else {
            false
        }
    }

    /// Fires the timer on behalf of a host callback scheduled for `token`.
    ///
    /// Returns `false` for tokens from a cancelled or superseded arming, and
    /// for timers that already fired.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if self.deadline.is_some() && token.generation == self.generation {
            self.deadline = None;
            true
        } else {
            false
        }
    }
}
