// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=loupe_timing --heading-base-level=0

//! Loupe Timing: a single-slot delayed action.
//!
//! [`TimerSlot`] holds at most one pending action. Arming it always cancels
//! whatever was pending before, so a host never has two live timers for the
//! same purpose.
//!
//! The slot does not own a clock or a runtime. Time is passed in explicitly as
//! milliseconds from any monotonic origin the host chooses, which keeps the
//! logic testable with a simulated clock. Hosts integrate in one of two ways:
//!
//! - **Polling**: call [`TimerSlot::poll`] with the current time whenever
//!   convenient; it reports the action as due exactly once.
//! - **Callback**: schedule a host timer for [`TimerSlot::deadline`] and, when
//!   it fires, call [`TimerSlot::fire`] with the [`TimerToken`] returned by
//!   [`TimerSlot::arm`]. Tokens from cancelled or replaced arms are rejected,
//!   so a host timer that could not be cancelled in time does nothing.
//!
//! ## Minimal example
//!
//! ```rust
//! use loupe_timing::TimerSlot;
//!
//! let mut slot = TimerSlot::new();
//! let first = slot.arm(0, 1000);
//!
//! // Re-arming replaces the pending action.
//! let second = slot.arm(500, 1000);
//! assert_eq!(slot.deadline(), Some(1500));
//! assert!(!slot.fire(first));
//!
//! assert!(!slot.poll(1499));
//! assert!(slot.poll(1500));
//! assert!(!slot.is_armed());
//! assert!(!slot.fire(second));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

/// Identifies one arming of a [`TimerSlot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// The action currently waiting in a [`TimerSlot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pending {
    /// Token of the arm that scheduled this action.
    pub token: TimerToken,
    /// Time (ms) at or after which the action is due.
    pub deadline: u64,
}

/// At most one scheduled action, with cancel-before-arm semantics.
#[derive(Clone, Debug, Default)]
pub struct TimerSlot {
    generation: u64,
    pending: Option<Pending>,
}

impl TimerSlot {
    /// Creates an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }

    /// Cancels any pending action and schedules a new one `delay_ms` after `now_ms`.
    pub fn arm(&mut self, now_ms: u64, delay_ms: u64) -> TimerToken {
        self.cancel();
        self.generation = self.generation.wrapping_add(1);
        let token = TimerToken(self.generation);
        self.pending = Some(Pending {
            token,
            deadline: now_ms.saturating_add(delay_ms),
        });
        token
    }

    /// Cancels the pending action. Returns `true` if there was one.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Returns `true` while an action is pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the pending action, if any.
    #[must_use]
    pub fn pending(&self) -> Option<Pending> {
        self.pending
    }

    /// Returns the deadline of the pending action, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.pending.map(|p| p.deadline)
    }

    /// Returns the token of the pending action, if any.
    #[must_use]
    pub fn token(&self) -> Option<TimerToken> {
        self.pending.map(|p| p.token)
    }

    /// Consumes the pending action if it is due at `now_ms`.
    ///
    /// Returns `true` exactly once per arm, on the first poll at or after the
    /// deadline.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.pending {
            Some(p) if now_ms >= p.deadline => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Consumes the pending action if `token` identifies it.
    ///
    /// This is the entry point for host timers: the host does not need to
    /// check the clock, only that the callback belongs to the current arm.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        match self.pending {
            Some(p) if p.token == token => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}
