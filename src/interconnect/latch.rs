//! One-bit no-match error latch.
//!
//! # State Transitions
//! ```text
//! every clock edge:
//!     next = cycle_active && !any_route_matched
//! ```
//!
//! The output always reflects the previous tick's inputs, never the current
//! ones. External watchdogs are tuned to this one-tick skew.

/// Registered "previous tick had an active, unmatched transaction" bit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoMatchLatch {
    asserted: bool,
}

impl NoMatchLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current output.
    pub fn get(&self) -> bool {
        self.asserted
    }

    /// Clock edge: sample this tick's cycle-active and match result.
    pub fn clock(&mut self, cycle_active: bool, any_match: bool) {
        self.asserted = cycle_active && !any_match;
    }

    pub fn reset(&mut self) {
        self.asserted = false;
    }
}
