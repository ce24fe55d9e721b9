//! The per-session countdown timer.
//!
//! The timer is a passive countdown: the host feeds it one [`tick`] per
//! elapsed second, so the engine stays deterministic and single-threaded.
//! Remaining time is read directly off the timer's interface; it is never
//! probed through a side channel.
//!
//! [`tick`]: CountdownTimer::tick

use serde::{Deserialize, Serialize};

/// Default time budget for the answering phase, in seconds.
pub const DEFAULT_BUDGET: u32 = 300;

/// The "stopped" event emitted when the countdown stops being active.
///
/// Carries the remaining time at the moment of stopping: 0 on expiry, else
/// the actual remaining value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerStop {
    /// Seconds left on the budget.
    pub remaining: u32,
    /// Whether the stop was a forced expiry (remaining reached zero).
    pub expired: bool,
}

/// A countdown over a fixed time budget.
///
/// One continuous budget covers consecutive answerable slides: [`resume`]
/// reactivates the countdown without refilling it. Only [`reset`] restores
/// the full budget.
///
/// [`resume`]: CountdownTimer::resume
/// [`reset`]: CountdownTimer::reset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownTimer {
    budget: u32,
    remaining: u32,
    active: bool,
}

impl CountdownTimer {
    /// Create an inactive timer with the given budget.
    pub fn new(budget: u32) -> Self {
        Self {
            budget,
            remaining: budget,
            active: false,
        }
    }

    /// The full budget, in seconds.
    pub fn budget(&self) -> u32 {
        self.budget
    }

    /// Seconds left on the budget.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Seconds consumed so far.
    pub fn elapsed(&self) -> u32 {
        self.budget - self.remaining
    }

    /// Whether the countdown is currently running.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Activate the countdown, keeping the current remaining time.
    pub fn resume(&mut self) {
        if self.remaining > 0 {
            self.active = true;
        }
    }

    /// Advance the countdown by one second.
    ///
    /// Returns the stop event on expiry; `None` otherwise. Ticks while
    /// inactive are ignored.
    pub fn tick(&mut self) -> Option<TimerStop> {
        if !self.active {
            return None;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            self.active = false;
            return Some(TimerStop {
                remaining: 0,
                expired: true,
            });
        }
        None
    }

    /// Deactivate the countdown.
    ///
    /// Emits the stop event only if the timer was actually running, so a
    /// stop is reported at most once per active period.
    pub fn stop(&mut self) -> Option<TimerStop> {
        if !self.active {
            return None;
        }
        self.active = false;
        Some(TimerStop {
            remaining: self.remaining,
            expired: false,
        })
    }

    /// Restore the full budget and deactivate.
    pub fn reset(&mut self) {
        self.remaining = self.budget;
        self.active = false;
    }
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new(DEFAULT_BUDGET)
    }
}
