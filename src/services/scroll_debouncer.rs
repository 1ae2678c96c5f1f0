//! Trailing-edge debouncer for scroll reporting.
//!
//! Continuous scrolling produces a flood of events; only the last offset of
//! each quiet period is worth a message. Every recorded event cancels and
//! reschedules the deadline, so a report fires only once no event has
//! arrived for a full delay window.
//!
//! Time is injected by the caller. The embedding layer owns the actual
//! timer: it sleeps until [`ScrollDebouncer::deadline`] and then calls
//! [`ScrollDebouncer::fire`], keeping this type deterministic and directly
//! testable.

use std::time::{Duration, Instant};

/// Default quiet period before a scroll offset is reported.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// Trailing-edge debouncer holding at most one pending offset.
#[derive(Debug)]
pub struct ScrollDebouncer {
    delay: Duration,
    pending: Option<u32>,
    deadline: Option<Instant>,
}

impl ScrollDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            deadline: None,
        }
    }

    /// Records a scroll event, overwriting any pending offset and pushing
    /// the deadline out by a full delay window (cancel-and-reschedule).
    pub fn record(&mut self, offset_y: u32, now: Instant) {
        self.pending = Some(offset_y);
        self.deadline = Some(now + self.delay);
    }

    /// The instant at which the pending offset becomes reportable, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Takes the pending offset if the quiet period has elapsed.
    pub fn fire(&mut self, now: Instant) -> Option<u32> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.pending.take()
            }
            _ => None,
        }
    }
}

impl Default for ScrollDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
