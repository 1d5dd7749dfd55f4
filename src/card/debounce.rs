//! Collapse bursts of refresh triggers into one refresh after a quiet interval.

use std::time::Duration;

use tokio::time::Instant;

/// Quiet interval before a triggered refresh runs.
pub const REFRESH_DEBOUNCE: Duration = Duration::from_millis(200);

/// A restartable one-shot deadline.
#[derive(Debug, Clone)]
pub struct Debouncer {
    interval: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    /// (Re)start the quiet interval from `now`.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    /// Consume the deadline if it has passed. Returns `true` at most once per trigger.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(REFRESH_DEBOUNCE)
    }
}
