//! Trailing-edge debouncer for search input.
//!
//! The debouncer owns the pending value and a generation counter. Every
//! [`Debouncer::schedule`] supersedes the previous value and returns a
//! [`TimerTicket`] that the runtime arms as a one-shot timer. When a timer
//! fires, only the ticket of the latest schedule can settle the value; older
//! tickets and tickets issued before [`Debouncer::cancel`] are ignored.
//!
//! Zellij timers cannot be cancelled and `Event::Timer` does not say which
//! timer fired. Armed tickets are therefore also queued in schedule order, and
//! [`Debouncer::elapsed`] consumes the oldest one. With a fixed delay, timers
//! fire in the order they were armed, so the queue front is always the timer
//! that just elapsed.
//!
//! # Example
//!
//! ```rust
//! use customer_pane::query::{Debouncer, DEFAULT_QUIET_PERIOD};
//!
//! let mut debouncer = Debouncer::new();
//! for text in ["an", "ann", "anna"] {
//!     debouncer.schedule(text, DEFAULT_QUIET_PERIOD);
//! }
//!
//! // Three timers expire; only the last one settles a value.
//! assert_eq!(debouncer.elapsed(), None);
//! assert_eq!(debouncer.elapsed(), None);
//! assert_eq!(debouncer.elapsed(), Some("anna"));
//! ```

use std::collections::VecDeque;
use std::time::Duration;

/// Default quiet period before a search term settles.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(300);

/// Handle for one armed timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTicket {
    /// Schedule this ticket belongs to.
    pub generation: u64,
    /// How long the host timer must wait.
    pub delay: Duration,
}

/// Coalesces bursts of values into the last one after a quiet period.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    generation: u64,
    pending: Option<(u64, T)>,
    armed: VecDeque<u64>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            pending: None,
            armed: VecDeque::new(),
        }
    }
}

impl<T> Debouncer<T> {
    /// Creates a debouncer with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any pending value with `value` and restarts the quiet period.
    ///
    /// The caller must arm a timer for the returned ticket's delay.
    pub fn schedule(&mut self, value: T, delay: Duration) -> TimerTicket {
        self.generation += 1;
        self.pending = Some((self.generation, value));
        self.armed.push_back(self.generation);
        TimerTicket {
            generation: self.generation,
            delay,
        }
    }

    /// Drops the pending value. Timers already armed will settle nothing.
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            tracing::debug!(generation = self.generation, "pending debounce cancelled");
        }
        self.generation += 1;
    }

    /// Settles the pending value if `ticket` belongs to the latest schedule.
    pub fn fire(&mut self, ticket: TimerTicket) -> Option<T> {
        self.armed.retain(|generation| *generation != ticket.generation);
        self.settle(ticket.generation)
    }

    /// Handles an anonymous timer expiry by consuming the oldest armed ticket.
    pub fn elapsed(&mut self) -> Option<T> {
        let generation = self.armed.pop_front()?;
        self.settle(generation)
    }

    /// Whether a value is waiting for its quiet period to end.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn settle(&mut self, generation: u64) -> Option<T> {
        match self.pending.take() {
            Some((pending_generation, value)) if pending_generation == generation => Some(value),
            other => {
                self.pending = other;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_latest_ticket_settles() {
        let mut debouncer = Debouncer::new();
        let first = debouncer.schedule("an", DEFAULT_QUIET_PERIOD);
        let second = debouncer.schedule("ann", DEFAULT_QUIET_PERIOD);

        assert_eq!(debouncer.fire(first), None);
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.fire(second), Some("ann"));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn elapsed_settles_on_the_last_of_a_burst() {
        let mut debouncer = Debouncer::new();
        for value in ["an", "ann", "anna"] {
            debouncer.schedule(value, DEFAULT_QUIET_PERIOD);
        }

        let settled: Vec<_> = (0..3).filter_map(|_| debouncer.elapsed()).collect();

        assert_eq!(settled, vec!["anna"]);
        assert_eq!(debouncer.elapsed(), None);
    }

    #[test]
    fn cancel_suppresses_armed_timers() {
        let mut debouncer = Debouncer::new();
        let ticket = debouncer.schedule("anna", DEFAULT_QUIET_PERIOD);

        debouncer.cancel();

        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.fire(ticket), None);
        assert_eq!(debouncer.elapsed(), None);
    }

    #[test]
    fn schedule_after_cancel_works_again() {
        let mut debouncer = Debouncer::new();
        debouncer.schedule("old", DEFAULT_QUIET_PERIOD);
        debouncer.cancel();
        debouncer.schedule("new", DEFAULT_QUIET_PERIOD);

        assert_eq!(debouncer.elapsed(), None);
        assert_eq!(debouncer.elapsed(), Some("new"));
    }

    #[test]
    fn ticket_carries_requested_delay() {
        let mut debouncer = Debouncer::new();
        let ticket = debouncer.schedule(1, Duration::from_millis(120));

        assert_eq!(ticket.delay, Duration::from_millis(120));
        assert_eq!(ticket.generation, 1);
    }

    #[test]
    fn stray_timer_without_schedule_is_harmless() {
        let mut debouncer: Debouncer<String> = Debouncer::new();
        assert_eq!(debouncer.elapsed(), None);
    }
}
