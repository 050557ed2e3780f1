//! Polling policy for the viewer's sync loops.
//!
//! SYSTEM CONTEXT
//! ==============
//! The real requirement is "keep checking until the backend reports
//! completion", made explicit as a policy object: a fixed base cadence,
//! exponential backoff while the backend keeps failing, and an attempt
//! budget whose exhaustion surfaces as a distinct gave-up state instead
//! of polling forever.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use std::time::Duration;

/// Backoff shift cap; beyond this the delay is pinned by `max_interval`
/// anyway and larger shifts would overflow.
const MAX_BACKOFF_SHIFT: u32 = 6;

/// Re-poll cadence and retry budget for one sync loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollPolicy {
    /// Delay between polls while the backend is healthy.
    pub interval: Duration,
    /// Ceiling for the backed-off delay.
    pub max_interval: Duration,
    /// Total fetch attempts before the loop gives up; `None` polls for the
    /// lifetime of the view.
    pub max_attempts: Option<u32>,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(5),
            max_interval: Duration::from_secs(40),
            max_attempts: Some(240),
        }
    }
}

impl PollPolicy {
    /// Delay before the next poll, doubling per consecutive failure and
    /// capped at `max_interval`. A success resets the streak to zero.
    #[must_use]
    pub fn delay_for(&self, consecutive_failures: u32) -> Duration {
        let shift = consecutive_failures.min(MAX_BACKOFF_SHIFT);
        let delay = self.interval.saturating_mul(1 << shift);
        delay.min(self.max_interval)
    }

    /// Whether the attempt budget is exhausted after `attempts` fetches.
    #[must_use]
    pub fn gave_up(&self, attempts: u32) -> bool {
        self.max_attempts.is_some_and(|max| attempts >= max)
    }
}
