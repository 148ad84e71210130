//! Fixed-interval polling support
//!
//! Deadline and interval settings shared by the reachability and hostname pollers.

use std::time::{Duration, Instant};

/// Interval between polling attempts
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(5);

/// Timeout and retry interval for a polling loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSettings {
    /// Total time to keep polling
    pub timeout: Duration,
    /// Sleep between failed attempts
    pub interval: Duration,
}

impl PollSettings {
    pub fn new(timeout: Duration, interval: Duration) -> Self {
        Self { timeout, interval }
    }

    /// Timeout given in whole minutes, retrying every 5 seconds
    pub fn from_minutes(minutes: u64) -> Self {
        Self::new(
            Duration::from_secs(minutes.saturating_mul(60)),
            DEFAULT_RETRY_INTERVAL,
        )
    }

    pub(crate) fn deadline(&self) -> Deadline {
        Deadline {
            at: Instant::now().checked_add(self.timeout),
        }
    }

    pub(crate) fn wait(&self) {
        std::thread::sleep(self.interval);
    }
}

/// A point in time after which polling gives up
///
/// `None` when the timeout is too large to represent; such a deadline never passes.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Deadline {
    at: Option<Instant>,
}

impl Deadline {
    pub(crate) fn has_passed(&self) -> bool {
        self.at.is_some_and(|at| Instant::now() > at)
    }
}
