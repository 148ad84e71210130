//! Host reachability polling
//!
//! Pings a host from the local machine until it answers or the timeout expires.

use std::process::{Command, Stdio};

use super::poll::PollSettings;

/// Default ping timeout in minutes
pub const DEFAULT_PING_TIMEOUT_MINUTES: u64 = 15;

/// Sends a single ICMP echo request
pub trait Pinger {
    /// Returns true when the host answered
    fn ping(&self, host: &str) -> bool;
}

/// Pinger backed by the system `ping` binary
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPing;

impl Pinger for SystemPing {
    fn ping(&self, host: &str) -> bool {
        let status = Command::new("ping")
            .arg("-c1")
            .arg(host)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) => status.success(),
            Err(e) => {
                tracing::debug!("Failed to run ping: {}", e);
                false
            }
        }
    }
}

impl<F: Fn(&str) -> bool> Pinger for F {
    fn ping(&self, host: &str) -> bool {
        self(host)
    }
}

/// Wait until `host` answers a ping, giving up after `timeout_minutes`
pub fn host_pings(host: &str, timeout_minutes: u64) -> bool {
    host_pings_with(&SystemPing, host, PollSettings::from_minutes(timeout_minutes))
}

/// Wait until `host` answers `pinger`, using explicit poll settings
///
/// The deadline is checked after each echo but before its result is looked
/// at, so an answer arriving once the deadline has passed still counts as a
/// timeout.
pub fn host_pings_with(pinger: &impl Pinger, host: &str, settings: PollSettings) -> bool {
    let deadline = settings.deadline();
    loop {
        let answered = pinger.ping(host);

        if deadline.has_passed() {
            tracing::warn!("The timeout for pinging the host {} has reached!", host);
            return false;
        }
        if answered {
            return true;
        }
        settings.wait();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::time::{Duration, Instant};

    fn fast(timeout_ms: u64) -> PollSettings {
        PollSettings::new(Duration::from_millis(timeout_ms), Duration::from_millis(10))
    }

    #[test]
    fn test_reachable_host_returns_immediately() {
        let start = Instant::now();
        let pinger = |_: &str| true;
        assert!(host_pings_with(&pinger, "sat.example.com", fast(60_000)));
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_unreachable_host_times_out() {
        let start = Instant::now();
        let pinger = |_: &str| false;
        assert!(!host_pings_with(&pinger, "sat.example.com", fast(100)));

        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(100));
        // One retry interval late at most, plus scheduling slack
        assert!(elapsed < Duration::from_millis(100 + 10 + 500));
    }

    #[test]
    fn test_host_coming_up_after_retries() {
        let attempts = Cell::new(0);
        let pinger = |_: &str| {
            attempts.set(attempts.get() + 1);
            attempts.get() >= 3
        };
        assert!(host_pings_with(&pinger, "cap.example.com", fast(5_000)));
        assert_eq!(attempts.get(), 3);
    }

    #[test]
    fn test_huge_timeout_does_not_overflow() {
        let pinger = |_: &str| true;
        assert!(host_pings_with(
            &pinger,
            "sat.example.com",
            PollSettings::from_minutes(u64::MAX)
        ));
    }

    #[test]
    fn test_answer_after_deadline_counts_as_timeout() {
        let pinger = |_: &str| {
            std::thread::sleep(Duration::from_millis(20));
            true
        };
        assert!(!host_pings_with(&pinger, "cap.example.com", fast(5)));
    }
}
