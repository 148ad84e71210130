//! Hostname lookup by logging into a host
//!
//! For machines without reverse DNS, the hostname is read by running
//! `hostname` on the box itself.

use super::error::HostError;
use super::poll::PollSettings;
use super::remote::{RemoteExecutor, RunOptions};

/// Default hostname lookup timeout in minutes
pub const DEFAULT_HOSTNAME_TIMEOUT_MINUTES: u64 = 3;

/// Resolve the hostname of the machine at `ip`, retrying for `timeout_minutes`
///
/// Returns `Ok(None)` when the timeout expires. Transient SSH failures are
/// retried; any other failure is returned.
pub fn get_hostname_from_ip(
    executor: &impl RemoteExecutor,
    ip: &str,
    timeout_minutes: u64,
) -> Result<Option<String>, HostError> {
    get_hostname_from_ip_with(executor, ip, PollSettings::from_minutes(timeout_minutes))
}

/// Resolve the hostname of the machine at `ip` with explicit poll settings
pub fn get_hostname_from_ip_with(
    executor: &impl RemoteExecutor,
    ip: &str,
    settings: PollSettings,
) -> Result<Option<String>, HostError> {
    let deadline = settings.deadline();
    loop {
        if deadline.has_passed() {
            tracing::warn!("The timeout for getting the Hostname from IP has reached!");
            return Ok(None);
        }

        match executor.run(ip, "hostname", RunOptions::default()) {
            Ok(output) => {
                let hostname = output.trim().to_string();
                tracing::info!("Hostname determined as: {}", hostname);
                return Ok(Some(hostname));
            }
            Err(e) if e.is_transient() => {
                tracing::debug!("Hostname lookup on {} failed, retrying: {}", ip, e);
                settings.wait();
            }
            Err(e) => return Err(e),
        }
    }
}
