//! Reboot a host and wait for it
//!
//! The connection usually drops while `reboot` runs, so transport errors are
//! expected here and ignored.

use std::time::Duration;

use super::error::HostError;
use super::remote::{RemoteExecutor, RunOptions};

/// Time to block after issuing the reboot
pub const DEFAULT_REBOOT_HALT_TIME: Duration = Duration::from_secs(300);

/// Reboot `host`, then halt the calling thread for `halt_time`
///
/// Does not check that the host came back; poll with
/// [`host_pings`](super::host_pings) for that.
pub fn reboot(
    executor: &impl RemoteExecutor,
    host: &str,
    halt_time: Duration,
) -> Result<(), HostError> {
    tracing::info!("Rebooting the host, please wait .... ");

    match executor.run(host, "reboot", RunOptions::warn_only()) {
        Ok(_) => {}
        Err(e) if e.is_transient() => {
            tracing::debug!("Ignoring reboot error on {}: {}", host, e);
        }
        Err(e) => return Err(e),
    }

    std::thread::sleep(halt_time);
    Ok(())
}
