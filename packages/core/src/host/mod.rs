//! Remote host helpers
//!
//! Provides the host-level operations used while upgrading Satellite and Capsule:
//! - Remote command execution over SSH
//! - Reboot and wait
//! - SSH key propagation between hosts
//! - Reachability and hostname polling

mod error;
mod hostname;
mod keys;
pub mod poll;
mod reachability;
mod reboot;
pub mod remote;
mod schema;

#[cfg(test)]
pub(crate) mod testing;

// Public exports
pub use error::HostError;
pub use hostname::{DEFAULT_HOSTNAME_TIMEOUT_MINUTES, get_hostname_from_ip, get_hostname_from_ip_with};
pub use keys::copy_ssh_key;
pub use poll::PollSettings;
pub use reachability::{DEFAULT_PING_TIMEOUT_MINUTES, Pinger, SystemPing, host_pings, host_pings_with};
pub use reboot::{DEFAULT_REBOOT_HALT_TIME, reboot};
pub use remote::{RemoteExecutor, RunOptions, SshExecutor};
pub use schema::SshSettings;
