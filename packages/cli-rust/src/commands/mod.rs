//! CLI command implementations
//!
//! One module per helper exposed on the command line.

mod config;
mod hostname;
mod inventory;
mod ping;
mod reboot;
mod setup;
mod ssh_key;
mod version;

use sat_upgrade_core::HostError;

use crate::output::format_host_error;

pub use config::{ConfigArgs, cmd_config};
pub use hostname::{HostnameArgs, cmd_hostname};
pub use inventory::{InventoryArgs, cmd_inventory};
pub use ping::{PingArgs, cmd_ping};
pub use reboot::{RebootArgs, cmd_reboot};
pub use setup::{SetupArgs, cmd_setup};
pub use ssh_key::{CopySshKeyArgs, cmd_copy_ssh_key};
pub use version::{KatelloVersionArgs, VersionArgs, cmd_katello_version, cmd_version};

/// Wrap a host error with troubleshooting hints
pub(crate) fn host_error(e: HostError) -> anyhow::Error {
    anyhow::anyhow!(format_host_error(&e))
}
