//! sat-upgrade-core - Helpers for Satellite and Capsule upgrade automation
//!
//! Reboots and polls remote hosts, propagates SSH keys, detects installed
//! product versions, parses hammer CSV reports and persists setup state
//! between the phases of an upgrade run.

pub mod config;
pub mod hammer;
pub mod host;
pub mod product;
pub mod setup_state;
pub mod version;

// Re-export commonly used types
pub use config::{Config, load_config, load_config_from, save_config, save_config_to};
pub use hammer::{EntityListing, HammerError, HammerSession, csv_reader};
pub use host::{
    HostError, PollSettings, RemoteExecutor, RunOptions, SshExecutor, SshSettings, copy_ssh_key,
    get_hostname_from_ip, host_pings, reboot,
};
pub use product::{
    InstalledVersion, Product, ProductError, get_sat_cap_version, katello_agent_version_filter,
};
pub use setup_state::{SetupData, SetupStateError, create_setup_dict, get_setup_data};
pub use version::get_version;
