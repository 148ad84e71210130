//! Version detection commands
//!
//! `version` reads the installed Satellite/Capsule version from a host,
//! `katello-version` filters the version out of a katello-agent rpm name.

use anyhow::{Result, bail};
use clap::Args;
use console::style;
use sat_upgrade_core::{
    Config, ProductError, SshExecutor, get_sat_cap_version, katello_agent_version_filter,
};

use crate::commands::host_error;

/// Arguments for the version command
#[derive(Args)]
pub struct VersionArgs {
    /// Host to inspect
    pub host: String,

    /// Product name, anything containing "sat" or "cap"
    pub product: String,

    /// Also print the raw command output
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for the katello-version command
#[derive(Args)]
pub struct KatelloVersionArgs {
    /// katello-agent rpm name, e.g. katello-agent-2.9.0-1.el7.noarch
    pub rpm_name: String,
}

/// Print the installed product version of a host
pub fn cmd_version(args: &VersionArgs, config: &Config, quiet: bool) -> Result<()> {
    let executor = SshExecutor::new(config.ssh_settings());

    let installed = match get_sat_cap_version(&executor, &args.host, &args.product) {
        Ok(installed) => installed,
        Err(ProductError::Host(e)) => return Err(host_error(e)),
        Err(e) => return Err(e.into()),
    };

    let Some(installed) = installed else {
        bail!("Unable to detect installed version on {}", args.host);
    };

    if quiet {
        println!("{}", installed.version);
    } else {
        println!(
            "  {:<10} {}",
            style("Version:").dim(),
            style(&installed.version).green().bold()
        );
    }
    if args.raw {
        println!("{}", installed.raw_output.trim_end());
    }
    Ok(())
}

/// Print the version part of a katello-agent rpm name
pub fn cmd_katello_version(args: &KatelloVersionArgs) -> Result<()> {
    match katello_agent_version_filter(&args.rpm_name) {
        Some(version) => {
            println!("{version}");
            Ok(())
        }
        None => bail!("No version found in '{}'", args.rpm_name),
    }
}
