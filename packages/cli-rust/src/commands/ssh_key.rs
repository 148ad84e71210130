//! copy-ssh-key command implementation
//!
//! Copies the SSH public key of one host to others.

use anyhow::Result;
use clap::Args;
use console::style;
use sat_upgrade_core::{Config, SshExecutor, copy_ssh_key};

use crate::commands::host_error;

/// Arguments for the copy-ssh-key command
#[derive(Args)]
pub struct CopySshKeyArgs {
    /// Host whose key is generated (if needed) and copied
    pub from_host: String,

    /// Hosts that receive the key
    #[arg(required = true, num_args = 1..)]
    pub to_hosts: Vec<String>,
}

/// Copy the SSH key of `from_host` to every target host
pub fn cmd_copy_ssh_key(args: &CopySshKeyArgs, config: &Config, quiet: bool) -> Result<()> {
    let executor = SshExecutor::new(config.ssh_settings());

    copy_ssh_key(&executor, &args.from_host, &args.to_hosts).map_err(host_error)?;

    if !quiet {
        println!(
            "{} SSH key of {} propagated to {}",
            style("\u{2713}").green(),
            style(&args.from_host).cyan(),
            args.to_hosts.join(", ")
        );
    }
    Ok(())
}
