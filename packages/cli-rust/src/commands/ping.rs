//! Ping command implementation
//!
//! Waits until a host answers ICMP echo requests.

use anyhow::{Result, bail};
use clap::Args;
use sat_upgrade_core::{Config, host_pings};

use crate::output::CommandSpinner;

/// Arguments for the ping command
#[derive(Args)]
pub struct PingArgs {
    /// IP or hostname to wait for
    pub host: String,

    /// Minutes to keep trying (default from config)
    #[arg(long)]
    pub timeout: Option<u64>,
}

/// Wait for a host to answer pings
pub fn cmd_ping(args: &PingArgs, config: &Config, quiet: bool) -> Result<()> {
    let timeout = args.timeout.unwrap_or(config.ping_timeout_minutes);
    let spinner = CommandSpinner::new_maybe(
        &format!("Waiting for {} to answer pings...", args.host),
        quiet,
    );

    if host_pings(&args.host, timeout) {
        spinner.success(&format!("{} is reachable", args.host));
        Ok(())
    } else {
        spinner.fail(&format!("{} is not reachable", args.host));
        bail!("{} did not answer within {} minutes", args.host, timeout);
    }
}
