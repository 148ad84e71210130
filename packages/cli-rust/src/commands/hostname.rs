//! Hostname command implementation
//!
//! Resolves a hostname by logging into the host at an IP.

use anyhow::{Result, bail};
use clap::Args;
use sat_upgrade_core::{Config, SshExecutor, get_hostname_from_ip};

use crate::commands::host_error;
use crate::output::CommandSpinner;

/// Arguments for the hostname command
#[derive(Args)]
pub struct HostnameArgs {
    /// IP address of the host
    pub ip: String,

    /// Minutes to keep trying (default from config)
    #[arg(long)]
    pub timeout: Option<u64>,
}

/// Print the hostname of the machine at an IP
pub fn cmd_hostname(args: &HostnameArgs, config: &Config, quiet: bool) -> Result<()> {
    let executor = SshExecutor::new(config.ssh_settings());
    let timeout = args.timeout.unwrap_or(config.hostname_timeout_minutes);
    let spinner =
        CommandSpinner::new_maybe(&format!("Resolving hostname of {}...", args.ip), quiet);

    match get_hostname_from_ip(&executor, &args.ip, timeout) {
        Ok(Some(hostname)) => {
            spinner.success(&format!("{} is {}", args.ip, hostname));
            println!("{hostname}");
            Ok(())
        }
        Ok(None) => {
            spinner.fail(&format!("Could not resolve {}", args.ip));
            bail!(
                "Timed out after {} minutes getting the hostname of {}",
                timeout,
                args.ip
            );
        }
        Err(e) => {
            spinner.fail(&format!("Could not resolve {}", args.ip));
            Err(host_error(e))
        }
    }
}
