//! Reboot command implementation
//!
//! Reboots a host and blocks for the configured halt time.

use std::time::Duration;

use anyhow::Result;
use clap::Args;
use sat_upgrade_core::{Config, SshExecutor, reboot};

use crate::commands::host_error;
use crate::output::CommandSpinner;

/// Arguments for the reboot command
#[derive(Args)]
pub struct RebootArgs {
    /// Host to reboot
    pub host: String,

    /// Time to wait after issuing the reboot (e.g. "5m", "90s")
    #[arg(long, value_parser = humantime::parse_duration)]
    pub halt_time: Option<Duration>,
}

/// Reboot a host, then wait
pub fn cmd_reboot(args: &RebootArgs, config: &Config, quiet: bool) -> Result<()> {
    let executor = SshExecutor::new(config.ssh_settings());
    let halt_time = args.halt_time.unwrap_or_else(|| config.reboot_halt_time());

    let spinner = CommandSpinner::new_maybe(
        &format!(
            "Rebooting {} and waiting {}...",
            args.host,
            humantime::format_duration(halt_time)
        ),
        quiet,
    );

    match reboot(&executor, &args.host, halt_time) {
        Ok(()) => {
            spinner.success(&format!("Reboot of {} issued", args.host));
            Ok(())
        }
        Err(e) => {
            spinner.fail(&format!("Failed to reboot {}", args.host));
            Err(host_error(e))
        }
    }
}
