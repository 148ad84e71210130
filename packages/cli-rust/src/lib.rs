//! sat-upgrade CLI - Satellite and Capsule upgrade helpers
//!
//! This module contains the CLI implementation used by the binary.

mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use sat_upgrade_core::{config, get_version, load_config_from};
use tracing_subscriber::EnvFilter;

/// Helpers for Satellite and Capsule upgrade automation
#[derive(Parser)]
#[command(name = "sat-upgrade")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Helpers for Satellite and Capsule upgrade automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Increase verbosity level
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Use this config file instead of ~/.config/sat-upgrade/config.json
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Reboot a host and wait for it
    Reboot(commands::RebootArgs),
    /// Copy the SSH key of one host to other hosts
    CopySshKey(commands::CopySshKeyArgs),
    /// Wait until a host answers pings
    Ping(commands::PingArgs),
    /// Resolve the hostname of the machine at an IP
    Hostname(commands::HostnameArgs),
    /// Show the installed Satellite/Capsule version of a host
    Version(commands::VersionArgs),
    /// Extract the version from a katello-agent rpm name
    KatelloVersion(commands::KatelloVersionArgs),
    /// List Satellite entities through hammer
    Inventory(commands::InventoryArgs),
    /// Manage the setup state handed between upgrade phases
    Setup(commands::SetupArgs),
    /// Show configuration
    Config(commands::ConfigArgs),
}

/// Initialize tracing, honoring RUST_LOG first, then -v / -q
fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    // Configure color output
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let config_path = match cli.config.clone() {
        Some(path) => path,
        None => config::paths::get_config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?,
    };

    let config = match load_config_from(&config_path) {
        Ok(config) => {
            if cli.verbose > 0 {
                eprintln!(
                    "{} Config loaded from: {}",
                    style("[info]").cyan(),
                    config_path.display()
                );
            }
            config
        }
        Err(e) => {
            // Display rich error for invalid config
            eprintln!("{} Configuration error", style("Error:").red().bold());
            eprintln!();
            eprintln!("  {:#}", e);
            eprintln!();
            eprintln!("  Config file: {}", style(config_path.display()).yellow());
            eprintln!();
            eprintln!(
                "  {} Check the config file for syntax errors or unknown fields.",
                style("Tip:").cyan()
            );
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Reboot(args)) => commands::cmd_reboot(&args, &config, cli.quiet),
        Some(Commands::CopySshKey(args)) => commands::cmd_copy_ssh_key(&args, &config, cli.quiet),
        Some(Commands::Ping(args)) => commands::cmd_ping(&args, &config, cli.quiet),
        Some(Commands::Hostname(args)) => commands::cmd_hostname(&args, &config, cli.quiet),
        Some(Commands::Version(args)) => commands::cmd_version(&args, &config, cli.quiet),
        Some(Commands::KatelloVersion(args)) => commands::cmd_katello_version(&args),
        Some(Commands::Inventory(args)) => commands::cmd_inventory(&args, &config, cli.quiet),
        Some(Commands::Setup(args)) => commands::cmd_setup(&args, cli.quiet),
        Some(Commands::Config(args)) => commands::cmd_config(&args, &config, &config_path),
        None => {
            // No command - show a welcome message and hint to use --help
            if !cli.quiet {
                println!(
                    "{} {}",
                    style("sat-upgrade").cyan().bold(),
                    style(get_version()).dim()
                );
                println!();
                println!("Run {} for available commands.", style("--help").green());
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_copy_ssh_key_targets() {
        let cli = Cli::try_parse_from([
            "sat-upgrade",
            "copy-ssh-key",
            "sat.example.com",
            "cap1.example.com",
            "cap2.example.com",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::CopySshKey(args)) => {
                assert_eq!(args.from_host, "sat.example.com");
                assert_eq!(args.to_hosts.len(), 2);
            }
            _ => panic!("expected copy-ssh-key"),
        }
    }

    #[test]
    fn test_copy_ssh_key_requires_a_target() {
        assert!(Cli::try_parse_from(["sat-upgrade", "copy-ssh-key", "sat.example.com"]).is_err());
    }

    #[test]
    fn test_parses_reboot_halt_time() {
        let cli = Cli::try_parse_from(["sat-upgrade", "reboot", "cap.example.com", "--halt-time", "90s"])
            .unwrap();
        match cli.command {
            Some(Commands::Reboot(args)) => {
                assert_eq!(args.halt_time, Some(std::time::Duration::from_secs(90)));
            }
            _ => panic!("expected reboot"),
        }
    }

    #[test]
    fn test_inventory_subcommand_defaults_to_list() {
        let cli = Cli::try_parse_from(["sat-upgrade", "inventory", "host"]).unwrap();
        match cli.command {
            Some(Commands::Inventory(args)) => assert_eq!(args.subcommand, "list"),
            _ => panic!("expected inventory"),
        }
    }
}
