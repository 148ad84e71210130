//! Config command implementation
//!
//! Displays the active configuration and where it lives.

use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};
use comfy_table::{Cell, Table};
use sat_upgrade_core::Config;

/// Configuration command arguments
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: Option<ConfigSubcommands>,
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Show current configuration
    Show {
        /// Output as JSON instead of table format
        #[arg(long)]
        json: bool,
    },
    /// Print the config file path
    Path,
}

/// Handle config command
///
/// Defaults to Show when no subcommand is given.
pub fn cmd_config(args: &ConfigArgs, config: &Config, config_path: &Path) -> Result<()> {
    match args.command {
        Some(ConfigSubcommands::Show { json }) => cmd_config_show(config, config_path, json),
        Some(ConfigSubcommands::Path) => {
            println!("{}", config_path.display());
            Ok(())
        }
        None => cmd_config_show(config, config_path, false),
    }
}

fn cmd_config_show(config: &Config, config_path: &Path, json: bool) -> Result<()> {
    let masked = masked(config);

    if json {
        println!("{}", serde_json::to_string_pretty(&masked)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Key", "Value"]);
    table.add_row(vec![
        Cell::new("version"),
        Cell::new(masked.version.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("satellite_host"),
        Cell::new(format_optional(&masked.satellite_host)),
    ]);
    table.add_row(vec![Cell::new("ssh_user"), Cell::new(&masked.ssh_user)]);
    table.add_row(vec![
        Cell::new("ssh_port"),
        Cell::new(
            masked
                .ssh_port
                .map(|p| p.to_string())
                .unwrap_or_else(|| "22 (default)".to_string()),
        ),
    ]);
    table.add_row(vec![
        Cell::new("identity_file"),
        Cell::new(format_optional(&masked.identity_file)),
    ]);
    table.add_row(vec![
        Cell::new("jump_host"),
        Cell::new(format_optional(&masked.jump_host)),
    ]);
    table.add_row(vec![
        Cell::new("hammer_username"),
        Cell::new(&masked.hammer_username),
    ]);
    table.add_row(vec![
        Cell::new("hammer_password"),
        Cell::new(&masked.hammer_password),
    ]);
    table.add_row(vec![
        Cell::new("reboot_halt_secs"),
        Cell::new(masked.reboot_halt_secs.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("ping_timeout_minutes"),
        Cell::new(masked.ping_timeout_minutes.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("hostname_timeout_minutes"),
        Cell::new(masked.hostname_timeout_minutes.to_string()),
    ]);

    println!("{table}");
    println!();
    println!("Config file: {}", config_path.display());

    Ok(())
}

/// Copy of the config with the hammer password hidden
fn masked(config: &Config) -> Config {
    Config {
        hammer_password: "********".to_string(),
        ..config.clone()
    }
}

/// Format an optional string for display
fn format_optional(value: &Option<String>) -> String {
    match value {
        Some(s) if !s.is_empty() => s.clone(),
        _ => "(not set)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_hides_password_only() {
        let config = Config {
            satellite_host: Some("sat.example.com".to_string()),
            hammer_password: "secret".to_string(),
            ..Config::default()
        };
        let masked = masked(&config);
        assert_eq!(masked.hammer_password, "********");
        assert_eq!(masked.satellite_host, config.satellite_host);
    }

    #[test]
    fn test_format_optional_handles_empty() {
        assert_eq!(format_optional(&None), "(not set)");
        assert_eq!(format_optional(&Some(String::new())), "(not set)");
        assert_eq!(format_optional(&Some("x".to_string())), "x");
    }
}
