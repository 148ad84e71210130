//! Inventory command implementation
//!
//! Lists Satellite entities through hammer CSV output.

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use clap::Args;
use comfy_table::{Cell, Color, Table};
use console::style;
use sat_upgrade_core::hammer::EntityRow;
use sat_upgrade_core::{Config, HammerError, SshExecutor, csv_reader};

use crate::commands::host_error;

/// Arguments for the inventory command
#[derive(Args)]
pub struct InventoryArgs {
    /// Satellite component, e.g. host, capsule, organization
    pub component: String,

    /// Subcommand for the component, e.g. list, info
    #[arg(default_value = "list")]
    pub subcommand: String,

    /// Satellite host to query (overrides the config)
    #[arg(long)]
    pub satellite_host: Option<String>,

    /// Output as JSON instead of table format
    #[arg(long)]
    pub json: bool,
}

/// Query hammer and print the parsed entities
pub fn cmd_inventory(args: &InventoryArgs, config: &Config, quiet: bool) -> Result<()> {
    let executor = SshExecutor::new(config.ssh_settings());
    let session = config.hammer_session(args.satellite_host.as_deref())?;

    let listing = match csv_reader(&executor, &session, &args.component, &args.subcommand) {
        Ok(listing) => listing,
        Err(HammerError::Remote(e)) => return Err(host_error(e)),
        Err(e) => return Err(e).context("Failed to read hammer output"),
    };

    if args.json || quiet {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    let rows = listing
        .get(&args.component)
        .map(Vec::as_slice)
        .unwrap_or_default();

    if rows.is_empty() {
        println!("{}", style(format!("No {} entities found", args.component)).dim());
        return Ok(());
    }

    println!("{}", build_table(rows));
    println!();
    println!(
        "  {} {}",
        style("Satellite:").dim(),
        style(session.satellite_host()).cyan()
    );
    Ok(())
}

/// Table with one column per field seen in any row
fn build_table(rows: &[EntityRow]) -> Table {
    let columns: BTreeSet<&str> = rows
        .iter()
        .flat_map(|row| row.keys().map(String::as_str))
        .collect();

    let mut table = Table::new();
    table.set_header(columns.iter().map(|c| Cell::new(c).fg(Color::Cyan)));

    for row in rows {
        table.add_row(
            columns
                .iter()
                .map(|c| Cell::new(row.get(*c).map(String::as_str).unwrap_or("-"))),
        );
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_union_of_columns() {
        let mut first = EntityRow::new();
        first.insert("name".to_string(), "host1.ab.com".to_string());
        first.insert("id".to_string(), "10".to_string());
        let mut second = EntityRow::new();
        second.insert("name".to_string(), "host2.xz.com".to_string());
        second.insert("ip".to_string(), "192.168.0.1".to_string());

        let rendered = build_table(&[first, second]).to_string();
        assert!(rendered.contains("ip"));
        assert!(rendered.contains("192.168.0.1"));
        assert!(rendered.contains("host1.ab.com"));
    }
}
