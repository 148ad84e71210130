//! Setup state commands
//!
//! Save, show and clear the `product_setup` hand-off file.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Subcommand};
use console::style;
use sat_upgrade_core::setup_state::{
    SETUP_STATE_FILE, SetupData, clear_setup_data_at, create_setup_dict_at, get_setup_data_at,
};

/// Arguments for the setup command
#[derive(Args)]
pub struct SetupArgs {
    /// Setup state file (default: ./product_setup)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: SetupSubcommands,
}

/// Setup state subcommands
#[derive(Subcommand)]
pub enum SetupSubcommands {
    /// Save a JSON object as the setup state ("-" reads stdin)
    Save {
        /// JSON file holding a single object
        input: PathBuf,
    },
    /// Print the saved setup state
    Show {
        /// Print only this key
        key: Option<String>,
    },
    /// Remove the saved setup state
    Clear,
}

/// Handle setup command
pub fn cmd_setup(args: &SetupArgs, quiet: bool) -> Result<()> {
    let path = args
        .file
        .clone()
        .unwrap_or_else(|| PathBuf::from(SETUP_STATE_FILE));

    match &args.command {
        SetupSubcommands::Save { input } => {
            let data = read_setup_input(input)?;
            create_setup_dict_at(&path, &data)?;
            if !quiet {
                println!(
                    "{} Saved {} setup entries to {}",
                    style("\u{2713}").green(),
                    data.len(),
                    style(path.display()).cyan()
                );
            }
            Ok(())
        }
        SetupSubcommands::Show { key } => {
            let data = get_setup_data_at(&path)?;
            match key {
                Some(key) => {
                    let value = data
                        .get(key)
                        .ok_or_else(|| anyhow::anyhow!("Key '{}' not found in setup state", key))?;
                    println!("{}", serde_json::to_string_pretty(value)?);
                }
                None => println!("{}", serde_json::to_string_pretty(&data)?),
            }
            Ok(())
        }
        SetupSubcommands::Clear => {
            let removed = clear_setup_data_at(&path)?;
            if !quiet {
                if removed {
                    println!("Removed {}", path.display());
                } else {
                    println!("{}", style("No setup state to remove").dim());
                }
            }
            Ok(())
        }
    }
}

/// Read a JSON object from a file or stdin
fn read_setup_input(input: &Path) -> Result<SetupData> {
    let contents = if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read setup state from stdin")?;
        buf
    } else {
        fs::read_to_string(input)
            .with_context(|| format!("Failed to read {}", input.display()))?
    };

    parse_setup_input(&contents)
}

fn parse_setup_input(contents: &str) -> Result<SetupData> {
    let value: serde_json::Value =
        serde_json::from_str(contents).context("Setup state must be valid JSON")?;
    match value {
        serde_json::Value::Object(map) => Ok(map),
        _ => bail!("Setup state must be a JSON object"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_objects_only() {
        let data = parse_setup_input(r#"{"a": 1, "b": [1, 2]}"#).unwrap();
        assert_eq!(data.len(), 2);
        assert!(parse_setup_input("[1, 2]").is_err());
        assert!(parse_setup_input("not json").is_err());
    }

    #[test]
    fn test_save_then_show_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.json");
        let state = dir.path().join("product_setup");
        fs::write(&input, r#"{"capsule": "cap.example.com"}"#).unwrap();

        let args = SetupArgs {
            file: Some(state.clone()),
            command: SetupSubcommands::Save { input },
        };
        cmd_setup(&args, true).unwrap();

        let saved = get_setup_data_at(&state).unwrap();
        assert_eq!(saved["capsule"], "cap.example.com");
    }
}
