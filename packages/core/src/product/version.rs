//! Installed version detection
//!
//! Reads the installed Satellite/Capsule version from package queries and
//! the katello-agent version from an rpm name.

use std::sync::LazyLock;

use regex::Regex;

use super::Product;
use super::error::ProductError;
use crate::host::{RemoteExecutor, RunOptions};

static SAT_CAP_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\d]*(?P<version>\d(\.\d\.*\d*){1})").expect("valid version pattern")
});

static KATELLO_AGENT_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d(\-\d|\.\d)*").expect("valid katello-agent pattern"));

/// Commands that report the installed version of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionCommands {
    /// Package query used on 6.2 and later
    pub current: &'static str,
    /// Fallback for releases before 6.2, when the product has one
    pub legacy: Option<&'static str>,
}

impl Product {
    pub fn version_commands(self) -> VersionCommands {
        match self {
            Product::Satellite => VersionCommands {
                current: "rpm -q satellite",
                legacy: Some(r#"grep "VERSION" /usr/share/foreman/lib/satellite/version.rb"#),
            },
            Product::Capsule => VersionCommands {
                current: "rpm -q satellite-capsule",
                legacy: None,
            },
        }
    }
}

/// A detected version and the output it was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledVersion {
    pub version: String,
    pub raw_output: String,
}

/// Extract a Satellite/Capsule version such as `6.2.1` or `6.1` from command output
pub fn extract_version(output: &str) -> Option<&str> {
    SAT_CAP_VERSION
        .captures(output)
        .and_then(|caps| caps.name("version"))
        .map(|m| m.as_str())
}

/// Run one version command on `host` and try to read a version from its output
fn extract_sat_cap_version(
    executor: &impl RemoteExecutor,
    host: &str,
    command: &str,
) -> Result<(Option<String>, String), ProductError> {
    let output = executor.run(host, command, RunOptions::warn_only())?;
    let version = extract_version(&output).map(str::to_string);
    Ok((version, output))
}

/// Determine the installed Satellite/Capsule version on `host`
///
/// `product` is matched loosely: anything containing "sat" or "cap".
/// Returns `Ok(None)` when no command yields a version.
pub fn get_sat_cap_version(
    executor: &impl RemoteExecutor,
    host: &str,
    product: &str,
) -> Result<Option<InstalledVersion>, ProductError> {
    let product = Product::parse(product)?;
    let commands = product.version_commands();

    let mut last_output = String::new();
    for command in std::iter::once(commands.current).chain(commands.legacy) {
        let (version, output) = extract_sat_cap_version(executor, host, command)?;
        if let Some(version) = version {
            tracing::debug!("{} version on {}: {}", product, host, version);
            return Ok(Some(InstalledVersion {
                version,
                raw_output: output,
            }));
        }
        last_output = output;
    }

    if commands.legacy.is_none() {
        tracing::debug!("No pre-6.2 version command for {}", product);
    }
    tracing::warn!(
        "Unable to detect installed version due to:\n{}",
        last_output
    );
    Ok(None)
}

/// Filter the katello-agent version out of its rpm name
///
/// `katello-agent-2.9.0-1.el7.noarch` gives `2.9.0-1`.
pub fn katello_agent_version_filter(rpm_name: &str) -> Option<String> {
    KATELLO_AGENT_VERSION
        .find(rpm_name)
        .map(|m| m.as_str().to_string())
}
