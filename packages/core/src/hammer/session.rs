//! Hammer credentials and invocation
//!
//! A [`HammerSession`] carries the satellite host and credentials that every
//! hammer call needs.

use shell_escape::unix::escape;

use super::error::HammerError;
use crate::host::{RemoteExecutor, RunOptions};

/// Default Hammer username on a fresh Satellite
pub const DEFAULT_HAMMER_USERNAME: &str = "admin";

/// Default Hammer password on a fresh Satellite
pub const DEFAULT_HAMMER_PASSWORD: &str = "changeme";

/// Satellite host and credentials for hammer calls
#[derive(Clone, PartialEq, Eq)]
pub struct HammerSession {
    satellite_host: String,
    username: String,
    password: String,
}

impl std::fmt::Debug for HammerSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HammerSession")
            .field("satellite_host", &self.satellite_host)
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

impl HammerSession {
    pub fn new(
        satellite_host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            satellite_host: satellite_host.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Session with the default admin credentials
    pub fn with_default_credentials(satellite_host: impl Into<String>) -> Self {
        Self::new(satellite_host, DEFAULT_HAMMER_USERNAME, DEFAULT_HAMMER_PASSWORD)
    }

    pub fn satellite_host(&self) -> &str {
        &self.satellite_host
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Full shell command for `hammer <command>` with CSV output
    pub fn command_line(&self, command: &str) -> String {
        format!(
            "hammer --username {} --password {} --output csv {}",
            escape(self.username.as_str().into()),
            escape(self.password.as_str().into()),
            command
        )
    }

    /// Run `hammer <command>` on the satellite and return its CSV output
    ///
    /// A non-zero hammer exit is returned as an error.
    pub fn run(&self, executor: &impl RemoteExecutor, command: &str) -> Result<String, HammerError> {
        tracing::debug!("hammer {}", command);
        let result = executor.run(
            &self.satellite_host,
            &self.command_line(command),
            RunOptions::default(),
        )?;
        Ok(result)
    }
}

/// Build a session, failing when no satellite host is known
pub fn set_hammer_config(
    satellite_host: Option<&str>,
    username: &str,
    password: &str,
) -> Result<HammerSession, HammerError> {
    let host = satellite_host
        .filter(|h| !h.trim().is_empty())
        .ok_or(HammerError::MissingSatelliteHost)?;
    Ok(HammerSession::new(host, username, password))
}
