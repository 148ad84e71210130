//! Configuration schema for sat-upgrade
//!
//! Defines the structure and defaults for the config.json file.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::hammer::{
    DEFAULT_HAMMER_PASSWORD, DEFAULT_HAMMER_USERNAME, HammerError, HammerSession,
    set_hammer_config,
};
use crate::host::{
    DEFAULT_HOSTNAME_TIMEOUT_MINUTES, DEFAULT_PING_TIMEOUT_MINUTES, DEFAULT_REBOOT_HALT_TIME,
    SshSettings,
};

/// Main configuration structure for sat-upgrade
///
/// Serialized to/from `~/.config/sat-upgrade/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config file version for migrations
    pub version: u32,

    /// Satellite host that hammer queries run on
    #[serde(default)]
    pub satellite_host: Option<String>,

    /// SSH username for remote hosts (default: "root")
    #[serde(default = "default_ssh_user")]
    pub ssh_user: String,

    /// SSH port (default: 22)
    #[serde(default)]
    pub ssh_port: Option<u16>,

    /// SSH identity file (private key)
    #[serde(default)]
    pub identity_file: Option<String>,

    /// Jump host for ProxyJump
    #[serde(default)]
    pub jump_host: Option<String>,

    /// Hammer username (default: "admin")
    #[serde(default = "default_hammer_username")]
    pub hammer_username: String,

    /// Hammer password (default: "changeme")
    #[serde(default = "default_hammer_password")]
    pub hammer_password: String,

    /// Seconds to wait after issuing a reboot (default: 300)
    #[serde(default = "default_reboot_halt_secs")]
    pub reboot_halt_secs: u64,

    /// Minutes to keep pinging a host (default: 15)
    #[serde(default = "default_ping_timeout_minutes")]
    pub ping_timeout_minutes: u64,

    /// Minutes to keep retrying a hostname lookup (default: 3)
    #[serde(default = "default_hostname_timeout_minutes")]
    pub hostname_timeout_minutes: u64,
}

fn default_ssh_user() -> String {
    "root".to_string()
}

fn default_hammer_username() -> String {
    DEFAULT_HAMMER_USERNAME.to_string()
}

fn default_hammer_password() -> String {
    DEFAULT_HAMMER_PASSWORD.to_string()
}

fn default_reboot_halt_secs() -> u64 {
    DEFAULT_REBOOT_HALT_TIME.as_secs()
}

fn default_ping_timeout_minutes() -> u64 {
    DEFAULT_PING_TIMEOUT_MINUTES
}

fn default_hostname_timeout_minutes() -> u64 {
    DEFAULT_HOSTNAME_TIMEOUT_MINUTES
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            satellite_host: None,
            ssh_user: default_ssh_user(),
            ssh_port: None,
            identity_file: None,
            jump_host: None,
            hammer_username: default_hammer_username(),
            hammer_password: default_hammer_password(),
            reboot_halt_secs: default_reboot_halt_secs(),
            ping_timeout_minutes: default_ping_timeout_minutes(),
            hostname_timeout_minutes: default_hostname_timeout_minutes(),
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// SSH settings for the remote executor
    pub fn ssh_settings(&self) -> SshSettings {
        SshSettings {
            user: self.ssh_user.clone(),
            port: self.ssh_port,
            identity_file: self.identity_file.clone(),
            jump_host: self.jump_host.clone(),
        }
    }

    /// Hammer session for the configured satellite
    ///
    /// `satellite_host` overrides the configured host when given.
    pub fn hammer_session(&self, satellite_host: Option<&str>) -> Result<HammerSession, HammerError> {
        set_hammer_config(
            satellite_host.or(self.satellite_host.as_deref()),
            &self.hammer_username,
            &self.hammer_password,
        )
    }

    pub fn reboot_halt_time(&self) -> Duration {
        Duration::from_secs(self.reboot_halt_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version, 1);
        assert!(config.satellite_host.is_none());
        assert_eq!(config.ssh_user, "root");
        assert_eq!(config.hammer_username, "admin");
        assert_eq!(config.hammer_password, "changeme");
        assert_eq!(config.reboot_halt_time(), Duration::from_secs(300));
        assert_eq!(config.ping_timeout_minutes, 15);
        assert_eq!(config.hostname_timeout_minutes, 3);
    }

    #[test]
    fn test_serialize_deserialize_roundtrip() {
        let config = Config {
            satellite_host: Some("sat.example.com".to_string()),
            ssh_port: Some(2222),
            ..Config::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_deserialize_with_missing_optional_fields() {
        let json = r#"{"version": 1, "satellite_host": "sat.example.com"}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.satellite_host.as_deref(), Some("sat.example.com"));
        assert_eq!(config.ssh_user, "root");
        assert_eq!(config.reboot_halt_secs, 300);
    }

    #[test]
    fn test_reject_unknown_fields() {
        let json = r#"{"version": 1, "satelite_host": "typo.example.com"}"#;
        let result: Result<Config, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_ssh_settings_from_config() {
        let config = Config {
            ssh_user: "cloud-user".to_string(),
            identity_file: Some("~/.ssh/upgrade".to_string()),
            ..Config::default()
        };
        let settings = config.ssh_settings();
        assert_eq!(settings.user, "cloud-user");
        assert_eq!(settings.identity_file.as_deref(), Some("~/.ssh/upgrade"));
    }

    #[test]
    fn test_hammer_session_override() {
        let config = Config {
            satellite_host: Some("sat.example.com".to_string()),
            ..Config::default()
        };
        assert_eq!(
            config.hammer_session(None).unwrap().satellite_host(),
            "sat.example.com"
        );
        assert_eq!(
            config
                .hammer_session(Some("sat2.example.com"))
                .unwrap()
                .satellite_host(),
            "sat2.example.com"
        );
        assert!(Config::default().hammer_session(None).is_err());
    }
}
