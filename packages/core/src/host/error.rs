//! Host-specific error types
//!
//! Errors that can occur while running commands on remote hosts.

use thiserror::Error;

/// Errors that can occur during host operations
#[derive(Error, Debug)]
pub enum HostError {
    /// Failed to spawn the SSH client
    #[error("Failed to spawn SSH: {0}")]
    SshSpawn(String),

    /// SSH could not reach the host or the connection dropped
    #[error("SSH connection to {host} failed: {message}")]
    ConnectionFailed { host: String, message: String },

    /// SSH authentication failed (key not in agent, passphrase needed)
    #[error("SSH authentication to {host} failed. Ensure your key is loaded: ssh-add {}", .key_hint.as_deref().unwrap_or("~/.ssh/id_rsa"))]
    AuthFailed {
        host: String,
        key_hint: Option<String>,
    },

    /// Remote command exited non-zero
    #[error("Command `{command}` failed on {host} (exit code {}): {stderr}", .code.map(|c| c.to_string()).unwrap_or_else(|| "unknown".to_string()))]
    CommandFailed {
        host: String,
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// Connection or command timed out
    #[error("Timed out talking to {0}")]
    Timeout(String),
}

impl HostError {
    /// Whether the failure is expected while a host is rebooting or not yet reachable
    ///
    /// Dropped connections and timeouts are transient; a missing SSH client,
    /// rejected credentials or a failing command are not.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            HostError::ConnectionFailed { .. } | HostError::Timeout(_)
        )
    }
}
