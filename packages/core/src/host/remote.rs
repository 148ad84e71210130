//! Remote command execution
//!
//! Runs shell commands on remote hosts through the OpenSSH client.

use std::process::{Command, Stdio};

use super::error::HostError;
use super::schema::SshSettings;

/// Exit status the OpenSSH client reserves for its own errors
const SSH_TRANSPORT_EXIT_CODE: i32 = 255;

/// Options for a single remote command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Return stdout even when the command exits non-zero
    ///
    /// Transport failures (unreachable host, dropped connection) are still errors.
    pub warn_only: bool,
}

impl RunOptions {
    /// Options that tolerate a non-zero exit of the remote command
    pub fn warn_only() -> Self {
        Self { warn_only: true }
    }
}

/// Something that can run a shell command on a named host
pub trait RemoteExecutor {
    /// Run `command` on `host` and return its stdout
    fn run(&self, host: &str, command: &str, options: RunOptions) -> Result<String, HostError>;
}

impl<T: RemoteExecutor + ?Sized> RemoteExecutor for &T {
    fn run(&self, host: &str, command: &str, options: RunOptions) -> Result<String, HostError> {
        (**self).run(host, command, options)
    }
}

/// Executor backed by the system `ssh` binary
#[derive(Debug, Clone, Default)]
pub struct SshExecutor {
    settings: SshSettings,
}

impl SshExecutor {
    pub fn new(settings: SshSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &SshSettings {
        &self.settings
    }

    /// Build base SSH command for a host
    fn build_ssh_command(&self, host: &str) -> Command {
        let mut cmd = Command::new("ssh");

        // Standard options
        cmd.arg("-o")
            .arg("BatchMode=yes")
            .arg("-o")
            .arg("ConnectTimeout=30")
            .arg("-o")
            .arg("StrictHostKeyChecking=accept-new");

        // Host-specific options (port, identity, jump, user@host)
        cmd.args(self.settings.ssh_args(host));

        cmd
    }
}

impl RemoteExecutor for SshExecutor {
    fn run(&self, host: &str, command: &str, options: RunOptions) -> Result<String, HostError> {
        let mut cmd = self.build_ssh_command(host);
        cmd.arg(command);

        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        tracing::debug!("[{}] run: {}", host, command);

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                HostError::SshSpawn("SSH not found. Install OpenSSH client.".to_string())
            } else {
                HostError::SshSpawn(e.to_string())
            }
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        if output.status.success() {
            return Ok(stdout);
        }

        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let err = classify_failure(
            host,
            command,
            output.status.code(),
            &stderr,
            self.settings.identity_file.as_deref(),
        );

        match err {
            HostError::CommandFailed { code, .. } if options.warn_only => {
                tracing::debug!("[{}] `{}` exited with {:?}, continuing", host, command, code);
                Ok(stdout)
            }
            err => Err(err),
        }
    }
}

/// Map a failed `ssh` invocation to a [`HostError`]
fn classify_failure(
    host: &str,
    command: &str,
    code: Option<i32>,
    stderr: &str,
    key_hint: Option<&str>,
) -> HostError {
    // Killed by a signal, or the client itself failed
    if code.is_none() || code == Some(SSH_TRANSPORT_EXIT_CODE) {
        if stderr.contains("Permission denied") || stderr.contains("Host key verification failed")
        {
            return HostError::AuthFailed {
                host: host.to_string(),
                key_hint: key_hint.map(str::to_string),
            };
        }
        if stderr.contains("timed out") {
            return HostError::Timeout(host.to_string());
        }
        return HostError::ConnectionFailed {
            host: host.to_string(),
            message: stderr.trim().to_string(),
        };
    }

    HostError::CommandFailed {
        host: host.to_string(),
        command: command.to_string(),
        code,
        stderr: stderr.trim().to_string(),
    }
}
