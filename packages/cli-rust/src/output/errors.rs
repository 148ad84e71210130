//! Host error formatting with actionable guidance

use console::style;
use sat_upgrade_core::HostError;

/// Format host errors with troubleshooting hints
pub fn format_host_error(e: &HostError) -> String {
    match e {
        HostError::SshSpawn(_) => format!(
            "{}\n\n  {}\n  {}",
            style("SSH client not available").red().bold(),
            "Install the OpenSSH client:",
            style("  sudo dnf install openssh-clients").cyan()
        ),
        HostError::AuthFailed { host, key_hint } => format!(
            "{}\n\n  {}\n  {}\n  {}",
            style(format!("SSH authentication to {host} failed")).red().bold(),
            "Ensure your key is loaded and authorized on the host:",
            style(format!(
                "  ssh-add {}",
                key_hint.as_deref().unwrap_or("~/.ssh/id_rsa")
            ))
            .cyan(),
            style(format!("  ssh-copy-id root@{host}")).cyan()
        ),
        HostError::ConnectionFailed { host, message } => format!(
            "{}\n\n  {}\n  {}",
            style(format!("Could not reach {host}: {message}")).red().bold(),
            "Check that the host is up:",
            style(format!("  sat-upgrade ping {host}")).cyan()
        ),
        _ => e.to_string(),
    }
}
