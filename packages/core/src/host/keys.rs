//! SSH key propagation between hosts
//!
//! Generates a key pair on a source host when needed and appends its public
//! key to `authorized_keys` on each target host.

use super::error::HostError;
use super::remote::{RemoteExecutor, RunOptions};

const ENSURE_SSH_DIR: &str = "mkdir -p ~/.ssh";
const DERIVE_PUBLIC_KEY: &str =
    "[ ! -f ~/.ssh/id_rsa ] || ssh-keygen -y -f ~/.ssh/id_rsa > ~/.ssh/id_rsa.pub";
const GENERATE_KEY_PAIR: &str = "[ -f ~/.ssh/id_rsa.pub ] || ssh-keygen -f ~/.ssh/id_rsa -t rsa -N ''";
const READ_PUBLIC_KEY: &str = "[ ! -f ~/.ssh/id_rsa.pub ] || cat ~/.ssh/id_rsa.pub";

/// Copy the SSH public key of `from_host` to every host in `to_hosts`
///
/// Both sides must already accept this machine's key. Keys are appended
/// without de-duplication, so repeated runs add repeated entries.
pub fn copy_ssh_key<S: AsRef<str>>(
    executor: &impl RemoteExecutor,
    from_host: &str,
    to_hosts: &[S],
) -> Result<(), HostError> {
    for command in [ENSURE_SSH_DIR, DERIVE_PUBLIC_KEY, GENERATE_KEY_PAIR] {
        executor.run(from_host, command, RunOptions::default())?;
    }

    let output = executor.run(from_host, READ_PUBLIC_KEY, RunOptions::default())?;
    let pub_key = output.trim();
    if pub_key.is_empty() {
        tracing::warn!("No public key found on {}, nothing copied", from_host);
        return Ok(());
    }

    for to_host in to_hosts {
        let to_host = to_host.as_ref();
        executor.run(to_host, ENSURE_SSH_DIR, RunOptions::default())?;
        executor.run(
            to_host,
            &format!("echo \"{pub_key}\" >> ~/.ssh/authorized_keys"),
            RunOptions::default(),
        )?;
        tracing::info!("Copied SSH key of {} to {}", from_host, to_host);
    }

    Ok(())
}
