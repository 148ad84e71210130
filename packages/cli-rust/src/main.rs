//! sat-upgrade - Satellite and Capsule upgrade helpers
//!
//! Main entry point for the CLI binary.

fn main() -> anyhow::Result<()> {
    sat_upgrade::run()
}
