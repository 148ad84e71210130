//! Hammer-specific error types

use thiserror::Error;

use crate::host::HostError;

/// Errors that can occur while querying Hammer
#[derive(Error, Debug)]
pub enum HammerError {
    /// No satellite host configured for Hammer queries
    #[error("No satellite host configured. Set satellite_host in the config or pass it explicitly.")]
    MissingSatelliteHost,

    /// Running hammer on the satellite failed
    #[error("Hammer command failed: {0}")]
    Remote(#[from] HostError),

    /// Hammer output was not valid CSV
    #[error("Invalid CSV from hammer: {0}")]
    Parse(#[from] csv::Error),
}
