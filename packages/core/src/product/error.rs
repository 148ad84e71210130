//! Product detection errors

use thiserror::Error;

use crate::host::HostError;

/// Errors that can occur while detecting product versions
#[derive(Error, Debug)]
pub enum ProductError {
    /// Product name matches neither Satellite nor Capsule
    #[error("Unsupported product: {0}. Expected a name containing 'sat' or 'cap'.")]
    Unsupported(String),

    /// Running a version command failed
    #[error(transparent)]
    Host(#[from] HostError),
}
