//! Setup state handed from the setup phase to the upgrade phase
//!
//! The setup phase saves its results as a JSON object in `product_setup`
//! (relative to the working directory); the upgrade phase reads them back.
//! The file is overwritten wholesale and not locked.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use serde_json::{Map, Value};
use thiserror::Error;

/// Fixed file name of the setup state
pub const SETUP_STATE_FILE: &str = "product_setup";

/// Free-form setup results, keyed by name
pub type SetupData = Map<String, Value>;

/// Errors that can occur reading or writing setup state
#[derive(Error, Debug)]
pub enum SetupStateError {
    /// No setup state has been written yet
    #[error("Setup state not found at {0}. Run the setup phase first.")]
    NotFound(String),

    /// Reading or writing the file failed
    #[error("Failed to access setup state at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// File content is not a JSON object
    #[error("Invalid setup state in {path}: {message}")]
    Parse { path: String, message: String },
}

/// Save `setups` to `product_setup` in the working directory
pub fn create_setup_dict(setups: &SetupData) -> Result<(), SetupStateError> {
    create_setup_dict_at(Path::new(SETUP_STATE_FILE), setups)
}

/// Read the setup state saved by [`create_setup_dict`]
pub fn get_setup_data() -> Result<SetupData, SetupStateError> {
    get_setup_data_at(Path::new(SETUP_STATE_FILE))
}

/// Save `setups` as JSON at `path`, replacing any previous content
pub fn create_setup_dict_at(path: &Path, setups: &SetupData) -> Result<(), SetupStateError> {
    let json = serde_json::to_string(setups).map_err(|e| SetupStateError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let io_err = |source| SetupStateError::Io {
        path: path.display().to_string(),
        source,
    };
    let mut file = File::create(path).map_err(io_err)?;
    file.write_all(json.as_bytes()).map_err(io_err)?;

    tracing::debug!("Saved {} setup entries to {}", setups.len(), path.display());
    Ok(())
}

/// Read setup state from `path`
pub fn get_setup_data_at(path: &Path) -> Result<SetupData, SetupStateError> {
    let mut file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SetupStateError::NotFound(path.display().to_string())
        } else {
            SetupStateError::Io {
                path: path.display().to_string(),
                source: e,
            }
        }
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|source| SetupStateError::Io {
            path: path.display().to_string(),
            source,
        })?;

    let data: SetupData = serde_json::from_str(&contents).map_err(|e| SetupStateError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    tracing::debug!("Loaded {} setup entries from {}", data.len(), path.display());
    Ok(data)
}

/// Remove saved setup state at `path`, if any
pub fn clear_setup_data_at(path: &Path) -> Result<bool, SetupStateError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(SetupStateError::Io {
            path: path.display().to_string(),
            source,
        }),
    }
}
