//! XDG-compliant path resolution for sat-upgrade
//!
//! - Linux/macOS: `~/.config/sat-upgrade/`
//! - Windows: `%APPDATA%\sat-upgrade\`

use std::path::PathBuf;

const APP_DIR: &str = "sat-upgrade";

/// Get the configuration directory path
pub fn get_config_dir() -> Option<PathBuf> {
    #[cfg(any(target_os = "linux", target_os = "macos"))]
    {
        directories::BaseDirs::new().map(|dirs| dirs.home_dir().join(".config").join(APP_DIR))
    }
    #[cfg(target_os = "windows")]
    {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().to_path_buf())
            .map(|d| d.join(APP_DIR))
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        None
    }
}

/// Get the full path to the config file
///
/// Returns: `{config_dir}/config.json`
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|d| d.join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_exists() {
        let dir = get_config_dir();
        assert!(dir.is_some());
        assert!(dir.unwrap().ends_with("sat-upgrade"));
    }

    #[test]
    fn test_config_path_ends_with_config_json() {
        let path = get_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().ends_with("config.json"));
    }
}
