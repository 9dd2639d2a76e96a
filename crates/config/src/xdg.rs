//! XDG Base Directory support for linedit.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "linedit";

/// Get the configuration directory following XDG conventions.
///
/// Returns `$XDG_CONFIG_HOME/linedit` or `~/.config/linedit`.
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .context("Failed to determine config directory")
}

/// Get the data directory following XDG conventions.
///
/// Returns `$XDG_DATA_HOME/linedit` or `~/.local/share/linedit`.
/// The default log file lives here (see `LoggingSettings::log_file`).
pub fn get_data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|p| p.join(APP_NAME))
        .context("Failed to determine data directory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_dir() {
        if let Ok(dir) = get_config_dir() {
            assert!(dir.ends_with("linedit"));
        }
    }

    #[test]
    fn test_get_data_dir() {
        if let Ok(dir) = get_data_dir() {
            assert!(dir.ends_with("linedit"));
        }
    }
}
