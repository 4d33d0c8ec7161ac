//! Where the config file lives, and writing the first one.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use casement_common::ConfigError;
use tracing::{debug, info};

use super::template::default_config_toml;

const CONFIG_FILE: &str = "config.toml";

fn io_error(action: &str, path: &Path, e: io::Error) -> ConfigError {
    ConfigError::ParseError(format!("failed to {action} {}: {e}", path.display()))
}

/// `<config_dir>/casement/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("casement").join(CONFIG_FILE))
        .ok_or_else(|| ConfigError::ParseError("no config directory on this platform".into()))
}

/// Write the commented template to `path`. An existing file is left alone.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        debug!(path = %path.display(), "config file already exists");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error("create config directory", parent, e))?;
    }
    fs::write(path, default_config_toml()).map_err(|e| io_error("write config to", path, e))?;

    info!(path = %path.display(), "wrote default config");
    Ok(())
}
