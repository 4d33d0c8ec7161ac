//! Reading the config file.

use std::io::ErrorKind;
use std::path::Path;

use casement_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};
use crate::schema::CasementConfig;
use crate::validation;

/// Parse the TOML file at `path`. Missing sections and fields take their
/// defaults. Values that fail validation are logged and kept.
pub fn load_from_path(path: &Path) -> Result<CasementConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()))
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "failed to read {}: {e}",
                path.display()
            )))
        }
    };

    let config: CasementConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;

    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), "{e}; keeping the values as written");
    }

    info!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Load `<config_dir>/casement/config.toml`, writing the template first if
/// there is no file yet.
pub fn load_default() -> Result<CasementConfig, ConfigError> {
    let path = default_config_path()?;
    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            create_default_config(&path)?;
            Ok(CasementConfig::default())
        }
        other => other,
    }
}
