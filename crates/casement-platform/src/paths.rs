use std::fs;
use std::path::PathBuf;

use casement_common::PlatformError;

const APP_NAME: &str = "casement";

/// Returns the platform-specific configuration directory.
///
/// - macOS: `~/Library/Application Support/casement`
/// - Linux: `$XDG_CONFIG_HOME/casement` (defaults to `~/.config/casement`)
/// - Windows: `%APPDATA%\casement`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Returns the platform-specific data directory.
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Located at `data_dir()/logs`.
pub fn log_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("logs"))
}

/// Located at `log_dir()/crash-reports`.
pub fn crash_report_dir() -> Result<PathBuf, PlatformError> {
    Ok(log_dir()?.join("crash-reports"))
}

/// Creates the config, data, log and crash report directories.
pub fn ensure_dirs() -> Result<(), PlatformError> {
    fs::create_dir_all(config_dir()?).map_err(|e| PlatformError::PathError(e.to_string()))?;
    fs::create_dir_all(data_dir()?).map_err(|e| PlatformError::PathError(e.to_string()))?;
    fs::create_dir_all(crash_report_dir()?).map_err(|e| PlatformError::PathError(e.to_string()))?;
    Ok(())
}
