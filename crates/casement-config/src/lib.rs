//! casement configuration system.
//!
//! TOML-based configuration with validation. All sections use defaults so
//! partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use casement_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{CasementConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use casement_common::ConfigError;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default file is created from the commented template if missing.
/// Invalid values are logged and kept; use [`validation::validate`] to
/// reject them.
pub fn load_config(path: Option<&Path>) -> Result<CasementConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &CasementConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
