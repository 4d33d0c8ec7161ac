//! Full configuration validation.
//!
//! Each check pushes a message; all messages are joined into a single
//! `ConfigError`.

mod helpers;


use crate::schema::{CasementConfig, HISTORY_MAX_ENTRIES, HISTORY_MIN_ENTRIES};
use casement_common::ConfigError;

use helpers::{validate_not_blank, validate_range};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &CasementConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_urls(&mut errors, config);
    validate_history(&mut errors, config);
    validate_startup(&mut errors, config);
    validate_crash_reporter(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_urls(errors: &mut Vec<String>, config: &CasementConfig) {
    validate_not_blank(errors, "urls.file_authority", &config.urls.file_authority);
    if let Err(e) = regex::Regex::new(&config.urls.extension_path_pattern) {
        errors.push(format!("urls.extension_path_pattern is not a valid regex: {e}"));
    }
}

fn validate_history(errors: &mut Vec<String>, config: &CasementConfig) {
    validate_range(
        errors,
        "history.max_entries",
        config.history.max_entries,
        HISTORY_MIN_ENTRIES,
        HISTORY_MAX_ENTRIES,
    );
}

fn validate_startup(errors: &mut Vec<String>, config: &CasementConfig) {
    if config.startup.new_window && config.startup.reuse_window {
        errors.push("startup.new_window and startup.reuse_window are mutually exclusive".into());
    }
}

fn validate_crash_reporter(errors: &mut Vec<String>, config: &CasementConfig) {
    let crash = &config.crash_reporter;
    validate_not_blank(errors, "crash_reporter.product_name", &crash.product_name);
    if crash.upload_to_server {
        validate_not_blank(errors, "crash_reporter.submit_url", &crash.submit_url);
    }
}
