//! System configuration types: logging, history, and crash reporting.

use casement_common::{CrashReporterOptions, LogLevel};
use serde::{Deserialize, Serialize};

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

/// Bounds for `history.max_entries`.
pub const HISTORY_MIN_ENTRIES: u32 = 1;
pub const HISTORY_MAX_ENTRIES: u32 = 500;

/// Recently opened history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Cap on each of the workspace and file lists (valid range: 1-500).
    pub max_entries: u32,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { max_entries: 100 }
    }
}

impl HistoryConfig {
    /// `max_entries` pulled into the valid range. Loading keeps out-of-range
    /// values, so the history store is sized from this instead.
    pub fn effective_max_entries(&self) -> usize {
        self.max_entries
            .clamp(HISTORY_MIN_ENTRIES, HISTORY_MAX_ENTRIES) as usize
    }
}

/// Crash reporter defaults used when the binary starts reporting on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CrashReporterConfig {
    pub enabled: bool,
    pub product_name: String,
    pub company_name: String,
    pub submit_url: String,
    pub upload_to_server: bool,
}

impl Default for CrashReporterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            product_name: "casement".into(),
            company_name: "casement".into(),
            submit_url: String::new(),
            upload_to_server: false,
        }
    }
}

impl CrashReporterConfig {
    pub fn options(&self) -> CrashReporterOptions {
        CrashReporterOptions {
            company_name: self.company_name.clone(),
            product_name: self.product_name.clone(),
            submit_url: self.submit_url.clone(),
            upload_to_server: self.upload_to_server,
            extra: Default::default(),
        }
    }
}
