use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::id::WindowId;

/// Severity of a message forwarded through the `log` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// The `EnvFilter` directive spelling of this level.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Arguments to add to and remove from the current command line on relaunch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RelaunchOptions {
    pub add_args: Vec<String>,
    pub remove_args: Vec<String>,
}

/// Configuration record passed to start-crash-reporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CrashReporterOptions {
    pub company_name: String,
    pub product_name: String,
    pub submit_url: String,
    pub upload_to_server: bool,
    pub extra: BTreeMap<String, String>,
}

/// Options for the pick-and-open dialogs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PickOptions {
    /// Window the dialog is parented to, if any.
    pub window_id: Option<WindowId>,
    pub force_new_window: bool,
    pub default_path: Option<PathBuf>,
    pub title: Option<String>,
}
