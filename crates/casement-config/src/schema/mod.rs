//! Configuration schema types for casement.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod startup;
mod system;
mod urls;

pub use startup::*;
pub use system::*;
pub use urls::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for casement.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CasementConfig {
    pub logging: LoggingConfig,
    pub urls: UrlConfig,
    pub history: HistoryConfig,
    pub startup: StartupConfig,
    pub crash_reporter: CrashReporterConfig,
}
