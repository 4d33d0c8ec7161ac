//! Inbound URL classification settings.

use serde::{Deserialize, Serialize};

/// How opened URLs are routed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlConfig {
    /// URL authority that marks a local-file open request.
    pub file_authority: String,
    /// Regex matched against the URL path for extension-development opens.
    pub extension_path_pattern: String,
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            file_authority: "file".into(),
            extension_path_pattern: "^/?extension(/|$)".into(),
        }
    }
}
