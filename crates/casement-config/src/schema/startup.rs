//! Default launch flags merged into every open request.

use casement_common::LaunchArgs;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StartupConfig {
    pub new_window: bool,
    pub reuse_window: bool,
    pub verbose: bool,
    pub extension_development_path: Option<String>,
}

impl StartupConfig {
    pub fn launch_args(&self) -> LaunchArgs {
        LaunchArgs {
            new_window: self.new_window,
            reuse_window: self.reuse_window,
            goto: false,
            verbose: self.verbose,
            extension_development_path: self.extension_development_path.clone(),
        }
    }
}
