use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::id::WindowId;

/// Where a request to open windows came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenContext {
    Cli,
    Dock,
    Menu,
    Dialog,
    Desktop,
    Api,
}

/// Process-wide startup arguments. Every open request carries a copy,
/// possibly with per-request overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LaunchArgs {
    pub new_window: bool,
    pub reuse_window: bool,
    /// Treat `path:line:column` suffixes as navigation targets.
    pub goto: bool,
    pub verbose: bool,
    pub extension_development_path: Option<String>,
}

impl LaunchArgs {
    /// Copy of these arguments with the navigation hint switched on.
    pub fn with_goto(&self) -> Self {
        Self {
            goto: true,
            ..self.clone()
        }
    }
}

/// Caller overrides for open-window-set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OpenOptions {
    pub force_new_window: bool,
    pub force_reuse_window: bool,
}

/// A request to the window registry to open (or reuse) windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenRequest {
    pub context: OpenContext,
    pub cli: LaunchArgs,
    pub paths_to_open: Vec<PathBuf>,
    pub force_new_window: bool,
    pub force_reuse_window: bool,
    /// Open an empty window instead of restoring anything.
    pub force_empty: bool,
    pub window_to_use: Option<WindowId>,
}

impl OpenRequest {
    pub fn new(context: OpenContext, cli: LaunchArgs) -> Self {
        Self {
            context,
            cli,
            paths_to_open: Vec::new(),
            force_new_window: false,
            force_reuse_window: false,
            force_empty: false,
            window_to_use: None,
        }
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths_to_open = paths;
        self
    }

    pub fn with_options(mut self, options: OpenOptions) -> Self {
        self.force_new_window = options.force_new_window;
        self.force_reuse_window = options.force_reuse_window;
        self
    }
}
