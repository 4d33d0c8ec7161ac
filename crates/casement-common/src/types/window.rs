use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::id::WindowId;

/// How devtools attach to a window when opened explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DevToolsMode {
    #[default]
    Docked,
    Undocked,
}

/// What a window has open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct WindowWorkspace {
    pub workspace_path: Option<PathBuf>,
    pub folder_path: Option<PathBuf>,
    pub files_to_open: Vec<PathBuf>,
}

/// One row of the list-all-windows reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSummary {
    pub id: WindowId,
    pub title: String,
    pub workspace_path: Option<PathBuf>,
    pub folder_path: Option<PathBuf>,
    pub filename: Option<String>,
}

/// Recently opened workspaces and files, most recent first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RecentlyOpened {
    pub workspaces: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

/// A path to remember, with a hint telling files apart from workspaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentPath {
    pub path: PathBuf,
    #[serde(default)]
    pub is_file: bool,
}
