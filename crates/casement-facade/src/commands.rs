//! Serialized command surface.
//!
//! A command message is one JSON object:
//!
//! ```json
//! {"id": 4, "command": "set_document_edited", "args": {"window_id": 2, "edited": true}}
//! ```
//!
//! and every message gets exactly one [`CommandReply`] carrying the same `id`.

use std::path::PathBuf;

use casement_common::{
    CasementError, CrashReporterOptions, LogLevel, OpenOptions, PickOptions, RecentPath,
    RelaunchOptions, Result, WindowId,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dispatcher::CommandDispatcher;

/// Every command the facade accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", content = "args", rename_all = "snake_case")]
pub enum WindowCommand {
    PickFileFolderAndOpen(PickOptions),
    PickFileAndOpen(PickOptions),
    PickFolderAndOpen(PickOptions),
    PickWorkspaceAndOpen(PickOptions),
    Reload {
        window_id: WindowId,
    },
    OpenDevTools {
        window_id: WindowId,
    },
    ToggleDevTools {
        window_id: WindowId,
    },
    CloseFolder {
        window_id: WindowId,
    },
    ToggleFullScreen {
        window_id: WindowId,
    },
    SetRepresentedFilename {
        window_id: WindowId,
        filename: String,
    },
    AddRecentlyOpened {
        paths: Vec<RecentPath>,
    },
    RemoveFromRecentlyOpened {
        paths: Vec<PathBuf>,
    },
    ClearRecentlyOpened,
    GetRecentlyOpened {
        window_id: WindowId,
    },
    FocusWindow {
        window_id: WindowId,
    },
    IsFocused {
        window_id: WindowId,
    },
    IsMaximized {
        window_id: WindowId,
    },
    MaximizeWindow {
        window_id: WindowId,
    },
    UnmaximizeWindow {
        window_id: WindowId,
    },
    OnWindowTitleDoubleClick {
        window_id: WindowId,
    },
    SetDocumentEdited {
        window_id: WindowId,
        edited: bool,
    },
    OpenWindow {
        #[serde(default)]
        paths: Vec<PathBuf>,
        #[serde(default)]
        options: OpenOptions,
    },
    OpenNewWindow,
    ShowWindow {
        window_id: WindowId,
    },
    GetWindows,
    GetWindowCount,
    Log {
        level: LogLevel,
        messages: Vec<String>,
    },
    CloseExtensionHostWindow {
        paths: Vec<String>,
    },
    ShowItemInFolder {
        path: PathBuf,
    },
    OpenExternal {
        url: String,
    },
    StartCrashReporter(CrashReporterOptions),
    Quit,
    Relaunch(RelaunchOptions),
    WhenSharedProcessReady,
    ToggleSharedProcess,
}

impl WindowCommand {
    /// Wire name of the command, as found in the `command` field.
    pub fn command_name(&self) -> &'static str {
        match self {
            Self::PickFileFolderAndOpen(_) => "pick_file_folder_and_open",
            Self::PickFileAndOpen(_) => "pick_file_and_open",
            Self::PickFolderAndOpen(_) => "pick_folder_and_open",
            Self::PickWorkspaceAndOpen(_) => "pick_workspace_and_open",
            Self::Reload { .. } => "reload",
            Self::OpenDevTools { .. } => "open_dev_tools",
            Self::ToggleDevTools { .. } => "toggle_dev_tools",
            Self::CloseFolder { .. } => "close_folder",
            Self::ToggleFullScreen { .. } => "toggle_full_screen",
            Self::SetRepresentedFilename { .. } => "set_represented_filename",
            Self::AddRecentlyOpened { .. } => "add_recently_opened",
            Self::RemoveFromRecentlyOpened { .. } => "remove_from_recently_opened",
            Self::ClearRecentlyOpened => "clear_recently_opened",
            Self::GetRecentlyOpened { .. } => "get_recently_opened",
            Self::FocusWindow { .. } => "focus_window",
            Self::IsFocused { .. } => "is_focused",
            Self::IsMaximized { .. } => "is_maximized",
            Self::MaximizeWindow { .. } => "maximize_window",
            Self::UnmaximizeWindow { .. } => "unmaximize_window",
            Self::OnWindowTitleDoubleClick { .. } => "on_window_title_double_click",
            Self::SetDocumentEdited { .. } => "set_document_edited",
            Self::OpenWindow { .. } => "open_window",
            Self::OpenNewWindow => "open_new_window",
            Self::ShowWindow { .. } => "show_window",
            Self::GetWindows => "get_windows",
            Self::GetWindowCount => "get_window_count",
            Self::Log { .. } => "log",
            Self::CloseExtensionHostWindow { .. } => "close_extension_host_window",
            Self::ShowItemInFolder { .. } => "show_item_in_folder",
            Self::OpenExternal { .. } => "open_external",
            Self::StartCrashReporter(_) => "start_crash_reporter",
            Self::Quit => "quit",
            Self::Relaunch(_) => "relaunch",
            Self::WhenSharedProcessReady => "when_shared_process_ready",
            Self::ToggleSharedProcess => "toggle_shared_process",
        }
    }
}

/// An inbound command with the caller's correlation id.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandMessage {
    pub id: Option<u64>,
    pub command: WindowCommand,
}

impl CommandMessage {
    /// Parse a message. On failure the error still carries the `id` when
    /// one could be read, so the caller can be answered.
    pub fn from_json(raw: &str) -> std::result::Result<Self, (Option<u64>, CasementError)> {
        let mut value: Value = serde_json::from_str(raw)
            .map_err(|e| (None, CasementError::InvalidCommand(e.to_string())))?;

        let id = match value.as_object_mut() {
            Some(object) => match object.remove("id") {
                None | Some(Value::Null) => None,
                Some(id) => match id.as_u64() {
                    Some(id) => Some(id),
                    None => {
                        return Err((
                            None,
                            CasementError::InvalidCommand(format!(
                                "invalid id {id}: expected a non-negative integer"
                            )),
                        ))
                    }
                },
            },
            None => {
                return Err((
                    None,
                    CasementError::InvalidCommand("expected a JSON object".into()),
                ))
            }
        };

        let command = serde_json::from_value(value)
            .map_err(|e| (id, CasementError::InvalidCommand(e.to_string())))?;
        Ok(Self { id, command })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyOutcome {
    Ok(Value),
    Error(String),
}

/// The single answer to a [`CommandMessage`]: `{"id": 4, "ok": null}` or
/// `{"id": 4, "error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandReply {
    pub id: Option<u64>,
    #[serde(flatten)]
    pub outcome: ReplyOutcome,
}

impl CommandReply {
    pub fn ok(id: Option<u64>, value: Value) -> Self {
        Self {
            id,
            outcome: ReplyOutcome::Ok(value),
        }
    }

    pub fn error(id: Option<u64>, error: &CasementError) -> Self {
        Self {
            id,
            outcome: ReplyOutcome::Error(error.to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self.outcome, ReplyOutcome::Ok(_))
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|e| format!("{{\"id\":null,\"error\":\"failed to serialize reply: {e}\"}}"))
    }
}

fn to_value<T: Serialize>(value: T) -> Result<Value> {
    serde_json::to_value(value)
        .map_err(|e| CasementError::Other(format!("failed to serialize result: {e}")))
}

impl CommandDispatcher {
    /// Run one command. Void commands complete with `null`.
    pub async fn execute(&self, command: WindowCommand) -> Result<Value> {
        use WindowCommand as C;

        match command {
            C::PickFileFolderAndOpen(options) => self.pick_file_folder_and_open(options).await?,
            C::PickFileAndOpen(options) => self.pick_file_and_open(options).await?,
            C::PickFolderAndOpen(options) => self.pick_folder_and_open(options).await?,
            C::PickWorkspaceAndOpen(options) => self.pick_workspace_and_open(options).await?,
            C::Reload { window_id } => self.reload(window_id).await?,
            C::OpenDevTools { window_id } => self.open_dev_tools(window_id).await?,
            C::ToggleDevTools { window_id } => self.toggle_dev_tools(window_id).await?,
            C::CloseFolder { window_id } => self.close_folder(window_id).await?,
            C::ToggleFullScreen { window_id } => self.toggle_full_screen(window_id).await?,
            C::SetRepresentedFilename {
                window_id,
                filename,
            } => self.set_represented_filename(window_id, &filename).await?,
            C::AddRecentlyOpened { paths } => self.add_recently_opened(&paths).await?,
            C::RemoveFromRecentlyOpened { paths } => {
                self.remove_from_recently_opened(&paths).await?
            }
            C::ClearRecentlyOpened => self.clear_recently_opened().await?,
            C::GetRecentlyOpened { window_id } => {
                return to_value(self.get_recently_opened(window_id).await?)
            }
            C::FocusWindow { window_id } => self.focus_window(window_id).await?,
            C::IsFocused { window_id } => return to_value(self.is_focused(window_id).await?),
            C::IsMaximized { window_id } => return to_value(self.is_maximized(window_id).await?),
            C::MaximizeWindow { window_id } => self.maximize_window(window_id).await?,
            C::UnmaximizeWindow { window_id } => self.unmaximize_window(window_id).await?,
            C::OnWindowTitleDoubleClick { window_id } => {
                self.on_window_title_double_click(window_id).await?
            }
            C::SetDocumentEdited { window_id, edited } => {
                self.set_document_edited(window_id, edited).await?
            }
            C::OpenWindow { paths, options } => self.open_window(paths, options).await?,
            C::OpenNewWindow => self.open_new_window().await?,
            C::ShowWindow { window_id } => self.show_window(window_id).await?,
            C::GetWindows => return to_value(self.get_windows().await?),
            C::GetWindowCount => return to_value(self.get_window_count().await?),
            C::Log { level, messages } => self.log(level, &messages).await?,
            C::CloseExtensionHostWindow { paths } => {
                self.close_extension_host_window(&paths).await?
            }
            C::ShowItemInFolder { path } => self.show_item_in_folder(&path).await?,
            C::OpenExternal { url } => return to_value(self.open_external(&url).await?),
            C::StartCrashReporter(options) => self.start_crash_reporter(options).await?,
            C::Quit => self.quit().await?,
            C::Relaunch(options) => self.relaunch(options).await?,
            C::WhenSharedProcessReady => self.when_shared_process_ready().await?,
            C::ToggleSharedProcess => self.toggle_shared_process().await?,
        }
        Ok(Value::Null)
    }
}
