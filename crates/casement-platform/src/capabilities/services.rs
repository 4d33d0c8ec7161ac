use std::path::{Path, PathBuf};

use async_trait::async_trait;
use casement_common::{
    CrashReporterOptions, OpenedUrl, PickOptions, RecentlyOpened, RelaunchOptions, Result,
    Subscription, WindowWorkspace,
};

/// Recently opened workspaces and files.
pub trait HistoryStore: Send + Sync {
    fn add_recently_opened(&self, workspaces: &[PathBuf], files: &[PathBuf]);
    fn remove_from_recently_opened(&self, paths: &[PathBuf]);
    fn clear_recently_opened(&self);

    /// The recent list as seen from a window with the given context.
    fn recently_opened(&self, context: &WindowWorkspace) -> RecentlyOpened;
}

pub trait LifecycleManager: Send + Sync {
    fn relaunch(&self, options: RelaunchOptions) -> Result<()>;
}

/// The background process shared by all windows.
#[async_trait]
pub trait SharedProcess: Send + Sync {
    /// Resolves once the shared process has finished starting.
    async fn when_ready(&self) -> Result<()>;
    fn toggle(&self);
}

#[async_trait]
pub trait ShellIntegration: Send + Sync {
    fn show_item_in_folder(&self, path: &Path) -> Result<()>;

    /// Open a URL with the system handler. `Ok(false)` means no handler took it.
    async fn open_external(&self, url: &str) -> Result<bool>;

    fn start_crash_reporter(&self, options: CrashReporterOptions) -> Result<()>;
}

/// Native pickers that open whatever the user chose.
#[async_trait]
pub trait Dialogs: Send + Sync {
    async fn pick_file_folder_and_open(&self, options: PickOptions) -> Result<()>;
    async fn pick_file_and_open(&self, options: PickOptions) -> Result<()>;
    async fn pick_folder_and_open(&self, options: PickOptions) -> Result<()>;
    async fn pick_workspace_and_open(&self, options: PickOptions) -> Result<()>;
}

pub type UrlListener = Box<dyn Fn(&OpenedUrl) + Send + Sync>;

/// Source of "open URL" events from the OS.
pub trait UrlEventSource: Send + Sync {
    fn on_open_url(&self, listener: UrlListener) -> Subscription;
}
