//! Commands acting on process-wide capabilities.

use std::path::{Path, PathBuf};

use casement_common::{
    CrashReporterOptions, LogLevel, OpenContext, OpenOptions, OpenRequest, PickOptions,
    RecentPath, RelaunchOptions, Result, WindowSummary,
};
use tracing::{debug, info};

use super::CommandDispatcher;

impl CommandDispatcher {
    // =========================================================================
    // DIALOGS
    // =========================================================================

    pub async fn pick_file_folder_and_open(&self, options: PickOptions) -> Result<()> {
        debug!(command = "pick_file_folder_and_open", "dispatching");
        self.collaborators.dialogs.pick_file_folder_and_open(options).await
    }

    pub async fn pick_file_and_open(&self, options: PickOptions) -> Result<()> {
        debug!(command = "pick_file_and_open", "dispatching");
        self.collaborators.dialogs.pick_file_and_open(options).await
    }

    pub async fn pick_folder_and_open(&self, options: PickOptions) -> Result<()> {
        debug!(command = "pick_folder_and_open", "dispatching");
        self.collaborators.dialogs.pick_folder_and_open(options).await
    }

    pub async fn pick_workspace_and_open(&self, options: PickOptions) -> Result<()> {
        debug!(command = "pick_workspace_and_open", "dispatching");
        self.collaborators.dialogs.pick_workspace_and_open(options).await
    }

    // =========================================================================
    // RECENT PATHS
    // =========================================================================

    /// Entries flagged `is_file` go to the file list, the rest are workspaces.
    pub async fn add_recently_opened(&self, paths: &[RecentPath]) -> Result<()> {
        debug!(command = "add_recently_opened", count = paths.len(), "dispatching");
        let (files, workspaces): (Vec<&RecentPath>, Vec<&RecentPath>) =
            paths.iter().partition(|p| p.is_file);
        let files: Vec<PathBuf> = files.into_iter().map(|p| p.path.clone()).collect();
        let workspaces: Vec<PathBuf> = workspaces.into_iter().map(|p| p.path.clone()).collect();

        self.collaborators
            .history
            .add_recently_opened(&workspaces, &files);
        Ok(())
    }

    pub async fn remove_from_recently_opened(&self, paths: &[PathBuf]) -> Result<()> {
        debug!(command = "remove_from_recently_opened", count = paths.len(), "dispatching");
        self.collaborators.history.remove_from_recently_opened(paths);
        Ok(())
    }

    pub async fn clear_recently_opened(&self) -> Result<()> {
        debug!(command = "clear_recently_opened", "dispatching");
        self.collaborators.history.clear_recently_opened();
        Ok(())
    }

    // =========================================================================
    // WINDOW SET
    // =========================================================================

    /// Open `paths` with the startup arguments. An empty list does nothing.
    pub async fn open_window(&self, paths: Vec<PathBuf>, options: OpenOptions) -> Result<()> {
        if paths.is_empty() {
            debug!(command = "open_window", "no paths, nothing to open");
            return Ok(());
        }

        debug!(command = "open_window", count = paths.len(), "dispatching");
        let request = OpenRequest::new(OpenContext::Api, self.launch_args.clone())
            .with_paths(paths)
            .with_options(options);
        self.collaborators.windows.open(request);
        Ok(())
    }

    pub async fn open_new_window(&self) -> Result<()> {
        debug!(command = "open_new_window", "dispatching");
        self.collaborators.windows.open_new(OpenContext::Api);
        Ok(())
    }

    /// One summary per live window.
    pub async fn get_windows(&self) -> Result<Vec<WindowSummary>> {
        let summaries = self
            .lookup
            .all()
            .into_iter()
            .map(|w| {
                let workspace = w.workspace();
                WindowSummary {
                    id: w.id(),
                    title: w.title(),
                    workspace_path: workspace.workspace_path,
                    folder_path: workspace.folder_path,
                    filename: w.represented_filename(),
                }
            })
            .collect();
        Ok(summaries)
    }

    pub async fn get_window_count(&self) -> Result<usize> {
        Ok(self.lookup.count())
    }

    /// Closes every window running an extension host for one of `paths`.
    pub async fn close_extension_host_window(&self, paths: &[String]) -> Result<()> {
        let registry = self.lookup.registry();
        for path in paths {
            for window in registry.find_on_extension_development_path(path) {
                info!(window_id = %window.id(), path = %path, "closing extension host window");
                window.close();
            }
        }
        Ok(())
    }

    pub async fn quit(&self) -> Result<()> {
        info!("quit requested");
        self.collaborators.windows.quit();
        Ok(())
    }

    // =========================================================================
    // PROCESS
    // =========================================================================

    /// Forward a log line from another process.
    pub async fn log(&self, level: LogLevel, messages: &[String]) -> Result<()> {
        let message = messages.join(" ");
        match level {
            LogLevel::Trace => tracing::trace!(target: "casement::remote", "{message}"),
            LogLevel::Debug => tracing::debug!(target: "casement::remote", "{message}"),
            LogLevel::Info => tracing::info!(target: "casement::remote", "{message}"),
            LogLevel::Warn => tracing::warn!(target: "casement::remote", "{message}"),
            LogLevel::Error => tracing::error!(target: "casement::remote", "{message}"),
        }
        Ok(())
    }

    pub async fn show_item_in_folder(&self, path: &Path) -> Result<()> {
        debug!(command = "show_item_in_folder", path = %path.display(), "dispatching");
        self.collaborators.shell.show_item_in_folder(path)
    }

    pub async fn open_external(&self, url: &str) -> Result<bool> {
        debug!(command = "open_external", url, "dispatching");
        self.collaborators.shell.open_external(url).await
    }

    pub async fn start_crash_reporter(&self, options: CrashReporterOptions) -> Result<()> {
        debug!(command = "start_crash_reporter", product = %options.product_name, "dispatching");
        self.collaborators.shell.start_crash_reporter(options)
    }

    pub async fn relaunch(&self, options: RelaunchOptions) -> Result<()> {
        info!(
            add = ?options.add_args,
            remove = ?options.remove_args,
            "relaunch requested"
        );
        self.collaborators.lifecycle.relaunch(options)
    }

    pub async fn when_shared_process_ready(&self) -> Result<()> {
        self.collaborators.shared_process.when_ready().await
    }

    pub async fn toggle_shared_process(&self) -> Result<()> {
        debug!(command = "toggle_shared_process", "dispatching");
        self.collaborators.shared_process.toggle();
        Ok(())
    }
}
