//! Newline-delimited JSON session over the headless collaborators.
//!
//! Every input line is either a command message (answered with one reply
//! line) or a URL event `{"open_url": "<url>"}` (not answered).

use std::path::PathBuf;
use std::sync::Arc;

use casement_common::{LaunchArgs, OpenedUrl};
use casement_facade::{Collaborators, CommandReply, UrlRoutes, WindowsFacade};
use casement_platform::headless::{
    HeadlessDialogs, HeadlessLifecycle, HeadlessSharedProcess, HeadlessShell, HeadlessUrlService,
    HeadlessWindows, RecentHistory,
};
use casement_platform::{CrashReporter, WindowRegistry};
use serde::Deserialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};

#[derive(Deserialize)]
struct UrlEvent {
    open_url: String,
}

/// Settings for the in-memory collaborators.
pub struct HeadlessOptions {
    pub hidden_title_bar: bool,
    pub max_recent_entries: usize,
    pub crash_report_dir: PathBuf,
    /// Command line without the program name, used for relaunch.
    pub current_args: Vec<String>,
}

pub struct Session {
    facade: WindowsFacade,
    windows: Arc<HeadlessWindows>,
    urls: Arc<HeadlessUrlService>,
    lifecycle: Arc<HeadlessLifecycle>,
    shared_process: Arc<HeadlessSharedProcess>,
    shell: Arc<HeadlessShell>,
}

impl Session {
    pub fn headless(options: HeadlessOptions, launch_args: LaunchArgs, routes: UrlRoutes) -> Self {
        let windows = Arc::new(HeadlessWindows::new(options.hidden_title_bar));
        let urls = Arc::new(HeadlessUrlService::new());
        let lifecycle = Arc::new(HeadlessLifecycle::new(options.current_args));
        let shared_process = Arc::new(HeadlessSharedProcess::new());
        let shell = Arc::new(HeadlessShell::new(CrashReporter::new(
            options.crash_report_dir,
        )));

        let collaborators = Collaborators {
            windows: windows.clone(),
            history: Arc::new(RecentHistory::new(options.max_recent_entries)),
            lifecycle: lifecycle.clone(),
            shared_process: shared_process.clone(),
            shell: shell.clone(),
            dialogs: Arc::new(HeadlessDialogs),
            urls: urls.clone(),
        };

        Self {
            facade: WindowsFacade::new(collaborators, launch_args, routes),
            windows,
            urls,
            lifecycle,
            shared_process,
            shell,
        }
    }

    pub fn facade(&self) -> &WindowsFacade {
        &self.facade
    }

    pub fn windows(&self) -> &Arc<HeadlessWindows> {
        &self.windows
    }

    pub fn shell(&self) -> &Arc<HeadlessShell> {
        &self.shell
    }

    pub fn mark_shared_process_ready(&self) {
        self.shared_process.mark_ready();
    }

    /// Arguments for the next process, if a relaunch was requested.
    pub fn pending_relaunch(&self) -> Option<Vec<String>> {
        self.lifecycle.pending_relaunch()
    }

    /// Handle one input line. Returns the reply for command messages.
    pub async fn handle_line(&self, line: &str) -> Option<CommandReply> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        if let Ok(event) = serde_json::from_str::<UrlEvent>(line) {
            self.open_url(&event.open_url);
            return None;
        }

        Some(self.facade.handle_message(line).await)
    }

    fn open_url(&self, raw: &str) {
        match OpenedUrl::parse(raw) {
            Ok(url) => {
                let delivered = self.urls.open_url(&url);
                info!(%url, delivered, "url event");
            }
            Err(e) => warn!(url = raw, error = %e, "ignoring url event"),
        }
    }

    /// Read lines until end of input or until a quit was requested, writing
    /// one reply line per command.
    pub async fn run<R, W>(&mut self, reader: R, mut writer: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            if let Some(reply) = self.handle_line(&line).await {
                writer.write_all(reply.to_json().as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }

            if self.windows.is_quit_requested() {
                info!("quit requested, leaving command loop");
                break;
            }
        }

        self.shutdown();
        Ok(())
    }

    /// Release the facade's subscriptions. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if self.facade.is_disposed() {
            return;
        }
        self.facade.dispose();
        info!(windows = self.windows.count(), "session shut down");
    }
}
