//! Command dispatch against the window registry and process capabilities.
//!
//! Every identifier-addressed command goes through [`CommandDispatcher::with_window`]:
//! a window that cannot be resolved is skipped silently and the caller
//! receives the command's fallback value.

mod process;
mod window;


use std::sync::Arc;

use casement_common::{LaunchArgs, WindowId};
use casement_platform::{
    Dialogs, HistoryStore, LifecycleManager, SharedProcess, ShellIntegration, UrlEventSource,
    WindowHandle, WindowRegistry,
};
use tracing::debug;

use crate::lookup::WindowLookup;

/// The external capabilities the facade calls through.
#[derive(Clone)]
pub struct Collaborators {
    pub windows: Arc<dyn WindowRegistry>,
    pub history: Arc<dyn HistoryStore>,
    pub lifecycle: Arc<dyn LifecycleManager>,
    pub shared_process: Arc<dyn SharedProcess>,
    pub shell: Arc<dyn ShellIntegration>,
    pub dialogs: Arc<dyn Dialogs>,
    pub urls: Arc<dyn UrlEventSource>,
}

/// One entry point per command.
///
/// Holds no mutable state of its own; every call completes exactly once.
#[derive(Clone)]
pub struct CommandDispatcher {
    lookup: WindowLookup,
    collaborators: Collaborators,
    launch_args: LaunchArgs,
}

impl CommandDispatcher {
    pub fn new(collaborators: Collaborators, launch_args: LaunchArgs) -> Self {
        Self {
            lookup: WindowLookup::new(Arc::clone(&collaborators.windows)),
            collaborators,
            launch_args,
        }
    }

    pub fn lookup(&self) -> &WindowLookup {
        &self.lookup
    }

    pub fn collaborators(&self) -> &Collaborators {
        &self.collaborators
    }

    /// Process-wide startup arguments merged into every open request.
    pub fn launch_args(&self) -> &LaunchArgs {
        &self.launch_args
    }

    /// Resolve-or-skip: run `action` on the window if it is still open,
    /// otherwise return `fallback` without touching anything.
    fn with_window<T>(
        &self,
        id: WindowId,
        command: &'static str,
        fallback: T,
        action: impl FnOnce(&dyn WindowHandle) -> T,
    ) -> T {
        debug!(window_id = %id, command, "dispatching window command");
        match self.lookup.resolve(id) {
            Some(window) => action(window.as_ref()),
            None => {
                debug!(window_id = %id, command, "target window gone, skipping");
                fallback
            }
        }
    }
}
