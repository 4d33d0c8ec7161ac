//! In-memory window registry.
//!
//! Windows have no surface; each one only tracks the state the facade can
//! observe or mutate. Closed windows disappear from lookups immediately.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use casement_common::{
    DevToolsMode, OpenContext, OpenRequest, WindowId, WindowIdSequence, WindowWorkspace,
};
use tracing::{debug, info};

use crate::capabilities::{WindowHandle, WindowRegistry};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Observable state of a headless window.
#[derive(Debug, Clone, Default)]
pub struct WindowState {
    pub title: String,
    pub workspace: WindowWorkspace,
    pub extension_development_path: Option<String>,
    pub visible: bool,
    pub maximized: bool,
    pub full_screen: bool,
    pub hidden_title_bar: bool,
    pub represented_filename: Option<String>,
    pub document_edited: bool,
    pub dev_tools: Option<DevToolsMode>,
    pub reload_count: u32,
    pub closed: bool,
}

pub struct HeadlessWindow {
    id: WindowId,
    focused: Arc<Mutex<Option<WindowId>>>,
    state: Mutex<WindowState>,
}

impl HeadlessWindow {
    /// Snapshot of the window state.
    pub fn state(&self) -> WindowState {
        lock(&self.state).clone()
    }

    fn is_closed(&self) -> bool {
        lock(&self.state).closed
    }

    fn load(&self, workspace: WindowWorkspace) {
        let mut state = lock(&self.state);
        state.title = title_for(&workspace);
        state.workspace = workspace;
    }
}

impl WindowHandle for HeadlessWindow {
    fn id(&self) -> WindowId {
        self.id
    }

    fn title(&self) -> String {
        lock(&self.state).title.clone()
    }

    fn workspace(&self) -> WindowWorkspace {
        lock(&self.state).workspace.clone()
    }

    fn extension_development_path(&self) -> Option<String> {
        lock(&self.state).extension_development_path.clone()
    }

    fn reload(&self) {
        lock(&self.state).reload_count += 1;
        debug!(window_id = %self.id, "window reloaded");
    }

    fn focus(&self) {
        lock(&self.state).visible = true;
        *lock(&self.focused) = Some(self.id);
    }

    fn is_focused(&self) -> bool {
        *lock(&self.focused) == Some(self.id)
    }

    fn show(&self) {
        lock(&self.state).visible = true;
    }

    fn close(&self) {
        lock(&self.state).closed = true;
        let mut focused = lock(&self.focused);
        if *focused == Some(self.id) {
            *focused = None;
        }
        info!(window_id = %self.id, "window closed");
    }

    fn maximize(&self) {
        lock(&self.state).maximized = true;
    }

    fn unmaximize(&self) {
        lock(&self.state).maximized = false;
    }

    fn is_maximized(&self) -> bool {
        lock(&self.state).maximized
    }

    fn is_full_screen(&self) -> bool {
        lock(&self.state).full_screen
    }

    fn toggle_full_screen(&self) {
        let mut state = lock(&self.state);
        state.full_screen = !state.full_screen;
    }

    fn on_title_double_click(&self) {
        let mut state = lock(&self.state);
        state.maximized = !state.maximized;
    }

    fn has_hidden_title_bar_style(&self) -> bool {
        lock(&self.state).hidden_title_bar
    }

    fn represented_filename(&self) -> Option<String> {
        lock(&self.state).represented_filename.clone()
    }

    fn set_represented_filename(&self, filename: &str) {
        lock(&self.state).represented_filename = Some(filename.to_string());
    }

    fn is_document_edited(&self) -> bool {
        lock(&self.state).document_edited
    }

    fn set_document_edited(&self, edited: bool) {
        lock(&self.state).document_edited = edited;
    }

    fn is_dev_tools_opened(&self) -> bool {
        lock(&self.state).dev_tools.is_some()
    }

    fn open_dev_tools(&self, mode: DevToolsMode) {
        lock(&self.state).dev_tools = Some(mode);
    }

    fn toggle_dev_tools(&self) {
        let mut state = lock(&self.state);
        state.dev_tools = match state.dev_tools {
            Some(_) => None,
            None => Some(DevToolsMode::Docked),
        };
    }
}

/// Window title for a workspace: folder or workspace name, else the first file.
fn title_for(workspace: &WindowWorkspace) -> String {
    let name = |p: &Path| {
        p.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| p.display().to_string())
    };

    let root = workspace
        .workspace_path
        .as_deref()
        .or(workspace.folder_path.as_deref())
        .map(name);
    let file = workspace.files_to_open.first().map(|p| name(p));

    match (file, root) {
        (Some(file), Some(root)) => format!("{file} - {root} - casement"),
        (None, Some(root)) => format!("{root} - casement"),
        (Some(file), None) => format!("{file} - casement"),
        (None, None) => "casement".to_string(),
    }
}

/// Split requested paths into the folder a window opens and the files it shows.
fn workspace_for(paths: &[PathBuf]) -> WindowWorkspace {
    let mut workspace = WindowWorkspace::default();
    for path in paths {
        if path.is_dir() && workspace.folder_path.is_none() {
            workspace.folder_path = Some(path.clone());
        } else {
            workspace.files_to_open.push(path.clone());
        }
    }
    workspace
}

/// Registry of headless windows.
pub struct HeadlessWindows {
    ids: WindowIdSequence,
    focused: Arc<Mutex<Option<WindowId>>>,
    windows: Mutex<Vec<Arc<HeadlessWindow>>>,
    hidden_title_bar: bool,
    quit_requested: AtomicBool,
}

impl HeadlessWindows {
    /// `hidden_title_bar` applies to every window this registry creates.
    pub fn new(hidden_title_bar: bool) -> Self {
        Self {
            ids: WindowIdSequence::new(),
            focused: Arc::new(Mutex::new(None)),
            windows: Mutex::new(Vec::new()),
            hidden_title_bar,
            quit_requested: AtomicBool::new(false),
        }
    }

    /// Create and focus a new window showing `workspace`.
    pub fn create(&self, workspace: WindowWorkspace, extension_path: Option<String>) -> Arc<HeadlessWindow> {
        let id = self.ids.next_id();
        let window = Arc::new(HeadlessWindow {
            id,
            focused: Arc::clone(&self.focused),
            state: Mutex::new(WindowState {
                title: title_for(&workspace),
                workspace,
                extension_development_path: extension_path,
                visible: true,
                hidden_title_bar: self.hidden_title_bar,
                ..Default::default()
            }),
        });
        *lock(&self.focused) = Some(id);
        lock(&self.windows).push(Arc::clone(&window));
        info!(window_id = %id, title = %window.title(), "window opened");
        window
    }

    /// Concrete handle, for inspecting state.
    pub fn window(&self, id: WindowId) -> Option<Arc<HeadlessWindow>> {
        self.live().into_iter().find(|w| w.id == id)
    }

    pub fn is_quit_requested(&self) -> bool {
        self.quit_requested.load(Ordering::SeqCst)
    }

    fn live(&self) -> Vec<Arc<HeadlessWindow>> {
        let mut windows = lock(&self.windows);
        windows.retain(|w| !w.is_closed());
        windows.clone()
    }

    fn focused_window(&self) -> Option<Arc<HeadlessWindow>> {
        let focused = *lock(&self.focused);
        focused.and_then(|id| self.window(id))
    }
}

impl WindowRegistry for HeadlessWindows {
    fn find_by_id(&self, id: WindowId) -> Option<Arc<dyn WindowHandle>> {
        self.window(id).map(|w| w as Arc<dyn WindowHandle>)
    }

    fn all(&self) -> Vec<Arc<dyn WindowHandle>> {
        self.live()
            .into_iter()
            .map(|w| w as Arc<dyn WindowHandle>)
            .collect()
    }

    fn count(&self) -> usize {
        self.live().len()
    }

    fn open(&self, request: OpenRequest) {
        debug!(context = ?request.context, paths = request.paths_to_open.len(), "open request");
        let extension_path = request.cli.extension_development_path.clone();

        if let Some(target) = request.window_to_use.and_then(|id| self.window(id)) {
            let workspace = if request.force_empty {
                WindowWorkspace::default()
            } else {
                workspace_for(&request.paths_to_open)
            };
            target.load(workspace);
            target.focus();
            return;
        }

        if request.paths_to_open.is_empty() {
            self.create(WindowWorkspace::default(), extension_path);
            return;
        }

        let reuse = !request.force_new_window
            && !request.cli.new_window
            && (request.force_reuse_window || request.cli.reuse_window);
        if reuse {
            if let Some(target) = self.focused_window() {
                let mut workspace = target.workspace();
                let incoming = workspace_for(&request.paths_to_open);
                workspace.files_to_open.extend(incoming.files_to_open);
                if workspace.folder_path.is_none() {
                    workspace.folder_path = incoming.folder_path;
                }
                target.load(workspace);
                target.focus();
                return;
            }
        }

        self.create(workspace_for(&request.paths_to_open), extension_path);
    }

    fn open_new(&self, context: OpenContext) {
        debug!(?context, "open new window");
        self.create(WindowWorkspace::default(), None);
    }

    fn quit(&self) {
        info!("quit requested, closing all windows");
        for window in self.live() {
            window.close();
        }
        self.quit_requested.store(true, Ordering::SeqCst);
    }
}
