//! Recording fakes for every collaborator.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use casement_common::{
    CrashReporterOptions, DevToolsMode, Emitter, LaunchArgs, OpenContext, OpenRequest, OpenedUrl,
    PickOptions, PlatformError, RecentlyOpened, RelaunchOptions, Result, Subscription, WindowId,
    WindowWorkspace,
};
use casement_platform::{
    Dialogs, HistoryStore, LifecycleManager, SharedProcess, ShellIntegration, UrlEventSource,
    UrlListener, WindowHandle, WindowRegistry,
};

use crate::dispatcher::{Collaborators, CommandDispatcher};
use crate::facade::WindowsFacade;
use crate::router::UrlRoutes;

#[derive(Debug, Clone, Default)]
pub struct FakeState {
    pub title: String,
    pub workspace: WindowWorkspace,
    pub extension_development_path: Option<String>,
    pub focused: bool,
    pub maximized: bool,
    pub full_screen: bool,
    pub hidden_title_bar: bool,
    pub represented_filename: Option<String>,
    pub document_edited: bool,
    pub dev_tools_open: bool,
}

/// A window that records every mutating call by name.
pub struct FakeWindow {
    id: WindowId,
    calls: Mutex<Vec<&'static str>>,
    state: Mutex<FakeState>,
}

impl FakeWindow {
    pub fn new(id: u32) -> Self {
        Self::with_state(
            id,
            FakeState {
                title: format!("window {id}"),
                ..Default::default()
            },
        )
    }

    pub fn with_state(id: u32, state: FakeState) -> Self {
        Self {
            id: WindowId(id),
            calls: Mutex::new(Vec::new()),
            state: Mutex::new(state),
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, name: &str) -> usize {
        self.calls().iter().filter(|c| **c == name).count()
    }

    pub fn state(&self) -> FakeState {
        self.state.lock().unwrap().clone()
    }

    fn record(&self, name: &'static str) {
        self.calls.lock().unwrap().push(name);
    }
}

impl WindowHandle for FakeWindow {
    fn id(&self) -> WindowId {
        self.id
    }

    fn title(&self) -> String {
        self.state().title
    }

    fn workspace(&self) -> WindowWorkspace {
        self.state().workspace
    }

    fn extension_development_path(&self) -> Option<String> {
        self.state().extension_development_path
    }

    fn reload(&self) {
        self.record("reload");
    }

    fn focus(&self) {
        self.record("focus");
        self.state.lock().unwrap().focused = true;
    }

    fn is_focused(&self) -> bool {
        self.state().focused
    }

    fn show(&self) {
        self.record("show");
    }

    fn close(&self) {
        self.record("close");
    }

    fn maximize(&self) {
        self.record("maximize");
        self.state.lock().unwrap().maximized = true;
    }

    fn unmaximize(&self) {
        self.record("unmaximize");
        self.state.lock().unwrap().maximized = false;
    }

    fn is_maximized(&self) -> bool {
        self.state().maximized
    }

    fn is_full_screen(&self) -> bool {
        self.state().full_screen
    }

    fn toggle_full_screen(&self) {
        self.record("toggle_full_screen");
        let mut state = self.state.lock().unwrap();
        state.full_screen = !state.full_screen;
    }

    fn on_title_double_click(&self) {
        self.record("title_double_click");
    }

    fn has_hidden_title_bar_style(&self) -> bool {
        self.state().hidden_title_bar
    }

    fn represented_filename(&self) -> Option<String> {
        self.state().represented_filename
    }

    fn set_represented_filename(&self, filename: &str) {
        self.record("set_represented_filename");
        self.state.lock().unwrap().represented_filename = Some(filename.to_string());
    }

    fn is_document_edited(&self) -> bool {
        self.state().document_edited
    }

    fn set_document_edited(&self, edited: bool) {
        self.record("set_document_edited");
        self.state.lock().unwrap().document_edited = edited;
    }

    fn is_dev_tools_opened(&self) -> bool {
        self.state().dev_tools_open
    }

    fn open_dev_tools(&self, mode: DevToolsMode) {
        self.record(match mode {
            DevToolsMode::Docked => "open_dev_tools",
            DevToolsMode::Undocked => "open_dev_tools_undocked",
        });
        self.state.lock().unwrap().dev_tools_open = true;
    }

    fn toggle_dev_tools(&self) {
        self.record("toggle_dev_tools");
        let mut state = self.state.lock().unwrap();
        state.dev_tools_open = !state.dev_tools_open;
    }
}

#[derive(Default)]
pub struct FakeRegistry {
    windows: Mutex<Vec<Arc<FakeWindow>>>,
    opened: Mutex<Vec<OpenRequest>>,
    new_windows: Mutex<Vec<OpenContext>>,
    quits: AtomicUsize,
    lookups: AtomicUsize,
}

impl FakeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, window: FakeWindow) -> Arc<FakeWindow> {
        let window = Arc::new(window);
        self.windows.lock().unwrap().push(Arc::clone(&window));
        window
    }

    /// Simulate the window closing.
    pub fn remove(&self, id: WindowId) {
        self.windows.lock().unwrap().retain(|w| w.id != id);
    }

    pub fn opened(&self) -> Vec<OpenRequest> {
        self.opened.lock().unwrap().clone()
    }

    pub fn new_windows(&self) -> Vec<OpenContext> {
        self.new_windows.lock().unwrap().clone()
    }

    pub fn quits(&self) -> usize {
        self.quits.load(Ordering::SeqCst)
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl WindowRegistry for FakeRegistry {
    fn find_by_id(&self, id: WindowId) -> Option<Arc<dyn WindowHandle>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.windows
            .lock()
            .unwrap()
            .iter()
            .find(|w| w.id == id)
            .map(|w| Arc::clone(w) as Arc<dyn WindowHandle>)
    }

    fn all(&self) -> Vec<Arc<dyn WindowHandle>> {
        self.windows
            .lock()
            .unwrap()
            .iter()
            .map(|w| Arc::clone(w) as Arc<dyn WindowHandle>)
            .collect()
    }

    fn open(&self, request: OpenRequest) {
        self.opened.lock().unwrap().push(request);
    }

    fn open_new(&self, context: OpenContext) {
        self.new_windows.lock().unwrap().push(context);
    }

    fn quit(&self) {
        self.quits.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HistoryCall {
    Add(Vec<PathBuf>, Vec<PathBuf>),
    Remove(Vec<PathBuf>),
    Clear,
    List(WindowWorkspace),
}

#[derive(Default)]
pub struct FakeHistory {
    calls: Mutex<Vec<HistoryCall>>,
    answer: Mutex<RecentlyOpened>,
}

impl FakeHistory {
    pub fn calls(&self) -> Vec<HistoryCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn answer_with(&self, recents: RecentlyOpened) {
        *self.answer.lock().unwrap() = recents;
    }
}

impl HistoryStore for FakeHistory {
    fn add_recently_opened(&self, workspaces: &[PathBuf], files: &[PathBuf]) {
        self.calls
            .lock()
            .unwrap()
            .push(HistoryCall::Add(workspaces.to_vec(), files.to_vec()));
    }

    fn remove_from_recently_opened(&self, paths: &[PathBuf]) {
        self.calls
            .lock()
            .unwrap()
            .push(HistoryCall::Remove(paths.to_vec()));
    }

    fn clear_recently_opened(&self) {
        self.calls.lock().unwrap().push(HistoryCall::Clear);
    }

    fn recently_opened(&self, context: &WindowWorkspace) -> RecentlyOpened {
        self.calls
            .lock()
            .unwrap()
            .push(HistoryCall::List(context.clone()));
        self.answer.lock().unwrap().clone()
    }
}

#[derive(Default)]
pub struct FakeLifecycle {
    relaunches: Mutex<Vec<RelaunchOptions>>,
    fail: AtomicBool,
}

impl FakeLifecycle {
    pub fn relaunches(&self) -> Vec<RelaunchOptions> {
        self.relaunches.lock().unwrap().clone()
    }

    pub fn fail_next(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }
}

impl LifecycleManager for FakeLifecycle {
    fn relaunch(&self, options: RelaunchOptions) -> Result<()> {
        if self.fail.swap(false, Ordering::SeqCst) {
            return Err(PlatformError::RelaunchError("exec failed".into()).into());
        }
        self.relaunches.lock().unwrap().push(options);
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeSharedProcess {
    waits: AtomicUsize,
    toggles: AtomicUsize,
}

impl FakeSharedProcess {
    pub fn waits(&self) -> usize {
        self.waits.load(Ordering::SeqCst)
    }

    pub fn toggles(&self) -> usize {
        self.toggles.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SharedProcess for FakeSharedProcess {
    async fn when_ready(&self) -> Result<()> {
        self.waits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn toggle(&self) {
        self.toggles.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
pub struct FakeShell {
    revealed: Mutex<Vec<PathBuf>>,
    external: Mutex<Vec<String>>,
    crash_reporters: Mutex<Vec<CrashReporterOptions>>,
    reject: AtomicBool,
}

impl FakeShell {
    pub fn revealed(&self) -> Vec<PathBuf> {
        self.revealed.lock().unwrap().clone()
    }

    pub fn external(&self) -> Vec<String> {
        self.external.lock().unwrap().clone()
    }

    pub fn crash_reporters(&self) -> Vec<CrashReporterOptions> {
        self.crash_reporters.lock().unwrap().clone()
    }

    /// Make every following call fail.
    pub fn reject_all(&self) {
        self.reject.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> Result<()> {
        if self.reject.load(Ordering::SeqCst) {
            return Err(PlatformError::ShellError("rejected".into()).into());
        }
        Ok(())
    }
}

#[async_trait]
impl ShellIntegration for FakeShell {
    fn show_item_in_folder(&self, path: &Path) -> Result<()> {
        self.check()?;
        self.revealed.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }

    async fn open_external(&self, url: &str) -> Result<bool> {
        self.check()?;
        self.external.lock().unwrap().push(url.to_string());
        Ok(url.starts_with("https:"))
    }

    fn start_crash_reporter(&self, options: CrashReporterOptions) -> Result<()> {
        self.check()?;
        self.crash_reporters.lock().unwrap().push(options);
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeDialogs {
    picks: Mutex<Vec<(&'static str, PickOptions)>>,
    cancel: AtomicBool,
}

impl FakeDialogs {
    pub fn picks(&self) -> Vec<(&'static str, PickOptions)> {
        self.picks.lock().unwrap().clone()
    }

    pub fn cancel_all(&self) {
        self.cancel.store(true, Ordering::SeqCst);
    }

    fn pick(&self, kind: &'static str, options: PickOptions) -> Result<()> {
        if self.cancel.load(Ordering::SeqCst) {
            return Err(PlatformError::DialogCancelled(kind.into()).into());
        }
        self.picks.lock().unwrap().push((kind, options));
        Ok(())
    }
}

#[async_trait]
impl Dialogs for FakeDialogs {
    async fn pick_file_folder_and_open(&self, options: PickOptions) -> Result<()> {
        self.pick("file_folder", options)
    }

    async fn pick_file_and_open(&self, options: PickOptions) -> Result<()> {
        self.pick("file", options)
    }

    async fn pick_folder_and_open(&self, options: PickOptions) -> Result<()> {
        self.pick("folder", options)
    }

    async fn pick_workspace_and_open(&self, options: PickOptions) -> Result<()> {
        self.pick("workspace", options)
    }
}

#[derive(Default)]
pub struct FakeUrls {
    emitter: Emitter<OpenedUrl>,
    subscriptions: AtomicUsize,
}

impl FakeUrls {
    pub fn emit(&self, url: OpenedUrl) -> usize {
        self.emitter.emit(&url)
    }

    /// Subscriptions ever created, disposed or not.
    pub fn subscriptions(&self) -> usize {
        self.subscriptions.load(Ordering::SeqCst)
    }

    pub fn live_listeners(&self) -> usize {
        self.emitter.listener_count()
    }
}

impl UrlEventSource for FakeUrls {
    fn on_open_url(&self, listener: UrlListener) -> Subscription {
        self.subscriptions.fetch_add(1, Ordering::SeqCst);
        self.emitter.subscribe(move |url| listener(url))
    }
}

/// Every fake, wired together.
pub struct Harness {
    pub registry: Arc<FakeRegistry>,
    pub history: Arc<FakeHistory>,
    pub lifecycle: Arc<FakeLifecycle>,
    pub shared_process: Arc<FakeSharedProcess>,
    pub shell: Arc<FakeShell>,
    pub dialogs: Arc<FakeDialogs>,
    pub urls: Arc<FakeUrls>,
    pub launch_args: LaunchArgs,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(FakeRegistry::new()),
            history: Arc::default(),
            lifecycle: Arc::default(),
            shared_process: Arc::default(),
            shell: Arc::default(),
            dialogs: Arc::default(),
            urls: Arc::default(),
            launch_args: LaunchArgs {
                verbose: true,
                ..Default::default()
            },
        }
    }

    pub fn collaborators(&self) -> Collaborators {
        Collaborators {
            windows: self.registry.clone(),
            history: self.history.clone(),
            lifecycle: self.lifecycle.clone(),
            shared_process: self.shared_process.clone(),
            shell: self.shell.clone(),
            dialogs: self.dialogs.clone(),
            urls: self.urls.clone(),
        }
    }

    pub fn dispatcher(&self) -> CommandDispatcher {
        CommandDispatcher::new(self.collaborators(), self.launch_args.clone())
    }

    pub fn facade(&self) -> WindowsFacade {
        WindowsFacade::new(
            self.collaborators(),
            self.launch_args.clone(),
            UrlRoutes::new("file", "^/?extension(/|$)").unwrap(),
        )
    }
}
