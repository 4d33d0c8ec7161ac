//! In-memory collaborators for running the facade without a desktop.

mod dialogs;
mod history;
mod lifecycle;
mod shared_process;
mod shell;
mod urls;
mod windows;

pub use dialogs::HeadlessDialogs;
pub use history::RecentHistory;
pub use lifecycle::HeadlessLifecycle;
pub use shared_process::HeadlessSharedProcess;
pub use shell::HeadlessShell;
pub use urls::HeadlessUrlService;
pub use windows::{HeadlessWindow, HeadlessWindows, WindowState};
