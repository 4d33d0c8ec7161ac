//! Collaborator boundary for the window command facade.
//!
//! [`capabilities`] declares the traits the facade calls through;
//! [`headless`] provides in-memory implementations used by the `casement`
//! binary when no windowing backend is attached.

pub mod capabilities;
pub mod crash_report;
pub mod headless;
pub mod paths;

pub use capabilities::{
    Dialogs, HistoryStore, LifecycleManager, SharedProcess, ShellIntegration, UrlEventSource,
    UrlListener, WindowHandle, WindowRegistry,
};
pub use crash_report::CrashReporter;
pub use paths::{config_dir, crash_report_dir, data_dir, ensure_dirs, log_dir};
