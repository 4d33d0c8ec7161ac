pub mod dispose;
pub mod errors;
pub mod events;
pub mod id;
pub mod opened_url;
pub mod types;

pub use dispose::{DisposableStore, Subscription};
pub use errors::{CasementError, ConfigError, PlatformError};
pub use events::Emitter;
pub use id::{WindowId, WindowIdSequence};
pub use opened_url::OpenedUrl;
pub use types::{
    CrashReporterOptions, DevToolsMode, LaunchArgs, LogLevel, OpenContext, OpenOptions,
    OpenRequest, PickOptions, RecentPath, RecentlyOpened, RelaunchOptions, WindowSummary,
    WindowWorkspace,
};

pub type Result<T> = std::result::Result<T, CasementError>;
