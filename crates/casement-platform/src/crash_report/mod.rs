//! Crash reporting: once started, panics are written to disk as JSON reports.

mod report;
mod sanitize;

pub use report::write_crash_report;
pub use sanitize::sanitize_secrets;

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use casement_common::{CrashReporterOptions, PlatformError};
use tracing::info;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Process crash reporter. Can be started once.
pub struct CrashReporter {
    directory: PathBuf,
    install_hook: bool,
    active: Arc<Mutex<Option<CrashReporterOptions>>>,
}

impl CrashReporter {
    /// A reporter that installs a panic hook when started.
    pub fn new(directory: PathBuf) -> Self {
        Self {
            directory,
            install_hook: true,
            active: Arc::new(Mutex::new(None)),
        }
    }

    /// A reporter that records its options but leaves the panic hook alone.
    pub fn detached(directory: PathBuf) -> Self {
        Self {
            install_hook: false,
            ..Self::new(directory)
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Options the reporter was started with, if it has been started.
    pub fn options(&self) -> Option<CrashReporterOptions> {
        lock(&self.active).clone()
    }

    pub fn start(&self, options: CrashReporterOptions) -> Result<(), PlatformError> {
        if options.product_name.trim().is_empty() {
            return Err(PlatformError::CrashReporterError(
                "product name is required".into(),
            ));
        }
        if options.upload_to_server && options.submit_url.trim().is_empty() {
            return Err(PlatformError::CrashReporterError(
                "upload requested without a submit url".into(),
            ));
        }

        let mut active = lock(&self.active);
        if active.is_some() {
            return Err(PlatformError::CrashReporterError(
                "crash reporter already started".into(),
            ));
        }

        info!(
            product = %options.product_name,
            upload = options.upload_to_server,
            "crash reporter started"
        );
        *active = Some(options);
        drop(active);

        if self.install_hook {
            install_panic_hook(self.directory.clone(), Arc::clone(&self.active));
        }
        Ok(())
    }
}

fn install_panic_hook(directory: PathBuf, active: Arc<Mutex<Option<CrashReporterOptions>>>) {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        // try_lock: the panic may have happened while the options were locked.
        let options = active
            .try_lock()
            .ok()
            .and_then(|guard| guard.clone())
            .unwrap_or_default();

        if let Some(path) = write_crash_report(info, &options, &directory) {
            eprintln!("\n--- {} crashed ---", options.product_name);
            eprintln!("Crash report written to: {}", path.display());
        }

        default_hook(info);
    }));
}
