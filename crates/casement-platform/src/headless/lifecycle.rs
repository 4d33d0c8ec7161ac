//! Relaunch bookkeeping. The binary performs the actual re-spawn on exit.

use std::sync::{Mutex, MutexGuard, PoisonError};

use casement_common::{RelaunchOptions, Result};
use tracing::info;

use crate::capabilities::LifecycleManager;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct HeadlessLifecycle {
    current_args: Vec<String>,
    pending: Mutex<Option<Vec<String>>>,
}

impl HeadlessLifecycle {
    /// `current_args` is the command line without the program name.
    pub fn new(current_args: Vec<String>) -> Self {
        Self {
            current_args,
            pending: Mutex::new(None),
        }
    }

    /// Arguments for the next process, if a relaunch was requested.
    pub fn pending_relaunch(&self) -> Option<Vec<String>> {
        lock(&self.pending).clone()
    }
}

impl LifecycleManager for HeadlessLifecycle {
    fn relaunch(&self, options: RelaunchOptions) -> Result<()> {
        let mut args = self.current_args.clone();
        args.extend(options.add_args);
        args.retain(|arg| !options.remove_args.contains(arg));

        info!(?args, "relaunch scheduled");
        *lock(&self.pending) = Some(args);
        Ok(())
    }
}
