//! In-memory recently opened list.

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use casement_common::{RecentlyOpened, WindowWorkspace};

use crate::capabilities::HistoryStore;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Move `path` to the front of `list`, dropping any earlier occurrence.
fn push_front_distinct(list: &mut Vec<PathBuf>, path: &PathBuf) {
    list.retain(|p| p != path);
    list.insert(0, path.clone());
}

/// `leading` first, then `rest`, without duplicates, capped at `max`.
fn merged(leading: impl IntoIterator<Item = PathBuf>, rest: &[PathBuf], max: usize) -> Vec<PathBuf> {
    let mut out: Vec<PathBuf> = Vec::new();
    for path in leading.into_iter().chain(rest.iter().cloned()) {
        if !out.contains(&path) {
            out.push(path);
        }
    }
    out.truncate(max);
    out
}

pub struct RecentHistory {
    max_entries: usize,
    entries: Mutex<RecentlyOpened>,
}

impl RecentHistory {
    pub fn new(max_entries: usize) -> Self {
        Self {
            max_entries,
            entries: Mutex::new(RecentlyOpened::default()),
        }
    }

    /// Stored entries, most recent first.
    pub fn snapshot(&self) -> RecentlyOpened {
        lock(&self.entries).clone()
    }
}

impl HistoryStore for RecentHistory {
    fn add_recently_opened(&self, workspaces: &[PathBuf], files: &[PathBuf]) {
        let mut entries = lock(&self.entries);
        for path in workspaces {
            push_front_distinct(&mut entries.workspaces, path);
        }
        for path in files {
            push_front_distinct(&mut entries.files, path);
        }
        entries.workspaces.truncate(self.max_entries);
        entries.files.truncate(self.max_entries);
    }

    fn remove_from_recently_opened(&self, paths: &[PathBuf]) {
        let mut entries = lock(&self.entries);
        entries.workspaces.retain(|p| !paths.contains(p));
        entries.files.retain(|p| !paths.contains(p));
    }

    fn clear_recently_opened(&self) {
        *lock(&self.entries) = RecentlyOpened::default();
    }

    fn recently_opened(&self, context: &WindowWorkspace) -> RecentlyOpened {
        let entries = lock(&self.entries);
        let current = context
            .workspace_path
            .iter()
            .chain(context.folder_path.iter())
            .cloned();

        RecentlyOpened {
            workspaces: merged(current, &entries.workspaces, self.max_entries),
            files: merged(
                context.files_to_open.iter().cloned(),
                &entries.files,
                self.max_entries,
            ),
        }
    }
}
