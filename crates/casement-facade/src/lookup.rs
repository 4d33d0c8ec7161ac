//! Window lookup over the external registry.

use std::sync::Arc;

use casement_common::WindowId;
use casement_platform::{WindowHandle, WindowRegistry};
use tracing::debug;

/// Resolves window ids to live handles. Handles are never cached: every
/// call asks the registry again.
#[derive(Clone)]
pub struct WindowLookup {
    registry: Arc<dyn WindowRegistry>,
}

impl WindowLookup {
    pub fn new(registry: Arc<dyn WindowRegistry>) -> Self {
        Self { registry }
    }

    /// The live window with this id, or `None` if it is unknown or closed.
    pub fn resolve(&self, id: WindowId) -> Option<Arc<dyn WindowHandle>> {
        let handle = self.registry.find_by_id(id);
        if handle.is_none() {
            debug!(window_id = %id, "window not found");
        }
        handle
    }

    pub fn all(&self) -> Vec<Arc<dyn WindowHandle>> {
        self.registry.all()
    }

    pub fn count(&self) -> usize {
        self.registry.count()
    }

    pub fn registry(&self) -> &Arc<dyn WindowRegistry> {
        &self.registry
    }
}
