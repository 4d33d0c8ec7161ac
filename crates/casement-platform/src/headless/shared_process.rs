//! Readiness and visibility of the shared background process.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use casement_common::{PlatformError, Result};
use tokio::sync::watch;
use tracing::{debug, info};

use crate::capabilities::SharedProcess;

pub struct HeadlessSharedProcess {
    ready: watch::Sender<bool>,
    visible: AtomicBool,
}

impl HeadlessSharedProcess {
    pub fn new() -> Self {
        let (ready, _) = watch::channel(false);
        Self {
            ready,
            visible: AtomicBool::new(false),
        }
    }

    /// Mark the process ready, releasing every pending `when_ready`.
    pub fn mark_ready(&self) {
        self.ready.send_replace(true);
        info!("shared process ready");
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }
}

impl Default for HeadlessSharedProcess {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SharedProcess for HeadlessSharedProcess {
    async fn when_ready(&self) -> Result<()> {
        let mut rx = self.ready.subscribe();
        rx.wait_for(|ready| *ready)
            .await
            .map_err(|_| PlatformError::SharedProcessError("shared process went away".into()))?;
        Ok(())
    }

    fn toggle(&self) {
        let visible = !self.visible.fetch_xor(true, Ordering::SeqCst);
        debug!(visible, "shared process window toggled");
    }
}
