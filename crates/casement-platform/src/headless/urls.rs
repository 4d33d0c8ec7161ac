//! Inbound "open URL" events, fed by the binary.

use casement_common::{Emitter, OpenedUrl, Subscription};
use tracing::debug;

use crate::capabilities::{UrlEventSource, UrlListener};

#[derive(Default)]
pub struct HeadlessUrlService {
    emitter: Emitter<OpenedUrl>,
}

impl HeadlessUrlService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver a URL to every listener. Returns how many listeners saw it.
    pub fn open_url(&self, url: &OpenedUrl) -> usize {
        let delivered = self.emitter.emit(url);
        debug!(%url, delivered, "url event delivered");
        delivered
    }

    pub fn listener_count(&self) -> usize {
        self.emitter.listener_count()
    }
}

impl UrlEventSource for HeadlessUrlService {
    fn on_open_url(&self, listener: UrlListener) -> Subscription {
        self.emitter.subscribe(move |url| listener(url))
    }
}
