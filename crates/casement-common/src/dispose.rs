//! Scoped release of event subscriptions.
//!
//! A [`Subscription`] runs its release action at most once, either through
//! an explicit [`Subscription::dispose`] or when dropped. A
//! [`DisposableStore`] owns a batch of subscriptions and releases them
//! together.

use std::fmt;

use tracing::warn;

/// A live registration against an event source.
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Wrap a release action. It runs exactly once.
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release.
    pub fn empty() -> Self {
        Self { release: None }
    }

    pub fn dispose(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.release.is_none()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

/// Owns subscriptions until they are released together.
#[derive(Debug, Default)]
pub struct DisposableStore {
    items: Vec<Subscription>,
    disposed: bool,
}

impl DisposableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a subscription.
    ///
    /// Adding to a store that was already disposed releases the subscription
    /// immediately so it cannot leak.
    pub fn add(&mut self, mut subscription: Subscription) {
        if self.disposed {
            warn!("subscription added to a disposed store, releasing it immediately");
            subscription.dispose();
            return;
        }
        self.items.push(subscription);
    }

    /// Release every held subscription once. Later calls do nothing.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        for mut subscription in self.items.drain(..) {
            subscription.dispose();
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Drop for DisposableStore {
    fn drop(&mut self) {
        self.dispose();
    }
}
