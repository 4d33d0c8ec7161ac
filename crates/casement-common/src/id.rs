use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

/// Identifier of a window, unique for the lifetime of the process.
///
/// A `WindowId` says nothing about whether the window is still open: callers
/// in other processes may hold on to one after the window has closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub u32);

impl WindowId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for WindowId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

/// Hands out window identifiers that are never reused.
#[derive(Debug)]
pub struct WindowIdSequence {
    next: AtomicU32,
}

impl WindowIdSequence {
    pub fn new() -> Self {
        Self {
            next: AtomicU32::new(1),
        }
    }

    pub fn next_id(&self) -> WindowId {
        WindowId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for WindowIdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_starts_at_one() {
        let seq = WindowIdSequence::new();
        assert_eq!(seq.next_id(), WindowId(1));
        assert_eq!(seq.next_id(), WindowId(2));
    }

    #[test]
    fn sequence_never_repeats() {
        use std::collections::HashSet;
        let seq = WindowIdSequence::default();
        let ids: HashSet<WindowId> = (0..100).map(|_| seq.next_id()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn window_id_display() {
        assert_eq!(WindowId(42).to_string(), "42");
    }

    #[test]
    fn window_id_serializes_as_plain_integer() {
        let json = serde_json::to_string(&WindowId(7)).unwrap();
        assert_eq!(json, "7");
        let back: WindowId = serde_json::from_str("7").unwrap();
        assert_eq!(back, WindowId(7));
    }
}
