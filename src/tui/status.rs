//! Transient status line messages.

use std::time::{Duration, Instant};

/// What the status line reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusKind {
    /// Value written to the clipboard
    Copied(String),
    /// Value shown without copying
    Peeking(String),
    Error(String),
}

/// A status message that disappears after its lifetime.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub kind: StatusKind,
    expires_at: Instant,
}

impl StatusMessage {
    pub fn new(kind: StatusKind, lifetime: Duration) -> Self {
        Self {
            kind,
            expires_at: Instant::now() + lifetime,
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
