//! Single-slot notification toast

use std::time::{Duration, Instant};

/// How long a toast stays on screen
const DISPLAY_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient toast message. At most one exists at a time: showing a
/// new one replaces the previous (last-write-wins, no merging).
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    shown_at: Instant,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Error)
    }

    fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at: Instant::now(),
        }
    }

    /// Whether the toast has outlived its display window
    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= DISPLAY_DURATION
    }
}
