//! User-facing notifications.
//!
//! Sinks are fire-and-forget: they never fail and never block the caller.

mod channel;
mod recording;
mod terminal;

use chrono::{DateTime, Utc};

pub use channel::ChannelNotifier;
pub use recording::RecordingNotifier;
pub use terminal::TerminalNotifier;

/// Whether a notification reports a success or a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

/// A message shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub at: DateTime<Utc>,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
            at: Utc::now(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Failure,
            message: message.into(),
            at: Utc::now(),
        }
    }
}

/// Presents success and failure messages to the user.
pub trait NotificationSink: Send + Sync {
    fn notify_success(&self, message: &str);

    fn notify_failure(&self, message: &str);
}
