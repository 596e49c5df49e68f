//! Notifications: transient success/failure messages shown to the visitor.

use std::time::Duration;

use crate::config::NotificationText;
use crate::state::Shared;

/// Notification kind (affects styling on the host).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

/// A notification for the sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    /// Title to display (single line)
    pub title: String,
    /// Secondary text under the title
    pub description: String,
    /// How long to show the notification
    pub duration: Duration,
}

impl Notification {
    /// Build a notification of the given kind from configured text
    pub fn from_text(kind: NotificationKind, text: &NotificationText) -> Self {
        Self {
            kind,
            title: text.title.clone(),
            description: text.description.clone(),
            duration: text.duration(),
        }
    }
}

/// Where notifications go. Fire-and-forget: nothing is returned to the caller.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// A sink that keeps every notification it receives.
///
/// Clones share the same queue, so the host (or a test) can keep a handle
/// and drain what the page emitted.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    pending: Shared<Vec<Notification>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return all queued notifications.
    pub fn take(&self) -> Vec<Notification> {
        self.pending.update(std::mem::take)
    }

    /// Copy of the queued notifications.
    pub fn snapshot(&self) -> Vec<Notification> {
        self.pending.get()
    }

    pub fn len(&self) -> usize {
        self.pending.read(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NotificationSink for ToastQueue {
    fn notify(&self, notification: Notification) {
        log::debug!("ToastQueue: queued '{}'", notification.title);
        self.pending.update(|pending| pending.push(notification));
    }
}

/// A sink that writes notifications to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => log::info!(
                "{} - {} ({}ms)",
                notification.title,
                notification.description,
                notification.duration.as_millis()
            ),
            NotificationKind::Failure => log::warn!(
                "{} - {} ({}ms)",
                notification.title,
                notification.description,
                notification.duration.as_millis()
            ),
        }
    }
}
