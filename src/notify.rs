//! Transient user notifications (toasts)
//!
//! Every tablature action reports what it did through a [`NotificationSink`].
//! The WASM layer uses a [`NotificationQueue`] and hands the queued toasts to
//! JavaScript after each call.

use serde::{Deserialize, Serialize};

/// One toast message with its icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub icon: String,
}

impl Notification {
    pub fn new(message: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            icon: icon.into(),
        }
    }
}

pub const ICON_NOTE: &str = "🎵";
pub const ICON_TOOL: &str = "✅";
pub const ICON_UNDO: &str = "↩️";
pub const ICON_INFO: &str = "ℹ️";

/// Receives toasts emitted by tablature actions
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

/// Buffers notifications until the host drains them
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationQueue {
    pending: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> &[Notification] {
        &self.pending
    }

    /// Remove and return everything queued so far
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.pending)
    }
}

impl NotificationSink for NotificationQueue {
    fn notify(&mut self, notification: Notification) {
        self.pending.push(notification);
    }
}

/// Forwards notifications to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&mut self, notification: Notification) {
        log::info!("{} {}", notification.icon, notification.message);
    }
}

impl<S: NotificationSink + ?Sized> NotificationSink for &mut S {
    fn notify(&mut self, notification: Notification) {
        (**self).notify(notification);
    }
}
