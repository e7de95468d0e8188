//! Notification state shared via Leptos context.
//!
//! One notification record exists for the whole app. Dismissing only clears
//! the visible flag so a closing toast can still show its last content.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    /// CSS class suffix used by the toast.
    pub fn as_class(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub visible: bool,
    pub message: String,
    pub severity: Severity,
    /// Bumped on every show so a stale auto-hide timer can tell it has been
    /// superseded and must not dismiss a newer notification.
    pub seq: u32,
}

impl Default for Notification {
    fn default() -> Self {
        Self {
            visible: false,
            message: String::new(),
            severity: Severity::Success,
            seq: 0,
        }
    }
}

/// Handle to the notification signal, provided via context
#[derive(Clone, Copy)]
pub struct NotifyHandle {
    notification: RwSignal<Notification>,
}

impl NotifyHandle {
    pub fn new() -> Self {
        Self {
            notification: RwSignal::new(Notification::default()),
        }
    }

    pub fn success(&self, message: &str) {
        self.show(message, Severity::Success);
    }

    pub fn error(&self, message: &str) {
        self.show(message, Severity::Error);
    }

    fn show(&self, message: &str, severity: Severity) {
        self.notification.update(|n| {
            n.visible = true;
            n.message = message.to_string();
            n.severity = severity;
            n.seq = n.seq.wrapping_add(1);
        });
    }

    /// Hide the toast but keep message and severity readable.
    pub fn dismiss(&self) {
        self.notification.update(|n| n.visible = false);
    }

    pub fn signal(&self) -> RwSignal<Notification> {
        self.notification
    }
}

/// Create the handle and provide it to all children
pub fn provide_notifications() -> NotifyHandle {
    let handle = NotifyHandle::new();
    provide_context(handle);
    handle
}

/// Get the notification handle from context
pub fn use_notifications() -> NotifyHandle {
    expect_context::<NotifyHandle>()
}
