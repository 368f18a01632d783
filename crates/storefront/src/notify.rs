//! User-facing notification dispatch.
//!
//! Services announce outcomes (item added, max stock reached, order placed)
//! through the [`Notifier`] trait. Rendering is a collaborator concern: a UI
//! would show toasts, the CLI prints them, tests record them. The services
//! only ever call [`Notifier::notify`].

use std::sync::{Mutex, PoisonError};

use uuid::Uuid;

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// A single dispatched notification.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique id, so renderers can key ephemeral toasts.
    pub id: Uuid,
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            severity,
            message: message.into(),
        }
    }
}

/// Notification sink the services dispatch into.
pub trait Notifier: Send + Sync {
    /// Dispatch one notification.
    fn notify(&self, notification: Notification);
}

/// Convenience dispatch helpers on top of [`Notifier::notify`].
///
/// Provided for every `Notifier` — including `dyn Notifier` — via a blanket
/// impl, so services holding an `Arc<dyn Notifier>` and tests holding a
/// concrete notifier share the same ergonomic `success`/`error`/`info` sugar.
pub trait NotifierExt {
    /// Dispatch a success notification.
    fn success(&self, message: impl Into<String>);

    /// Dispatch an error notification.
    fn error(&self, message: impl Into<String>);

    /// Dispatch an info notification.
    fn info(&self, message: impl Into<String>);
}

impl<T: Notifier + ?Sized> NotifierExt for T {
    fn success(&self, message: impl Into<String>) {
        self.notify(Notification::new(Severity::Success, message));
    }

    fn error(&self, message: impl Into<String>) {
        self.notify(Notification::new(Severity::Error, message));
    }

    fn info(&self, message: impl Into<String>) {
        self.notify(Notification::new(Severity::Info, message));
    }
}

/// Default notifier: routes notifications to `tracing` at matching levels.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Success | Severity::Info => {
                tracing::info!(severity = %notification.severity, "{}", notification.message);
            }
            Severity::Error => {
                tracing::warn!(severity = %notification.severity, "{}", notification.message);
            }
        }
    }
}

/// Recording notifier: keeps every notification in memory.
///
/// Used by tests and by the CLI demo to show what a UI would have toasted.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    /// Create an empty recording notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications recorded so far, in dispatch order.
    #[must_use]
    pub fn all(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Remove and return all recorded notifications.
    pub fn drain(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_notifier_records_in_order() {
        let notifier = MemoryNotifier::new();
        notifier.success("first");
        notifier.error("second");

        let recorded = notifier.all();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0].severity, Severity::Success);
        assert_eq!(recorded[0].message, "first");
        assert_eq!(recorded[1].severity, Severity::Error);
        assert_eq!(recorded[1].message, "second");
    }

    #[test]
    fn test_memory_notifier_drain_empties() {
        let notifier = MemoryNotifier::new();
        notifier.info("once");

        assert_eq!(notifier.drain().len(), 1);
        assert!(notifier.all().is_empty());
    }

    #[test]
    fn test_notification_ids_are_unique() {
        let notifier = MemoryNotifier::new();
        notifier.info("a");
        notifier.info("b");

        let recorded = notifier.all();
        assert_ne!(recorded[0].id, recorded[1].id);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Success.to_string(), "success");
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Info.to_string(), "info");
    }
}
