//! User-facing failure notifications.
//!
//! The manager never returns errors to its caller: every rejected operation
//! is reported through a [`Notifier`] instead, the seam where a UI layer
//! hangs its toast messages. Messages are fixed per failure class so the UI
//! never has to interpret error internals.

use std::fmt;
use std::sync::{Arc, Mutex};

/// A user-facing notification describing why an operation was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// A product could not be added to the cart.
    AddFailed,
    /// A product could not be removed from the cart.
    RemoveFailed,
    /// A cart entry's quantity could not be changed.
    UpdateFailed,
    /// The requested quantity exceeds the available stock.
    OutOfStock,
}

impl Notification {
    /// The message shown to the user.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::AddFailed => "Could not add the product to the cart",
            Self::RemoveFailed => "Could not remove the product from the cart",
            Self::UpdateFailed => "Could not change the product quantity",
            Self::OutOfStock => "Requested quantity is out of stock",
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Sink for user-facing notifications.
pub trait Notifier: Send + Sync {
    /// Deliver a notification to the user.
    fn notify(&self, notification: Notification);
}

/// Notifier that logs notifications at warn level.
///
/// Suitable for embedding contexts where no UI is attached yet.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        tracing::warn!(kind = ?notification, "{notification}");
    }
}

/// Notifier that records every notification for later inspection.
///
/// Used by tests to assert on the failure contract.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    seen: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications delivered so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if a previous holder of the lock panicked.
    #[must_use]
    pub fn seen(&self) -> Vec<Notification> {
        self.seen.lock().expect("notifier lock poisoned").clone()
    }

    /// The most recent notification, if any.
    ///
    /// # Panics
    ///
    /// Panics if a previous holder of the lock panicked.
    #[must_use]
    pub fn last(&self) -> Option<Notification> {
        self.seen.lock().expect("notifier lock poisoned").last().copied()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen
            .lock()
            .expect("notifier lock poisoned")
            .push(notification);
    }
}
