//! Single-slot transient notification state.

use std::time::Duration;

use crate::domain::{Notification, NotificationLevel};

/// Default display lifetime of a banner.
pub const DEFAULT_LIFETIME: Duration = Duration::from_millis(1000);

/// Holds at most one active notification.
///
/// A new notification replaces the prior one and restarts the lifetime.
/// Expiry is deadline-based and checked on `tick`, so replacing a banner
/// implicitly cancels the old deadline.
#[derive(Debug)]
pub struct NotificationManager {
    current: Option<Notification>,
    lifetime: Duration,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new(DEFAULT_LIFETIME)
    }
}

impl NotificationManager {
    /// Creates a manager with the given banner lifetime.
    #[must_use]
    pub const fn new(lifetime: Duration) -> Self {
        Self {
            current: None,
            lifetime,
        }
    }

    /// Shows a notification, replacing any active one.
    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.current = Some(Notification::new(level, message, self.lifetime));
    }

    /// Shows a success notification.
    pub fn success(&mut self, message: impl Into<String>) {
        self.notify(NotificationLevel::Success, message);
    }

    /// Shows an error notification.
    pub fn error(&mut self, message: impl Into<String>) {
        self.notify(NotificationLevel::Error, message);
    }

    /// Clears the active notification immediately.
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Drops the active notification once its deadline has passed.
    pub fn tick(&mut self) {
        if self.current.as_ref().is_some_and(Notification::is_expired) {
            self.current = None;
        }
    }

    /// Returns the active notification, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn expire_current(manager: &mut NotificationManager) {
        manager.current.as_mut().unwrap().expires_at = Instant::now()
            .checked_sub(Duration::from_secs(1))
            .unwrap();
    }

    #[test]
    fn test_single_slot_replacement() {
        let mut manager = NotificationManager::default();
        manager.success("first");
        manager.error("second");

        let current = manager.current().unwrap();
        assert_eq!(current.message, "second");
        assert_eq!(current.level, NotificationLevel::Error);
    }

    #[test]
    fn test_tick_clears_expired() {
        let mut manager = NotificationManager::default();
        manager.success("done");

        manager.tick();
        assert!(manager.current().is_some());

        expire_current(&mut manager);
        manager.tick();
        assert!(manager.current().is_none());
    }

    #[test]
    fn test_replacement_restarts_lifetime() {
        let mut manager = NotificationManager::default();
        manager.success("first");
        expire_current(&mut manager);

        // The replacement gets a fresh deadline; the stale one is gone.
        manager.success("second");
        manager.tick();
        assert_eq!(manager.current().unwrap().message, "second");
    }

    #[test]
    fn test_manual_dismissal() {
        let mut manager = NotificationManager::default();
        manager.error("oops");
        manager.dismiss();
        assert!(manager.current().is_none());
    }
}
