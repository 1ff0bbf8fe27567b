//! Transient notification banner.

use std::time::{Duration, Instant};

/// Outcome flavour of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Operation completed.
    Success,
    /// Operation failed.
    Error,
}

/// A transient banner with a bounded display lifetime.
///
/// Each notification carries its own deadline, so replacing one can never
/// leave a stale timer behind to clear its successor early.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Banner flavour.
    pub level: NotificationLevel,
    /// User-facing message.
    pub message: String,
    /// Moment the banner stops being shown unless dismissed earlier.
    pub expires_at: Instant,
}

impl Notification {
    /// Creates a notification expiring after `lifetime`.
    #[must_use]
    pub fn new(level: NotificationLevel, message: impl Into<String>, lifetime: Duration) -> Self {
        Self {
            level,
            message: message.into(),
            expires_at: Instant::now() + lifetime,
        }
    }

    /// Creates a success notification.
    #[must_use]
    pub fn success(message: impl Into<String>, lifetime: Duration) -> Self {
        Self::new(NotificationLevel::Success, message, lifetime)
    }

    /// Creates an error notification.
    #[must_use]
    pub fn error(message: impl Into<String>, lifetime: Duration) -> Self {
        Self::new(NotificationLevel::Error, message, lifetime)
    }

    /// Returns whether the display lifetime has elapsed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::success("User added", Duration::from_secs(1));
        assert_eq!(n.level, NotificationLevel::Success);
        assert_eq!(n.message, "User added");
        assert!(!n.is_expired());
    }

    #[test]
    fn test_notification_expiry() {
        let n = Notification::error("Failed", Duration::ZERO);
        assert!(n.is_expired());
    }
}
