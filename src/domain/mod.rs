//! Domain layer with core business entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Transient notifications.
pub mod notification;
/// Port definitions.
pub mod ports;

pub use entities::{PLACEHOLDER_BIRTH_DATE, UserDraft, UserId, UserRecord};
pub use errors::{ApiError, DraftError};
pub use notification::{Notification, NotificationLevel};
pub use ports::UserApiPort;
