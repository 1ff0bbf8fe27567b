//! Remote user API port definition.

use async_trait::async_trait;

use crate::domain::entities::{UserDraft, UserId, UserRecord};
use crate::domain::errors::ApiError;

/// Port for the remote user resource.
///
/// The remote service only simulates writes; responses are used to decide
/// local list mutation and nothing else.
#[async_trait]
pub trait UserApiPort: Send + Sync {
    /// Fetches every user record.
    async fn list_users(&self) -> Result<Vec<UserRecord>, ApiError>;

    /// Creates a user, returning the echo with a server-assigned id.
    async fn create_user(&self, draft: &UserDraft) -> Result<UserRecord, ApiError>;

    /// Updates a user by id, returning the echoed record.
    async fn update_user(&self, id: UserId, draft: &UserDraft) -> Result<UserRecord, ApiError>;

    /// Deletes a user by id.
    async fn delete_user(&self, id: UserId) -> Result<(), ApiError>;
}
