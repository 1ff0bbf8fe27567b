//! List state and mutation rules for the user management screen.

use std::time::Duration;

use tracing::{info, warn};

use crate::application::services::NotificationManager;
use crate::domain::entities::{PLACEHOLDER_BIRTH_DATE, UserDraft, UserId, UserRecord};
use crate::domain::errors::{ApiError, DraftError};
use crate::domain::notification::Notification;

/// Owns the in-memory user list, the editing target, and the notification
/// slot. All list mutation funnels through the `apply_*` operations, which
/// run only after a successful remote response. There is no optimistic
/// mutation, and failures leave the list untouched.
pub struct UserListController {
    users: Vec<UserRecord>,
    editing: Option<UserId>,
    notifications: NotificationManager,
}

impl UserListController {
    /// Creates a controller with an empty list.
    #[must_use]
    pub const fn new(notification_lifetime: Duration) -> Self {
        Self {
            users: Vec::new(),
            editing: None,
            notifications: NotificationManager::new(notification_lifetime),
        }
    }

    /// Returns the local list.
    #[must_use]
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    /// Returns the id of the record being edited, if any.
    #[must_use]
    pub const fn editing_id(&self) -> Option<UserId> {
        self.editing
    }

    /// Returns whether the form is in edit mode.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Returns the active notification, if any.
    #[must_use]
    pub fn notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    /// Clears the active notification immediately.
    pub fn dismiss_notification(&mut self) {
        self.notifications.dismiss();
    }

    /// Expires the notification once its deadline has passed.
    pub fn tick(&mut self) {
        self.notifications.tick();
    }

    /// Replaces the list wholesale with freshly fetched records, stamping
    /// each with the placeholder birth date (the remote API has no birth
    /// date field of its own).
    pub fn apply_fetched(&mut self, users: Vec<UserRecord>) {
        self.users = users
            .into_iter()
            .map(|user| user.with_birth_date(PLACEHOLDER_BIRTH_DATE))
            .collect();
        info!(count = self.users.len(), "User list loaded");
    }

    /// Surfaces a failed initial fetch. The list stays empty; there is no
    /// automatic retry.
    pub fn apply_fetch_failed(&mut self, error: &ApiError) {
        warn!(error = %error, "Failed to fetch users");
        self.notifications
            .error("Failed to fetch users. Please try again.");
    }

    /// Appends the record echoed by a successful create, merged with the
    /// locally drafted birth date the API does not echo back.
    pub fn apply_created(&mut self, record: UserRecord, drafted_birth_date: &str) {
        info!(id = %record.id(), "User created");
        self.users.push(record.with_birth_date(drafted_birth_date));
        self.notifications
            .success("User added successfully (simulated)");
    }

    /// Replaces the matching record with the echo of a successful update,
    /// merged with the locally drafted birth date, and leaves edit mode.
    ///
    /// If the record vanished from the list in the meantime (a delete won
    /// the race), the echo is dropped and no row is touched.
    pub fn apply_updated(&mut self, record: UserRecord, drafted_birth_date: &str) {
        info!(id = %record.id(), "User updated");
        let record = record.with_birth_date(drafted_birth_date);
        if let Some(slot) = self.users.iter_mut().find(|user| user.id() == record.id()) {
            *slot = record;
        }
        self.editing = None;
        self.notifications
            .success("User updated successfully (simulated)");
    }

    /// Surfaces a failed create or update. Draft and list stay unchanged.
    pub fn apply_save_failed(&mut self, error: &ApiError) {
        warn!(error = %error, "Failed to save user");
        self.notifications
            .error("Failed to save user. Please try again.");
    }

    /// Removes the record after a successful delete.
    pub fn apply_deleted(&mut self, id: UserId) {
        info!(id = %id, "User deleted");
        self.users.retain(|user| user.id() != id);
        self.notifications
            .success("User deleted successfully (simulated)");
    }

    /// Surfaces a failed delete. The list stays unchanged.
    pub fn apply_delete_failed(&mut self, id: UserId, error: &ApiError) {
        warn!(id = %id, error = %error, "Failed to delete user");
        self.notifications
            .error("Failed to delete user. Please try again.");
    }

    /// Switches to edit mode for the chosen record and returns a draft
    /// seeded from its current field values. No network call is made.
    pub fn begin_edit(&mut self, id: UserId) -> Option<UserDraft> {
        let user = self.users.iter().find(|user| user.id() == id)?;
        self.editing = Some(id);
        Some(UserDraft::new(
            user.name(),
            user.email(),
            user.date_of_birth(),
        ))
    }

    /// Leaves edit mode without submitting.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Surfaces a draft that failed local validation; no request is issued.
    pub fn reject_draft(&mut self, error: &DraftError) {
        self.notifications.error(error.to_string());
    }
}
