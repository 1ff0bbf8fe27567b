//! User record entity.

use serde::{Deserialize, Serialize};

/// Birth date stamped onto every record loaded from the remote API.
///
/// The demo API has no birth date field, so the initial fetch fills one in.
/// This is a deliberate stub of the upstream service, kept as-is.
pub const PLACEHOLDER_BIRTH_DATE: &str = "2001-01-01";

/// Remote-assigned user identifier. Immutable once assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub u64);

impl UserId {
    /// Returns the raw id value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A user record held in the local list.
///
/// The local list is the sole source of truth for rendering; the remote
/// service simulates writes and is only re-read at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    id: UserId,
    name: String,
    email: String,
    date_of_birth: String,
}

impl UserRecord {
    /// Creates a new record.
    #[must_use]
    pub fn new(
        id: impl Into<UserId>,
        name: impl Into<String>,
        email: impl Into<String>,
        date_of_birth: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            date_of_birth: date_of_birth.into(),
        }
    }

    /// Returns the record id.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the user name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the ISO birth date.
    #[must_use]
    pub fn date_of_birth(&self) -> &str {
        &self.date_of_birth
    }

    /// Returns the record with its birth date replaced.
    ///
    /// The remote API never echoes the birth date, so callers merge the
    /// locally held value back in.
    #[must_use]
    pub fn with_birth_date(mut self, date_of_birth: impl Into<String>) -> Self {
        self.date_of_birth = date_of_birth.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let user = UserRecord::new(3, "Ada", "ada@example.com", "1990-12-10");
        assert_eq!(user.id(), UserId(3));
        assert_eq!(user.name(), "Ada");
        assert_eq!(user.email(), "ada@example.com");
        assert_eq!(user.date_of_birth(), "1990-12-10");
    }

    #[test]
    fn test_birth_date_merge() {
        let user = UserRecord::new(1, "Ada", "ada@example.com", "");
        let merged = user.with_birth_date(PLACEHOLDER_BIRTH_DATE);
        assert_eq!(merged.date_of_birth(), "2001-01-01");
        assert_eq!(merged.id(), UserId(1));
    }
}
