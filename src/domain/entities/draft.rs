//! Form draft entity.

use chrono::NaiveDate;

use crate::domain::errors::DraftError;

/// Locally held, not-yet-submitted field values bound to the form inputs.
///
/// Cleared only after a successful submit; a failed request leaves the
/// draft untouched so the user can try again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    /// Drafted user name.
    pub name: String,
    /// Drafted email address.
    pub email: String,
    /// Drafted ISO birth date.
    pub date_of_birth: String,
}

impl UserDraft {
    /// Creates a draft from field values.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        date_of_birth: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            date_of_birth: date_of_birth.into(),
        }
    }

    /// Checks the draft before a request is issued.
    ///
    /// Mirrors the required/date input constraints of the form: every
    /// field must be present and the birth date must be a real ISO date.
    ///
    /// # Errors
    /// Returns the first failed constraint.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(DraftError::MissingEmail);
        }
        if !email.contains('@') {
            return Err(DraftError::InvalidEmail);
        }
        let date = self.date_of_birth.trim();
        if date.is_empty() {
            return Err(DraftError::MissingBirthDate);
        }
        if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
            return Err(DraftError::InvalidBirthDate);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_valid_draft() {
        let draft = UserDraft::new("Ada", "ada@example.com", "1990-12-10");
        assert!(draft.validate().is_ok());
    }

    #[test_case("", "ada@example.com", "1990-12-10" => DraftError::MissingName; "empty name")]
    #[test_case("Ada", "", "1990-12-10" => DraftError::MissingEmail; "empty email")]
    #[test_case("Ada", "not-an-email", "1990-12-10" => DraftError::InvalidEmail; "email without at sign")]
    #[test_case("Ada", "ada@example.com", "" => DraftError::MissingBirthDate; "empty birth date")]
    #[test_case("Ada", "ada@example.com", "10/12/1990" => DraftError::InvalidBirthDate; "non iso birth date")]
    #[test_case("Ada", "ada@example.com", "1990-02-30" => DraftError::InvalidBirthDate; "impossible calendar date")]
    fn test_rejected_draft(name: &str, email: &str, date: &str) -> DraftError {
        UserDraft::new(name, email, date).validate().unwrap_err()
    }

    #[test]
    fn test_whitespace_only_fields_rejected() {
        let draft = UserDraft::new("   ", "ada@example.com", "1990-12-10");
        assert_eq!(draft.validate(), Err(DraftError::MissingName));
    }
}
