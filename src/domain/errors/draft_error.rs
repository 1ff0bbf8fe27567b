//! Draft validation error types.

use thiserror::Error;

/// A form draft that cannot be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum DraftError {
    #[error("Name is required")]
    MissingName,

    #[error("Email is required")]
    MissingEmail,

    #[error("Email address looks invalid")]
    InvalidEmail,

    #[error("Date of birth is required")]
    MissingBirthDate,

    #[error("Date of birth must be a valid date (YYYY-MM-DD)")]
    InvalidBirthDate,
}
