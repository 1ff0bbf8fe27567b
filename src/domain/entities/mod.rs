//! Entity definitions.

mod draft;
mod user;

pub use draft::UserDraft;
pub use user::{PLACEHOLDER_BIRTH_DATE, UserId, UserRecord};
