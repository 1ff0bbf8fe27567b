//! Error types.

mod api_error;
mod draft_error;

pub use api_error::ApiError;
pub use draft_error::DraftError;
