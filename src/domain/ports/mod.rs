//! Port definitions.

pub mod user_api_port;

pub use user_api_port::UserApiPort;
