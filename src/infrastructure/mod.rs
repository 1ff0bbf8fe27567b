//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Remote user API client.
pub mod rest;

pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use rest::{DEFAULT_API_BASE, RestUserClient};
