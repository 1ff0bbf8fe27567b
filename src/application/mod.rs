//! Application layer containing the list controller and services.

/// List state controller.
pub mod controller;
/// Application services.
pub mod services;

pub use controller::UserListController;
pub use services::NotificationManager;
