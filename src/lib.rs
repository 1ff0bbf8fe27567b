//! Userdeck - a terminal client for managing user records.
//!
//! This crate provides a TUI for listing, creating, editing, and deleting
//! user records against a remote REST endpoint. The remote service is a
//! demo API that simulates writes, so the locally held list is the sole
//! source of truth after the initial fetch.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the list controller and services.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing UI components and widgets.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "userdeck";
