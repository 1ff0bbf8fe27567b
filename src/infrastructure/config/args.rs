//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

use super::app_config::LogLevel;

/// Command-line arguments. Every option overrides its config-file
/// counterpart when present.
#[derive(Debug, Parser)]
#[command(
    name = "userdeck",
    version,
    about = "A terminal client for managing user records over a REST API",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Base URL of the remote user API.
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Notification display duration in milliseconds.
    #[arg(long, value_name = "MS")]
    pub notification_duration_ms: Option<u64>,
}
