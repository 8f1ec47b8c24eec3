//! Error types for checkup operations.
//!
//! This module defines [`CheckupError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `CheckupError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `CheckupError::Other`) for unexpected errors
//! - A check returning `Err` is contained by the runner and recorded as a
//!   failed result; it never aborts the run

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for checkup operations.
#[derive(Debug, Error)]
pub enum CheckupError {
    /// Configuration file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// An external command could not be spawned or exited unsuccessfully.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// A tool name with no known installation instructions.
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    /// Failed to write a report file.
    #[error("Failed to write report to {path}: {message}")]
    ReportWriteError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for checkup operations.
pub type Result<T> = std::result::Result<T, CheckupError>;
