//! Error types for devrun operations.
//!
//! This module defines [`DevrunError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A delegated command that exits non-zero is *not* an error: its exit
//!   status travels back in a `CommandResult` and becomes the process status
//! - `DevrunError` covers failures of devrun itself (bad config, a program
//!   that cannot be started, a broken command table)
//! - Use `anyhow::Error` (via `DevrunError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for devrun operations.
#[derive(Debug, Error)]
pub enum DevrunError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A command table entry references a command that is not registered.
    #[error("Unknown command: {name}")]
    UnknownCommand { name: String },

    /// Command dependency cycle detected.
    #[error("Circular dependency detected: {cycle}")]
    CircularDependency { cycle: String },

    /// An external program could not be started at all.
    #[error("Failed to start '{program}': {message}")]
    SpawnFailed { program: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for devrun operations.
pub type Result<T> = std::result::Result<T, DevrunError>;
