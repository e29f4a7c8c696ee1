//! Error types for extcheck operations.
//!
//! This module defines [`ExtcheckError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A missing capability is never an error. It is a normal outcome carried
//!   by [`ReconciliationResult`](crate::requirements::ReconciliationResult)
//!   and surfaced through the exit code.
//! - `ExtcheckError` covers the cases where the check could not run at all:
//!   the PHP binary is unusable or the settings file is broken.
//! - Use `anyhow::Error` (via `ExtcheckError::Other`) for unexpected errors.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for extcheck operations.
#[derive(Debug, Error)]
pub enum ExtcheckError {
    /// The PHP binary could not be spawned.
    #[error("Cannot run PHP binary '{binary}': {message}")]
    ProbeUnavailable { binary: PathBuf, message: String },

    /// The PHP binary ran but its introspection output was unusable.
    #[error("PHP introspection failed: {message}")]
    ProbeFailed { message: String },

    /// An explicitly requested settings file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the settings file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for extcheck operations.
pub type Result<T> = std::result::Result<T, ExtcheckError>;
