//! Error types for sherpa operations.
//!
//! This module defines [`SherpaError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - `Validation` covers bad declarations (a parameter without a default, a
//!   provided answer outside the declared choices). These are raised before
//!   any work happens and are never retried.
//! - `Cancelled` is always distinct from `CommandFailed` so callers can tell
//!   "user declined" from "operation broke". It is re-raised after cleanup,
//!   never swallowed.
//! - Use `anyhow::Error` (via `SherpaError::Other`) for unexpected errors.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for sherpa operations.
#[derive(Debug, Error)]
pub enum SherpaError {
    /// Invalid command or selection declaration.
    #[error("Invalid declaration: {message}")]
    Validation { message: String },

    /// No repository marker found walking up from the start directory.
    #[error("Repository root not found above {start}")]
    RootNotFound { start: PathBuf },

    /// Subprocess exited non-zero for reasons other than user cancellation.
    /// Carries the captured combined output so callers running quietly can
    /// still surface the diagnostics.
    #[error("Command failed with exit code {code:?}")]
    CommandFailed { code: Option<i32>, output: String },

    /// User-initiated abort from a prompt, a declined confirmation, or a
    /// subprocess whose output indicates interruption.
    #[error("Interrupted by user")]
    Cancelled,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SherpaError {
    /// Build a validation error from any displayable message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Result type alias for sherpa operations.
pub type Result<T> = std::result::Result<T, SherpaError>;
