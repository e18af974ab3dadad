//! Unified error handling for hexagen core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions and a category the CLI maps to an
//! exit code.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for hexagen core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HexagenError {
    /// Errors from the domain layer (invalid input, topology violations).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (toolchain, filesystem, sequencing).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl HexagenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec!["This appears to be a bug in hexagen".into()],
        }
    }

    /// Get error category for display and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::InputValidation => ErrorCategory::InputValidation,
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing or malformed user input.
    InputValidation,
    /// Inconsistent built-in topology or catalogue.
    Configuration,
    /// The external toolchain failed or is missing.
    ExternalTool,
    Internal,
}

/// Convenient result type alias.
pub type HexagenResult<T> = Result<T, HexagenError>;
