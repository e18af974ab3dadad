//! Application layer errors.
//!
//! These errors represent failures in orchestration and in the collaborators
//! behind the ports, not rule violations. Rule violations are `DomainError`
//! from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while driving the generation pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The toolchain ran and exited unsuccessfully.
    #[error("Toolchain command failed ({}): {command}", exit_code_label(.code))]
    ToolchainFailed { command: String, code: Option<i32> },

    /// The toolchain could not be started at all.
    #[error("Toolchain '{program}' is not available: {reason}")]
    ToolchainUnavailable { program: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A driver step was called out of order.
    #[error("Cannot move from '{from}' to '{to}'")]
    InvalidTransition { from: &'static str, to: &'static str },

    /// Shared adapter state was poisoned by a panicking thread.
    #[error("Lock poisoned: {resource}")]
    LockPoisoned { resource: &'static str },
}

fn exit_code_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ToolchainFailed { command, .. } => vec![
                format!("Re-run the failing step by hand to see its output: dotnet {command}"),
                "The solution directory is left as-is; remove it before retrying".into(),
            ],
            Self::ToolchainUnavailable { program, .. } => vec![
                format!("Make sure '{program}' is installed and on your PATH"),
                "Or point toolchain.program at it in the config file".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::InvalidTransition { .. } | Self::LockPoisoned { .. } => {
                vec!["This is a bug in hexagen, please report it".into()]
            }
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ToolchainFailed { .. } | Self::ToolchainUnavailable { .. } => {
                ErrorCategory::ExternalTool
            }
            Self::FilesystemError { .. }
            | Self::InvalidTransition { .. }
            | Self::LockPoisoned { .. } => ErrorCategory::Internal,
        }
    }
}
