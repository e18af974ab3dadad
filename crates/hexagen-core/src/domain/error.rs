// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside `HexagenError`)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Input Validation Errors
    // ========================================================================
    #[error("Required parameter missing: {field}")]
    MissingParameter { field: &'static str },

    #[error("Invalid solution name '{name}': {reason}")]
    InvalidSolutionName { name: String, reason: String },

    // ========================================================================
    // Configuration Errors (fixed topology / catalogue violations)
    // ========================================================================
    #[error("Unknown layer '{name}'")]
    UnknownLayer { name: String },

    #[error("Project '{qualified_name}' already belongs to the solution")]
    DuplicateProject { qualified_name: String },

    #[error("Invalid layer topology: {reason}")]
    InvalidTopology { reason: String },

    #[error("Layer '{layer}' references '{target}', which is not created before it")]
    ForwardReference { layer: String, target: String },

    #[error("Artifact '{artifact}' in layer '{layer}' imports '{referenced}' without a reference edge")]
    UndeclaredLayerReference {
        artifact: String,
        layer: String,
        referenced: String,
    },

    #[error("Invalid artifact '{artifact}': {reason}")]
    InvalidArtifact { artifact: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingParameter { field } => vec![
                format!("The --{field} option is required"),
                "See --help for available options".into(),
            ],
            Self::InvalidSolutionName { name, reason } => vec![
                format!("'{name}' cannot be used as a solution name: {reason}"),
                "The name becomes the root C# namespace of every project".into(),
                "Use letters, digits, '_' and '.', e.g. Acme or Acme.Billing".into(),
            ],
            Self::UnknownLayer { name } => vec![
                format!("'{name}' is not one of the fixed layers"),
                "Known layers: Domain, Helpers, Dapper, ExternalServices, Application, IoC, WebAPI, Tests"
                    .into(),
            ],
            _ => vec![
                "The built-in layer topology or template catalogue is inconsistent".into(),
                "This is a bug in hexagen, please report it".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingParameter { .. } | Self::InvalidSolutionName { .. } => {
                ErrorCategory::InputValidation
            }
            _ => ErrorCategory::Configuration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    InputValidation,
    Configuration,
}
