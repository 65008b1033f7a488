use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Blueprint '{blueprint}' has no files")]
    EmptyBlueprint { blueprint: String },

    #[error("Duplicate path in blueprint: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Unknown package manager '{value}'")]
    UnknownPackageManager { value: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Generator command is empty")]
    EmptyGenerator,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "Use alphanumeric characters, hyphens, and underscores".into(),
                "Examples: my-app, web_client, site2".into(),
            ],
            Self::UnknownPackageManager { value } => vec![
                format!("'{}' is not a supported package manager", value),
                "Supported: npm, pnpm, yarn, bun".into(),
            ],
            Self::EmptyBlueprint { blueprint } => vec![
                format!("Blueprint '{}' is corrupted", blueprint),
                "Please report this issue".into(),
            ],
            Self::EmptyGenerator => vec![
                "The configured generator command has no program".into(),
                "Check the [generator] section of your configuration".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } | Self::UnknownPackageManager { .. } => {
                ErrorCategory::Validation
            }
            Self::EmptyGenerator => ErrorCategory::Configuration,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Internal,
}
