//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// An external command ran and exited non-zero.
    #[error("command `{command}` failed with status {status}")]
    CommandFailed {
        command: String,
        status: i32,
        /// Captured stderr tail, for the error chain.
        stderr: String,
    },

    /// An external command could not be started at all.
    #[error("could not launch `{program}`: {reason}")]
    CommandLaunch { program: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Project already exists at target location.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// `check --staged` could not obtain the staged file list from git.
    #[error("could not list staged files: {reason}")]
    StagedListUnavailable { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::CommandFailed { command, stderr, .. } => {
                let mut out = vec![
                    format!("The command `{}` reported an error", command),
                    "Check the tool's output above for details".into(),
                ];
                if let Some(line) = stderr.lines().rev().find(|l| !l.trim().is_empty()) {
                    out.push(format!("Last error line: {}", line.trim()));
                }
                out
            }
            Self::CommandLaunch { program, .. } => vec![
                format!("`{}` could not be started", program),
                "Ensure it is installed and on your PATH".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --force to proceed anyway".into(),
                "Choose a different project name".into(),
            ],
            Self::StagedListUnavailable { .. } => vec![
                "Run the command inside a git repository".into(),
                "Or pass explicit paths: kindling check <paths>".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CommandFailed { .. } | Self::CommandLaunch { .. } => ErrorCategory::External,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::StagedListUnavailable { .. } => ErrorCategory::Validation,
        }
    }
}
