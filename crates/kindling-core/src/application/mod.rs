//! Application layer for Kindling.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (SetupService, NamingCheckService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{NamingCheckService, SetupReport, SetupService, StepOutcome, StepStatus};

// Re-export port traits (for adapter implementation)
pub use ports::{CommandCapture, Filesystem, ProcessRunner};

pub use error::ApplicationError;
