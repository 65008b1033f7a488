//! Kindling Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Kindling
//! project bootstrapper, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          kindling-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (SetupService, NamingCheckService)     │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Filesystem, ProcessRunner)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    kindling-adapters (Infrastructure)   │
//! │ (LocalFilesystem, SystemProcessRunner)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ProjectSpec, Blueprint, SetupPlan,    │
//! │   naming rules) - No External I/O       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kindling_core::{
//!     application::SetupService,
//!     domain::{Blueprint, ProjectName, ProjectSpec, SetupPlan},
//! };
//!
//! // 1. Describe the project
//! let spec = ProjectSpec::new(ProjectName::parse("my-app").unwrap());
//!
//! // 2. Build the step plan and run it (with injected adapters)
//! let plan = SetupPlan::for_project(&spec, &blueprint).unwrap();
//! let service = SetupService::new(filesystem, processes);
//! service.execute(&plan, std::path::Path::new(".")).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        NamingCheckService, SetupService,
        ports::{CommandCapture, Filesystem, ProcessRunner},
    };
    pub use crate::domain::{
        Blueprint, NamingReport, NamingViolation, PackageManager, ProjectName, ProjectSpec,
        RenderContext, SetupPlan, SetupStep,
    };
    pub use crate::error::{KindlingError, KindlingResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
