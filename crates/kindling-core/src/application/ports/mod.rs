//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `kindling-adapters` crate provides implementations.

use std::path::Path;

use crate::error::KindlingResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `kindling_adapters::filesystem::LocalFilesystem` (production)
/// - `kindling_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> KindlingResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> KindlingResult<()>;

    /// Mark a file executable (no-op on platforms without a mode bit).
    fn make_executable(&self, path: &Path) -> KindlingResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for running external programs.
///
/// Implemented by:
/// - `kindling_adapters::process::SystemProcessRunner` (production)
/// - `kindling_adapters::process::ScriptedProcessRunner` (testing)
///
/// ## Design Notes
///
/// The runner captures output rather than streaming it: every invocation is
/// short-lived relative to the run, and captured stderr feeds error
/// messages. The whole tool is synchronous (one blocking invocation at a
/// time), so no cancellation surface is needed.
#[cfg_attr(test, mockall::automock)]
pub trait ProcessRunner: Send + Sync {
    /// Run `program` with `args` in `cwd`, blocking until it exits.
    ///
    /// Returns `Ok` with the capture even when the program exits non-zero;
    /// `Err` only when the program could not be started.
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> KindlingResult<CommandCapture>;
}

/// Everything observed from one finished command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandCapture {
    pub program: String,
    pub args: Vec<String>,
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandCapture {
    pub fn success(&self) -> bool {
        self.status == 0
    }
}
